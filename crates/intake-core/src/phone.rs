//! Country-aware phone capture.
//!
//! Phone answers are stored as digits only: the country's dialling code
//! followed by the national number (`919876543210`). Nothing is validated
//! beyond stripping non-digits.

use std::cmp::Reverse;
use std::fmt;

use crate::error::IntakeError;

/// ISO code of the country preselected in the phone input.
pub const DEFAULT_COUNTRY: &str = "in";

/// One entry of the dialling table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Lowercase ISO 3166-1 alpha-2 code
    pub iso: &'static str,
    pub name: &'static str,
    /// Dialling code without the leading `+`
    pub dial_code: &'static str,
}

static COUNTRIES: &[Country] = &[
    Country { iso: "in", name: "India", dial_code: "91" },
    Country { iso: "us", name: "United States", dial_code: "1" },
    Country { iso: "ca", name: "Canada", dial_code: "1" },
    Country { iso: "gb", name: "United Kingdom", dial_code: "44" },
    Country { iso: "au", name: "Australia", dial_code: "61" },
    Country { iso: "ae", name: "United Arab Emirates", dial_code: "971" },
    Country { iso: "sg", name: "Singapore", dial_code: "65" },
    Country { iso: "np", name: "Nepal", dial_code: "977" },
    Country { iso: "bd", name: "Bangladesh", dial_code: "880" },
    Country { iso: "lk", name: "Sri Lanka", dial_code: "94" },
    Country { iso: "pk", name: "Pakistan", dial_code: "92" },
    Country { iso: "de", name: "Germany", dial_code: "49" },
];

impl Country {
    /// Every supported country, default first.
    pub fn all() -> &'static [Country] {
        COUNTRIES
    }

    /// Look up a country by ISO code (case-insensitive).
    pub fn find(iso: &str) -> Result<&'static Country, IntakeError> {
        COUNTRIES
            .iter()
            .find(|c| c.iso.eq_ignore_ascii_case(iso.trim()))
            .ok_or_else(|| IntakeError::UnknownCountry(iso.to_string()))
    }

    /// India.
    pub fn default_country() -> &'static Country {
        &COUNTRIES[0]
    }

    /// Build the stored value from a national number typed by the user.
    ///
    /// An empty national part yields an empty string so the field stays
    /// unsatisfied.
    pub fn compose(&self, national: &str) -> String {
        let digits = digits_only(national);
        if digits.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.dial_code, digits)
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{})", self.name, self.dial_code)
    }
}

fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Split a stored value back into country and national number.
///
/// Picks the longest matching dialling code, preferring `preferred` on
/// ties (US/Canada share `1`). Values with no known prefix come back whole
/// under `preferred`.
pub fn split(stored: &str, preferred: &'static Country) -> (&'static Country, String) {
    let digits = digits_only(stored);
    if digits.is_empty() {
        return (preferred, String::new());
    }
    if digits.starts_with(preferred.dial_code)
        && !COUNTRIES.iter().any(|c| {
            c.dial_code.len() > preferred.dial_code.len() && digits.starts_with(c.dial_code)
        })
    {
        return (preferred, digits[preferred.dial_code.len()..].to_string());
    }
    COUNTRIES
        .iter()
        .filter(|c| digits.starts_with(c.dial_code))
        .min_by_key(|c| Reverse(c.dial_code.len()))
        .map(|c| (c, digits[c.dial_code.len()..].to_string()))
        .unwrap_or((preferred, digits))
}

/// Stored value for free-form input such as a CLI argument.
///
/// Input starting with `+` already carries its dialling code; anything
/// else is treated as a national number in `country`.
pub fn from_input(raw: &str, country: &Country) -> String {
    let raw = raw.trim();
    if raw.starts_with('+') {
        digits_only(raw)
    } else {
        country.compose(raw)
    }
}

/// `+91 9876543210` style rendering of a stored value.
pub fn display(stored: &str, preferred: &'static Country) -> String {
    if stored.is_empty() {
        return String::new();
    }
    let (country, national) = split(stored, preferred);
    format!("+{} {}", country.dial_code, national)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_india() {
        let c = Country::default_country();
        assert_eq!(c.iso, DEFAULT_COUNTRY);
        assert_eq!(c.dial_code, "91");
    }

    #[test]
    fn compose_prefixes_dial_code_and_strips_formatting() {
        let india = Country::default_country();
        assert_eq!(india.compose("98765 43210"), "919876543210");
        assert_eq!(india.compose("(987) 654-3210"), "919876543210");
        assert_eq!(india.compose(""), "");
        assert_eq!(india.compose(" - "), "");
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(Country::find("GB").unwrap().dial_code, "44");
        assert!(matches!(
            Country::find("zz"),
            Err(IntakeError::UnknownCountry(_))
        ));
    }

    #[test]
    fn split_prefers_longest_code() {
        let india = Country::default_country();
        let (country, national) = split("9779812345678", india);
        assert_eq!(country.iso, "np");
        assert_eq!(national, "9812345678");

        let (country, national) = split("919876543210", india);
        assert_eq!(country.iso, "in");
        assert_eq!(national, "9876543210");
    }

    #[test]
    fn split_falls_back_to_first_listed_on_shared_code() {
        let (country, national) = split("12025550100", Country::default_country());
        assert_eq!(country.iso, "us");
        assert_eq!(national, "2025550100");
    }

    #[test]
    fn split_keeps_preferred_on_shared_code() {
        let canada = Country::find("ca").unwrap();
        let (country, _) = split("14165550100", canada);
        assert_eq!(country.iso, "ca");
    }

    #[test]
    fn from_input_respects_explicit_dial_code() {
        let india = Country::default_country();
        assert_eq!(from_input("+1 202 555 0100", india), "12025550100");
        assert_eq!(from_input("98765 43210", india), "919876543210");
        assert_eq!(from_input("   ", india), "");
    }

    #[test]
    fn display_renders_plus_and_space() {
        let india = Country::default_country();
        assert_eq!(display("919876543210", india), "+91 9876543210");
        assert_eq!(display("", india), "");
    }
}
