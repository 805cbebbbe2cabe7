//! Runtime configuration shared by the desktop app and the CLI.

use crate::error::IntakeError;
use crate::phone::Country;

/// Intake endpoint that receives the form post.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycby8GNaGDZ0r3WiC8dAU27dmQ8srMEswWhYYUZ8hm7On3JbtSdVYrOAZeh-chxYVM8g7zg/exec";

/// Payment link opened after a successful submission.
pub const DEFAULT_REDIRECT_URL: &str = "https://rzp.io/rzp/onetime-consultation";

/// Where answers go and where the user lands afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    pub endpoint: String,
    pub redirect_url: String,
    /// Country preselected in the phone input
    pub default_country: &'static Country,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
            default_country: Country::default_country(),
        }
    }
}

impl IntakeConfig {
    /// Defaults with any provided overrides applied.
    pub fn from_overrides(
        endpoint: Option<String>,
        redirect_url: Option<String>,
        country: Option<&str>,
    ) -> Result<Self, IntakeError> {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint {
            config.endpoint = endpoint;
        }
        if let Some(url) = redirect_url {
            config.redirect_url = url;
        }
        if let Some(iso) = country {
            config.default_country = Country::find(iso)?;
        }
        Ok(config)
    }
}
