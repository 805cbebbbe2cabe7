//! Wizard context provider for the intake questionnaire.
//!
//! Provides the wizard state, the remembered phone country, and the
//! submitter to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut wizard = use_wizard();
//! wizard.write().go_next();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use intake_core::{Country, HttpTransport, IntakeConfig, Redirector, Submitter, WizardState};

/// Submitter type shared through context.
///
/// `Rc` because Dioxus tasks run on the UI thread; the submitter is cloned
/// into each spawned submission.
pub type SharedSubmitter = Rc<Submitter<HttpTransport, WebviewRedirect>>;

/// Get the intake configuration.
/// Uses the global config set from command line args.
pub fn get_config() -> IntakeConfig {
    crate::get_config()
}

/// Replaces the webview page with the redirect target.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewRedirect;

impl Redirector for WebviewRedirect {
    fn redirect(&self, url: &str) {
        tracing::info!(%url, "Navigating away from the questionnaire");
        let _ = dioxus::document::eval(&redirect_script(url));
    }
}

/// JS that replaces the current page with `url`, leaving no history entry.
pub fn redirect_script(url: &str) -> String {
    // JSON string literals are valid JS string literals.
    let literal = serde_json::to_string(url).unwrap_or_else(|_| "\"about:blank\"".to_string());
    format!("window.location.replace({});", literal)
}

/// Hook to access the wizard state from context.
pub fn use_wizard() -> Signal<WizardState> {
    use_context::<Signal<WizardState>>()
}

/// Country last picked in the phone input.
///
/// Lives above the question card so it outlasts the input's remount when
/// the user navigates away and back.
#[derive(Clone, Copy, PartialEq)]
pub struct PhoneCountry(pub Signal<&'static Country>);

/// Hook to access the remembered phone country from context.
pub fn use_phone_country() -> Signal<&'static Country> {
    use_context::<PhoneCountry>().0
}

/// Hook to access the submitter from context.
pub fn use_submitter() -> SharedSubmitter {
    use_context::<SharedSubmitter>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_script_quotes_url() {
        assert_eq!(
            redirect_script("https://rzp.io/rzp/onetime-consultation"),
            r#"window.location.replace("https://rzp.io/rzp/onetime-consultation");"#
        );
    }

    #[test]
    fn redirect_script_escapes_quotes() {
        let script = redirect_script(r#"https://x.test/?a="b""#);
        assert_eq!(
            script,
            r#"window.location.replace("https://x.test/?a=\"b\"");"#
        );
    }
}
