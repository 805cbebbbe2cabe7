use std::rc::Rc;

use dioxus::prelude::*;
use intake_core::{HttpTransport, Submitter, WizardState};

use crate::context::{get_config, PhoneCountry, SharedSubmitter, WebviewRedirect};
use crate::pages::Questionnaire;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the wizard context, then renders the
/// questionnaire.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);
    let wizard: Signal<WizardState> = use_signal(WizardState::new);
    let phone_country = use_signal(|| config.default_country);

    // Provide wizard context to all child components
    use_context_provider(|| wizard);
    use_context_provider(|| PhoneCountry(phone_country));
    use_context_provider(move || -> SharedSubmitter {
        Rc::new(Submitter::new(config, HttpTransport::new(), WebviewRedirect))
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Questionnaire {}
    }
}
