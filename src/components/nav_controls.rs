//! Back / Next / Submit controls under the question.

use dioxus::prelude::*;
use intake_core::WizardState;
use intake_ui::{submit_label, Button, ButtonVariant};

/// Snapshot of the wizard flags the controls render from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub can_go_back: bool,
    /// On the last question Submit replaces Next
    pub is_last: bool,
    pub can_advance: bool,
    pub can_submit: bool,
    pub in_flight: bool,
}

impl NavState {
    pub fn from_wizard(state: &WizardState) -> Self {
        Self {
            can_go_back: state.can_go_back(),
            is_last: state.is_last(),
            can_advance: state.can_advance(),
            can_submit: state.can_submit(),
            in_flight: state.submission().in_flight,
        }
    }

    /// The forward button: its variant and whether it is disabled.
    pub fn primary(&self) -> (ButtonVariant, bool) {
        if self.is_last {
            (ButtonVariant::Submit, !self.can_submit)
        } else {
            (ButtonVariant::Next, !self.can_advance)
        }
    }

    fn primary_text(&self) -> &'static str {
        if self.is_last {
            submit_label(self.in_flight)
        } else {
            "Next"
        }
    }
}

/// Props for NavControls component
#[derive(Props, Clone, PartialEq)]
pub struct NavControlsProps {
    pub nav: NavState,
    pub on_previous: EventHandler<()>,
    pub on_next: EventHandler<()>,
    pub on_submit: EventHandler<()>,
}

/// Back is hidden on the first question. Next is disabled until the
/// current field has an answer; Submit additionally while a request is
/// in flight.
#[component]
pub fn NavControls(props: NavControlsProps) -> Element {
    let (variant, disabled) = props.nav.primary();
    let text = props.nav.primary_text();
    let on_forward = if props.nav.is_last {
        props.on_submit
    } else {
        props.on_next
    };

    rsx! {
        div { class: "button-container dual-buttons",
            if props.nav.can_go_back {
                Button {
                    variant: ButtonVariant::Back,
                    onclick: props.on_previous,
                    "Back"
                }
            }
            Button {
                variant,
                disabled,
                onclick: on_forward,
                "{text}"
            }
        }
    }
}
