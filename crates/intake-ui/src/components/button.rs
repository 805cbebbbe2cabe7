//! Button Components
//!
//! Navigation and action buttons for the question card:
//! - Next: advances the wizard
//! - Back: returns to the previous question
//! - Submit: sends the answers on the last step

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Forward navigation
    #[default]
    Next,
    /// Backward navigation, visually quieter
    Back,
    /// Final submit action
    Submit,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Next => "next-button",
            ButtonVariant::Back => "previous-button",
            ButtonVariant::Submit => "submit-button",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Next,
///         disabled: !wizard.read().can_advance(),
///         onclick: move |_| wizard.write().go_next(),
///         "Next"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Label for the submit button.
pub fn submit_label(in_flight: bool) -> &'static str {
    if in_flight {
        "Submitting..."
    } else {
        "Submit"
    }
}

pub(crate) fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
