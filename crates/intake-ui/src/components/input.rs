//! Text Input Component
//!
//! Single-line capture used by the free-text and numeric questions.
//! Numeric mode only changes the HTML input type; the value still arrives
//! as a string and is stored untouched.

use dioxus::prelude::*;

use super::button::join_classes;

/// Which flavour of text input to render
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextMode {
    #[default]
    Text,
    Number,
}

impl TextMode {
    /// HTML `type` attribute
    pub fn input_type(&self) -> &'static str {
        match self {
            TextMode::Text => "text",
            TextMode::Number => "number",
        }
    }
}

/// Properties for the TextInput component
#[derive(Clone, PartialEq, Props)]
pub struct TextInputProps {
    /// Current input value
    pub value: String,
    /// Handler called with the raw text on every change
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub mode: TextMode,
    #[props(default = "Type your answer".to_string())]
    pub placeholder: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input wrapped in the `input-container` block.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextInput {
///         value: answer,
///         mode: TextMode::Number,
///         oninput: move |s| wizard.write().set_answer(Field::Age, s),
///     }
/// }
/// ```
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = join_classes("text-input", props.class.as_deref());

    rsx! {
        div { class: "input-container",
            input {
                class: "{input_class}",
                r#type: props.mode.input_type(),
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                autofocus: true,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_mode_input_types() {
        assert_eq!(TextMode::Text.input_type(), "text");
        assert_eq!(TextMode::Number.input_type(), "number");
        assert_eq!(TextMode::default(), TextMode::Text);
    }
}
