//! Question Input - picks the capture widget for a question kind.
//!
//! | Kind | Widget |
//! |------|--------|
//! | FreeText | text input |
//! | NumericText | number input (value kept as text) |
//! | Phone | country picker + number |
//! | ChoiceButtons | one button per choice |

use dioxus::prelude::*;
use intake_core::{Country, QuestionKind, QuestionSpec};
use intake_ui::{ChoiceButtons, PhoneInput, TextInput, TextMode};

/// Props for QuestionInput component
#[derive(Props, Clone, PartialEq)]
pub struct QuestionInputProps {
    pub question: &'static QuestionSpec,
    /// Current stored answer
    pub value: String,
    /// Phone country to preselect
    pub default_country: &'static Country,
    /// Called with the new stored answer
    pub on_change: EventHandler<String>,
    /// Called when the phone country changes
    pub on_country: EventHandler<&'static Country>,
}

#[component]
pub fn QuestionInput(props: QuestionInputProps) -> Element {
    let on_change = props.on_change;

    match props.question.kind {
        QuestionKind::FreeText | QuestionKind::NumericText => rsx! {
            TextInput {
                value: props.value,
                mode: text_mode(props.question.kind),
                oninput: on_change,
            }
        },
        QuestionKind::Phone => rsx! {
            PhoneInput {
                value: props.value,
                default_country: props.default_country,
                oninput: on_change,
                oncountry: props.on_country,
            }
        },
        QuestionKind::ChoiceButtons => rsx! {
            ChoiceButtons {
                choices: props.question.choices.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                selected: props.value,
                on_select: on_change,
            }
        },
    }
}

/// Input flavour for the text-like kinds.
fn text_mode(kind: QuestionKind) -> TextMode {
    match kind {
        QuestionKind::NumericText => TextMode::Number,
        _ => TextMode::Text,
    }
}
