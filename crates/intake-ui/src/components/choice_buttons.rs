//! Choice Buttons Component
//!
//! One button per choice; the selected one carries the `selected` class.
//! Clicking always reports the clicked label, so re-clicking the current
//! choice keeps it set.

use dioxus::prelude::*;

/// Properties for the ChoiceButtons component
#[derive(Clone, PartialEq, Props)]
pub struct ChoiceButtonsProps {
    /// Choice labels, in display order
    pub choices: Vec<String>,
    /// Currently stored answer (may be empty)
    pub selected: String,
    /// Handler called with the clicked label
    pub on_select: EventHandler<String>,
}

/// Displays the choice set as a radio-style button group.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ChoiceButtons {
///         choices: question.choices.iter().map(|c| c.to_string()).collect(),
///         selected: answer,
///         on_select: move |label| wizard.write().set_answer(question.field, label),
///     }
/// }
/// ```
#[component]
pub fn ChoiceButtons(props: ChoiceButtonsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div { class: "buttons-container",
            div {
                class: "buttons-group",
                role: "radiogroup",
                for choice in props.choices.iter() {
                    {
                        let label = choice.clone();
                        let is_selected = selected == *choice;
                        let on_select = props.on_select;
                        rsx! {
                            button {
                                key: "{choice}",
                                class: option_class(is_selected),
                                r#type: "button",
                                role: "radio",
                                "aria-checked": if is_selected { "true" } else { "false" },
                                onclick: move |_| on_select.call(label.clone()),
                                "{choice}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// CSS class for a choice button
pub fn option_class(selected: bool) -> &'static str {
    if selected {
        "option-button selected"
    } else {
        "option-button"
    }
}
