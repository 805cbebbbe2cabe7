//! Questionnaire page - the whole intake flow on one screen.
//!
//! Progress bar, header copy, and a card holding the active question,
//! any submission error, and the Back / Next / Submit controls.

use dioxus::prelude::*;
use intake_core::catalog::{HEADLINE, SUBHEADING};
use intake_core::WizardEvent;
use intake_ui::ProgressIndicator;

use crate::components::{NavControls, NavState, QuestionInput};
use crate::context::{use_phone_country, use_submitter, use_wizard};

/// Questionnaire page component.
///
/// The wizard signal is the only state; every handler here dispatches to
/// it, and the submit handler runs the single network call in a task.
#[component]
pub fn Questionnaire() -> Element {
    let mut wizard = use_wizard();
    let mut phone_country = use_phone_country();
    let submitter = use_submitter();

    let state = wizard.read();
    let question = state.current_question();
    let answer = state.current_answer().to_string();
    let segments = state.progress_segments();
    let position = state.position_label();
    let error = state.submission().error.clone();
    let nav = NavState::from_wizard(&state);
    drop(state);

    let on_answer = move |value: String| {
        wizard.write().apply(WizardEvent::Answer {
            field: question.field,
            value,
        });
    };

    let on_submit = move |_: ()| {
        let Some(payload) = wizard.write().begin_submission() else {
            return;
        };
        let submitter = submitter.clone();
        spawn(async move {
            let result = submitter.send(&payload).await;
            let mut state = wizard.write();
            submitter.settle(&mut state, result);
        });
    };

    rsx! {
        div { class: "app",
            ProgressIndicator { segments }

            header { class: "header",
                h1 { "{HEADLINE}" }
                p { class: "subheading", "{SUBHEADING}" }
            }

            div { class: "card-container",
                div { class: "card",
                    div { class: "card-content",
                        span { class: "question-position", "{position}" }
                        h2 { "{question.prompt}" }

                        QuestionInput {
                            key: "{question.id}",
                            question,
                            value: answer,
                            default_country: phone_country(),
                            on_change: on_answer,
                            on_country: move |c| phone_country.set(c),
                        }

                        if let Some(message) = error {
                            div { class: "error-message", role: "alert", "{message}" }
                        }

                        NavControls {
                            nav,
                            on_previous: move |_| wizard.write().apply(WizardEvent::Previous),
                            on_next: move |_| wizard.write().apply(WizardEvent::Next),
                            on_submit,
                        }
                    }
                }
            }
        }
    }
}
