//! Segmented progress bar, one segment per question.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ProgressIndicatorProps {
    /// One flag per question; `true` segments are lit
    pub segments: Vec<bool>,
}

#[component]
pub fn ProgressIndicator(props: ProgressIndicatorProps) -> Element {
    let total = props.segments.len();
    let reached = props.segments.iter().filter(|lit| **lit).count();

    rsx! {
        div {
            class: "progress-indicator",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "{total}",
            "aria-valuenow": "{reached}",
            for (index, lit) in props.segments.iter().enumerate() {
                div { key: "{index}", class: segment_class(*lit) }
            }
        }
    }
}

pub fn segment_class(lit: bool) -> &'static str {
    if lit {
        "progress-bar active"
    } else {
        "progress-bar"
    }
}
