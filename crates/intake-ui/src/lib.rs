//! Intake Questionnaire UI Components
//!
//! Dioxus building blocks for the one-question-per-screen intake form:
//! buttons, text and phone inputs, choice buttons, and the segmented
//! progress bar. Components are stateless where they can be; the wizard
//! state itself lives in the application and flows in through props.
//!
//! Styling is class-based. The application supplies the stylesheet; the
//! class names each component emits are listed in its docs.

pub mod components;

pub use components::*;
