//! App-level components wiring the wizard into the intake-ui widgets.

mod nav_controls;
mod question_input;

pub use nav_controls::{NavControls, NavState};
pub use question_input::QuestionInput;
