//! Styling for the intake questionnaire.

mod styles;

pub use styles::GLOBAL_STYLES;
