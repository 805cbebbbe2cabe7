//! Page components for the intake questionnaire.

mod questionnaire;

pub use questionnaire::Questionnaire;
