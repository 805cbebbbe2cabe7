//! Error types for the intake questionnaire

use thiserror::Error;

use crate::catalog::Field;

/// Text shown when the request never produced a usable reply.
pub const GENERIC_FAILURE: &str = "Failed to submit form";

/// Text shown when the endpoint rejects without saying why.
pub const REJECTED_FAILURE: &str = "Submission failed";

/// Why a submission did not go through.
///
/// `Transport` and `Decode` are transport-level failures; `Application`
/// means the endpoint answered and explicitly declined.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Network failure or a non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// The reply body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// The endpoint replied with JSON that was not a success verdict
    #[error("Submission rejected with status {status:?}")]
    Application {
        /// `None` when the reply had no string `status`
        status: Option<String>,
        message: Option<String>,
    },
}

impl SubmitError {
    /// Human-readable text for the inline error under the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Transport(_) | SubmitError::Decode(_) => GENERIC_FAILURE.to_string(),
            SubmitError::Application { message, .. } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(REJECTED_FAILURE)
                .to_string(),
        }
    }

    /// Whether this failed before the endpoint gave a verdict.
    pub fn is_transport(&self) -> bool {
        matches!(self, SubmitError::Transport(_) | SubmitError::Decode(_))
    }
}

/// Input parsing errors for the front ends.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// No field has this key
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Country code not in the dialling table
    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    /// Value is not one of the question's choices
    #[error("'{value}' is not a choice for {field}")]
    InvalidChoice { field: Field, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_use_generic_text() {
        let err = SubmitError::Transport("HTTP 502".to_string());
        assert_eq!(err.user_message(), "Failed to submit form");
        assert!(err.is_transport());

        let err = SubmitError::Decode("expected value at line 1".to_string());
        assert_eq!(err.user_message(), "Failed to submit form");
    }

    #[test]
    fn application_failure_prefers_server_message() {
        let err = SubmitError::Application {
            status: Some("error".to_string()),
            message: Some("Duplicate phone".to_string()),
        };
        assert_eq!(err.user_message(), "Duplicate phone");
        assert!(!err.is_transport());
    }

    #[test]
    fn application_failure_without_message_falls_back() {
        for message in [None, Some(String::new())] {
            let err = SubmitError::Application {
                status: Some("error".to_string()),
                message,
            };
            assert_eq!(err.user_message(), "Submission failed");
        }
    }

    #[test]
    fn test_error_display() {
        let err = IntakeError::InvalidChoice {
            field: Field::Gender,
            value: "x".to_string(),
        };
        assert_eq!(format!("{}", err), "'x' is not a choice for gender");
    }
}
