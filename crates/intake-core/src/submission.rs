//! Submission handler.
//!
//! ## States
//!
//! | From | Trigger | To |
//! |------|---------|----|
//! | Idle | submit on a satisfied last step | Submitting |
//! | Submitting | reply with `status == "success"` | Idle, wizard reset, redirect fired |
//! | Submitting | transport, decode or application failure | Idle, error kept, answers kept |
//!
//! There is no retry: a failed attempt waits for the user to press submit
//! again. The in-flight flag on [`WizardState`] is what keeps a second
//! request from starting.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::answers::FormPayload;
use crate::config::IntakeConfig;
use crate::error::SubmitError;
use crate::transport::Transport;
use crate::wizard::WizardState;

/// Status value the endpoint uses to accept a submission.
pub const SUCCESS_STATUS: &str = "success";

/// Leaves the form for the follow-up page.
pub trait Redirector {
    /// Replace the current page with `url`.
    fn redirect(&self, url: &str);
}

/// What a call to [`Submitter::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Not allowed right now (unanswered, not on last step, or in flight)
    Skipped,
    Accepted,
    Failed(SubmitError),
}

/// The endpoint's JSON verdict.
///
/// Any JSON object is a verdict; only a string `status` equal to
/// [`SUCCESS_STATUS`] accepts. Fields of other types are tolerated.
#[derive(Debug, Deserialize)]
struct EndpointReply {
    #[serde(default, deserialize_with = "lenient_text")]
    status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    message: Option<String>,
}

impl EndpointReply {
    fn parse(body: &str) -> Result<Self, SubmitError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| SubmitError::Decode(e.to_string()))?;
        if !value.is_object() {
            return Err(SubmitError::Decode("reply is not a JSON object".to_string()));
        }
        serde_json::from_value(value).map_err(|e| SubmitError::Decode(e.to_string()))
    }

    fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(text_of))
}

/// Display text for a reply field. Empty-ish values (`null`, `false`, `0`,
/// `""`) count as absent.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Sends answers to the configured endpoint and applies the result.
pub struct Submitter<T, R> {
    config: IntakeConfig,
    transport: T,
    redirector: R,
}

impl<T: Transport, R: Redirector> Submitter<T, R> {
    pub fn new(config: IntakeConfig, transport: T, redirector: R) -> Self {
        Self {
            config,
            transport,
            redirector,
        }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn redirector(&self) -> &R {
        &self.redirector
    }

    /// Run a whole submission against `state`.
    pub async fn submit(&self, state: &mut WizardState) -> SubmissionOutcome {
        let Some(payload) = state.begin_submission() else {
            tracing::debug!("Submit ignored: not allowed in current state");
            return SubmissionOutcome::Skipped;
        };
        let result = self.send(&payload).await;
        self.settle(state, result)
    }

    /// Post the payload and interpret the reply.
    pub async fn send(&self, payload: &FormPayload) -> Result<(), SubmitError> {
        let reply = self
            .transport
            .post_form(&self.config.endpoint, payload)
            .await?;

        if !reply.is_success() {
            return Err(SubmitError::Transport(format!(
                "endpoint returned HTTP {}",
                reply.status
            )));
        }

        let decoded = EndpointReply::parse(&reply.body)?;

        if decoded.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Application {
                status: decoded.status,
                message: decoded.message,
            })
        }
    }

    /// Apply a send result to the wizard, redirecting on success.
    pub fn settle(
        &self,
        state: &mut WizardState,
        result: Result<(), SubmitError>,
    ) -> SubmissionOutcome {
        state.finish_submission(&result);
        match result {
            Ok(()) => {
                tracing::info!(url = %self.config.redirect_url, "Submission accepted, redirecting");
                self.redirector.redirect(&self.config.redirect_url);
                SubmissionOutcome::Accepted
            }
            Err(err) => {
                tracing::error!(error = %err, transport = err.is_transport(), "Submission error");
                SubmissionOutcome::Failed(err)
            }
        }
    }
}
