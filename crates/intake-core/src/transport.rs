//! Network seam for the form post.

use async_trait::async_trait;

use crate::answers::FormPayload;
use crate::error::SubmitError;

/// Raw HTTP reply, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one form-encoded POST.
///
/// Implementations report connection-level failures as
/// [`SubmitError::Transport`]; status codes are left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(&self, url: &str, payload: &FormPayload)
        -> Result<TransportReply, SubmitError>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(
        &self,
        url: &str,
        payload: &FormPayload,
    ) -> Result<TransportReply, SubmitError> {
        tracing::info!(%url, fields = payload.pairs().len(), "Posting intake form");

        let resp = self
            .client
            .post(url)
            .form(payload.pairs())
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "Intake endpoint replied");
        Ok(TransportReply { status, body })
    }
}
