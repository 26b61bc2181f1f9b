use std::time::Duration;

use anyhow::Result;
use reqwest::multipart::Form;
use reqwest::Client as Http;
use serde_json::Value;
use thiserror::Error;

use protocol::{decode_envelope, EnvelopeError, FailureKind, Interpretation};

/// Where the interpreter service listens unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/llm";

/// Environment variable overriding the endpoint URL.
pub const ENDPOINT_ENV: &str = "DREAM_API_URL";

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("response body was not JSON: {0}")]
    Body(#[source] reqwest::Error),
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}

impl ClientError {
    /// Collapse onto the protocol failure taxonomy: anything the wire or the
    /// JSON parser did wrong is transport, anything the envelope did wrong
    /// is a server decode failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Transport(_) | ClientError::Body(_) => FailureKind::Transport,
            ClientError::Envelope(_) => FailureKind::ServerDecode,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Client {
    http: Http,
    endpoint: String,
}

impl Client {
    pub fn new<S: Into<String>>(endpoint: S) -> Result<Self> {
        Ok(Self {
            // A dead endpoint must settle as a transport failure instead of
            // leaving the submission pending forever.
            http: Http::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            endpoint: endpoint.into(),
        })
    }

    /// Convenience: endpoint from DREAM_API_URL, falling back to the local
    /// default. (The binary loads `.env` into the process env beforehand.)
    pub fn from_env() -> Result<Self> {
        let endpoint =
            std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one dream: a single multipart POST with exactly one `dream`
    /// field, body decoded through the versioned envelope. No retries.
    pub async fn interpret(&self, dream: &str) -> Result<Interpretation, ClientError> {
        let form = Form::new().text("dream", dream.to_string());
        let resp = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::Transport)?
            .error_for_status()
            .map_err(ClientError::Transport)?;

        let body: Value = resp.json().await.map_err(ClientError::Body)?;
        Ok(decode_envelope(body)?)
    }
}
