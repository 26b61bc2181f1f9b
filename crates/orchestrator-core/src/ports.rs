use anyhow::Result;
use async_trait::async_trait;

use client::ClientError;
use protocol::{FailureKind, Interpretation};

/// A settled failure, already classified onto the protocol taxonomy.
#[derive(Debug, Clone)]
pub struct SubmissionError {
    pub kind: FailureKind,
    pub message: String,
}

impl From<ClientError> for SubmissionError {
    fn from(e: ClientError) -> Self {
        SubmissionError {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

/// The one suspension point of a submission: post the dream, get back the
/// decoded interpretation or a classified failure.
#[async_trait]
pub trait InterpreterPort: Send + Sync {
    async fn interpret(&self, dream: &str) -> Result<Interpretation, SubmissionError>;
}

#[async_trait]
pub trait OutboundPort: Send + Sync {
    async fn send(&self, msg: protocol::Message) -> Result<()>;
}
