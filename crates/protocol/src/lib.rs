use serde::{Deserialize, Serialize};

pub mod envelope;

pub use envelope::{decode_envelope, EnvelopeError, Interpretation, DECODE_ERROR};

/// Protocol version (bumped when breaking changes are introduced)
pub const VERSION: u8 = 1;

/// Top-level message envelope between the UI and the submission core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    SubmitDream(SubmitDream),
    SubmissionStarted(SubmissionStarted),
    InterpretationReady(InterpretationReady),
    SubmissionFailed(SubmissionFailed),
    Status(Status),
}

/// Free-text dream submitted by a user/input device (TUI, one-shot CLI).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitDream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<u8>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>, // "tui" | "cli" | "unknown"
}

/// A submission was accepted and its request is in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionStarted {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<u8>,
    pub token: u64,
}

/// The latest submission settled successfully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretationReady {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<u8>,
    pub token: u64,
    pub archetype: String,
    pub content: serde_json::Value,
}

/// The latest submission settled with a failure. Terminal for that submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionFailed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<u8>,
    pub token: u64,
    pub kind: FailureKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Validation,
    Transport,
    ServerDecode,
}

/// Informational status line for UIs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<u8>,
    pub level: String, // info|warn|error
    pub text: String,
}

impl Message {
    pub fn submit_dream<S: Into<String>>(text: S, source: Option<String>) -> Self {
        Message::SubmitDream(SubmitDream {
            v: Some(VERSION),
            text: text.into(),
            source,
        })
    }

    pub fn started(token: u64) -> Self {
        Message::SubmissionStarted(SubmissionStarted { v: Some(VERSION), token })
    }

    pub fn ready(token: u64, archetype: String, content: serde_json::Value) -> Self {
        Message::InterpretationReady(InterpretationReady {
            v: Some(VERSION),
            token,
            archetype,
            content,
        })
    }

    pub fn failed<S: Into<String>>(token: u64, kind: FailureKind, text: S) -> Self {
        Message::SubmissionFailed(SubmissionFailed {
            v: Some(VERSION),
            token,
            kind,
            text: text.into(),
        })
    }

    pub fn status<S: Into<String>>(level: &str, text: S) -> Self {
        Message::Status(Status {
            v: Some(VERSION),
            level: level.to_string(),
            text: text.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_round_trips_with_tag() {
        let msg = Message::failed(3, FailureKind::ServerDecode, "bad envelope");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"submission_failed\""));
        assert!(json.contains("\"kind\":\"server_decode\""));
        let back: Message = serde_json::from_str(&json).unwrap();
        match back {
            Message::SubmissionFailed(f) => {
                assert_eq!(f.token, 3);
                assert_eq!(f.kind, FailureKind::ServerDecode);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
