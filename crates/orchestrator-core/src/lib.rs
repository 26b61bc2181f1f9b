pub mod ports;

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use ports::{InterpreterPort, OutboundPort};

/// Headless submission core: consumes protocol messages, emits protocol
/// messages. Each submission runs Idle -> Pending -> Settled; Settled is
/// terminal, a new submission starts over.
///
/// Overlapping submissions are serialized by a monotonic token: a result
/// arriving for anything but the most recently allocated token is dropped,
/// so at most one result is ever surfaced.
pub struct SubmissionCore<I: InterpreterPort, O: OutboundPort> {
    interpreter: I,
    outbound: O,
    token_counter: AtomicU64,
}

impl<I: InterpreterPort, O: OutboundPort> SubmissionCore<I, O> {
    pub fn new(interpreter: I, outbound: O) -> Self {
        Self {
            interpreter,
            outbound,
            token_counter: AtomicU64::new(0),
        }
    }

    /// Entry point for inbound messages. Everything but SubmitDream is
    /// outbound-only traffic and is ignored here.
    pub async fn handle(&self, msg: protocol::Message) -> Result<()> {
        match msg {
            protocol::Message::SubmitDream(sd) => self.handle_submit(sd).await,
            _ => Ok(()),
        }
    }

    async fn handle_submit(&self, sd: protocol::SubmitDream) -> Result<()> {
        let text = sd.text.trim();
        if text.is_empty() {
            // Refused pre-flight: a log line, no request, no visible change.
            return self
                .outbound
                .send(protocol::Message::status("warn", "empty submission refused"))
                .await;
        }

        let token = self.token_counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.outbound.send(protocol::Message::started(token)).await?;

        let result = self.interpreter.interpret(text).await;

        if self.is_stale(token) {
            return self
                .outbound
                .send(protocol::Message::status(
                    "info",
                    format!("dropping stale result for submission {}", token),
                ))
                .await;
        }

        match result {
            Ok(interp) => {
                self.outbound
                    .send(protocol::Message::ready(token, interp.archetype, interp.content))
                    .await
            }
            Err(e) => {
                self.outbound
                    .send(protocol::Message::failed(token, e.kind, e.message))
                    .await
            }
        }
    }

    fn is_stale(&self, token: u64) -> bool {
        token != self.token_counter.load(Ordering::SeqCst)
    }
}

// Simple in-crate mocks for demo/testing
pub mod mocks {
    use super::*;
    use async_trait::async_trait;
    use ports::SubmissionError;
    use protocol::{FailureKind, Interpretation};
    use tokio::sync::mpsc;

    /// Always answers with the same interpretation.
    pub struct CannedInterpreter {
        pub archetype: String,
        pub content: serde_json::Value,
    }

    #[async_trait]
    impl InterpreterPort for CannedInterpreter {
        async fn interpret(&self, _dream: &str) -> Result<Interpretation, SubmissionError> {
            Ok(Interpretation {
                archetype: self.archetype.clone(),
                content: self.content.clone(),
            })
        }
    }

    /// Always answers with the given failure kind.
    pub struct FailingInterpreter {
        pub kind: FailureKind,
        pub message: String,
    }

    #[async_trait]
    impl InterpreterPort for FailingInterpreter {
        async fn interpret(&self, _dream: &str) -> Result<Interpretation, SubmissionError> {
            Err(SubmissionError {
                kind: self.kind,
                message: self.message.clone(),
            })
        }
    }

    #[derive(Clone)]
    pub struct ChannelOutbound(pub mpsc::Sender<protocol::Message>);

    #[async_trait]
    impl OutboundPort for ChannelOutbound {
        async fn send(&self, msg: protocol::Message) -> Result<()> {
            self.0.send(msg).await.map_err(|e| anyhow::anyhow!(e.to_string()))
        }
    }
}
