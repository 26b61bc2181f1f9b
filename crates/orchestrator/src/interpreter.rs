use async_trait::async_trait;

use client::Client;
use orchestrator_core::ports::{InterpreterPort, SubmissionError};
use protocol::Interpretation;

use crate::logger;

/// The real transport behind the core's interpreter port.
pub struct HttpInterpreter {
    client: Client,
}

impl HttpInterpreter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InterpreterPort for HttpInterpreter {
    async fn interpret(&self, dream: &str) -> Result<Interpretation, SubmissionError> {
        logger::log_event("HTTP", &format!("POST {} ({} chars)", self.client.endpoint(), dream.len()));
        self.client.interpret(dream).await.map_err(|e| {
            logger::log_error("interpret", &e.to_string());
            e.into()
        })
    }
}
