use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use orchestrator_core::ports::OutboundPort;
use protocol::Message;

/// Core-to-UI delivery over the draw loop's channel.
#[derive(Clone)]
pub struct UiOutbound(pub mpsc::Sender<Message>);

#[async_trait]
impl OutboundPort for UiOutbound {
    async fn send(&self, msg: Message) -> Result<()> {
        self.0
            .send(msg)
            .await
            .map_err(|e| anyhow::anyhow!("ui channel closed: {}", e))
    }
}
