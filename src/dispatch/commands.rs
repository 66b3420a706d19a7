use async_trait::async_trait;
use tracing::{error, info};

use super::GatewayContext;
use crate::benchmark::{self, BenchmarkResult};
use crate::core::config::ExecutionMode;
use crate::core::models::{InboundMessage, OutboundMessage};
use crate::errors::BotError;

pub const BENCHMARK_COMMAND: &str = "?benchmark";

/// Acknowledgement sent before the benchmark starts.
pub const ACK_MESSAGE: &str = "Exécution du benchmark...";

/// A response bound to one literal command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if a reply cannot be delivered.
    async fn handle(
        &self,
        gateway: &dyn GatewayContext,
        message: &InboundMessage,
    ) -> Result<(), BotError>;
}

/// Acknowledges, runs the benchmark, then posts the report to the same channel.
pub struct BenchmarkCommand {
    execution: ExecutionMode,
}

impl BenchmarkCommand {
    #[must_use]
    pub fn new(execution: ExecutionMode) -> Self {
        Self { execution }
    }

    async fn execute(&self) -> Result<BenchmarkResult, BotError> {
        match self.execution {
            // Blocks the handling task; events on this connection wait behind it.
            ExecutionMode::Inline => Ok(benchmark::measure()),
            ExecutionMode::Offload => Ok(tokio::task::spawn_blocking(benchmark::measure).await?),
        }
    }
}

#[async_trait]
impl CommandHandler for BenchmarkCommand {
    async fn handle(
        &self,
        gateway: &dyn GatewayContext,
        message: &InboundMessage,
    ) -> Result<(), BotError> {
        let channel_id = message.channel_id;

        if let Err(e) = gateway
            .send_message(OutboundMessage::new(channel_id, ACK_MESSAGE))
            .await
        {
            error!("Failed to send acknowledgement to {}: {}", channel_id, e);
            return Err(e);
        }

        let result = self.execute().await?;
        info!(
            channel_id = %channel_id,
            total = result.total,
            elapsed_ms = result.elapsed_ms(),
            "Benchmark requested by {}",
            message.author_id
        );

        gateway
            .send_message(OutboundMessage::new(channel_id, result.report()))
            .await
            .inspect_err(|e| error!("Failed to send benchmark report to {}: {}", channel_id, e))
    }
}
