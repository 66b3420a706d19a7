//! Inbound message routing.
//!
//! The dispatcher drops the bot's own messages, matches the trimmed text
//! against a table of literal commands, and runs the matching handler.
//! Anything else is ignored without a reply.

pub mod commands;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, trace};

use crate::core::config::ExecutionMode;
use crate::core::models::{InboundMessage, OutboundMessage, UserId};
use crate::errors::BotError;

pub use commands::{ACK_MESSAGE, BENCHMARK_COMMAND, BenchmarkCommand, CommandHandler};

/// What the dispatcher needs from a live gateway connection.
#[async_trait]
pub trait GatewayContext: Send + Sync {
    /// Identity the connection is logged in as.
    fn current_user_id(&self) -> UserId;

    /// # Errors
    ///
    /// Returns an error if the gateway rejects or fails to deliver the message.
    async fn send_message(&self, message: OutboundMessage) -> Result<(), BotError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    OwnMessage,
    Unrecognized,
    Handled(&'static str),
    Failed(&'static str),
}

pub struct MessageDispatcher {
    commands: HashMap<&'static str, Arc<dyn CommandHandler>>,
}

impl MessageDispatcher {
    #[must_use]
    pub fn new(execution: ExecutionMode) -> Self {
        let mut commands: HashMap<&'static str, Arc<dyn CommandHandler>> = HashMap::new();
        commands.insert(BENCHMARK_COMMAND, Arc::new(BenchmarkCommand::new(execution)));
        Self { commands }
    }

    /// Literal commands this dispatcher answers to.
    pub fn commands(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// Handles one inbound message. Handler failures are logged, never returned.
    pub async fn dispatch(
        &self,
        gateway: &dyn GatewayContext,
        message: &InboundMessage,
    ) -> DispatchOutcome {
        if message.author_id == gateway.current_user_id() {
            return DispatchOutcome::OwnMessage;
        }

        let Some((&command, handler)) = self.commands.get_key_value(message.content.trim())
        else {
            trace!("Ignoring message in channel {}", message.channel_id);
            return DispatchOutcome::Unrecognized;
        };

        match handler.handle(gateway, message).await {
            Ok(()) => DispatchOutcome::Handled(command),
            Err(e) => {
                error!("Command {} failed in channel {}: {}", command, message.channel_id, e);
                DispatchOutcome::Failed(command)
            }
        }
    }
}
