//! Discord gateway adapter built on serenity.
//!
//! Serenity spawns a task per event; the handler takes a dispatch lock so
//! messages from one connection are processed one at a time, and a running
//! benchmark holds back the events queued behind it.

use async_trait::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::ChannelId as SerenityChannelId;
use serenity::prelude::{Client, Context, EventHandler, GatewayIntents};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::core::config::AppConfig;
use crate::core::models::{ChannelId, InboundMessage, OutboundMessage, UserId};
use crate::dispatch::{DispatchOutcome, GatewayContext, MessageDispatcher};
use crate::errors::BotError;

/// `GatewayContext` over a serenity event context.
pub struct DiscordGateway<'a> {
    ctx: &'a Context,
}

impl<'a> DiscordGateway<'a> {
    #[must_use]
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl<'a> GatewayContext for DiscordGateway<'a> {
    fn current_user_id(&self) -> UserId {
        UserId(self.ctx.cache.current_user().id.get())
    }

    async fn send_message(&self, message: OutboundMessage) -> Result<(), BotError> {
        SerenityChannelId::new(message.channel_id.0)
            .say(&self.ctx.http, message.text)
            .await
            .map(|_| ())
            .map_err(|e| BotError::Send(e.to_string()))
    }
}

fn to_inbound(msg: &Message) -> InboundMessage {
    InboundMessage {
        author_id: UserId(msg.author.id.get()),
        channel_id: ChannelId(msg.channel_id.get()),
        content: msg.content.clone(),
    }
}

pub struct Handler {
    dispatcher: MessageDispatcher,
    dispatch_lock: Mutex<()>,
}

impl Handler {
    #[must_use]
    pub fn new(dispatcher: MessageDispatcher) -> Self {
        Self {
            dispatcher,
            dispatch_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        let _guard = self.dispatch_lock.lock().await;
        let gateway = DiscordGateway::new(&ctx);
        let inbound = to_inbound(&msg);

        match self.dispatcher.dispatch(&gateway, &inbound).await {
            DispatchOutcome::Handled(command) => {
                info!("Handled {} in channel {}", command, inbound.channel_id);
            }
            DispatchOutcome::Failed(command) => {
                error!("Could not complete {} in channel {}", command, inbound.channel_id);
            }
            DispatchOutcome::OwnMessage | DispatchOutcome::Unrecognized => {}
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Bot started, connected as {}", ready.user.name);
        debug!(
            "Listening for {:?}",
            self.dispatcher.commands().collect::<Vec<_>>()
        );
    }
}

/// Connects to the gateway and processes events until the client stops.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the gateway connection fails.
pub async fn run(config: &AppConfig) -> Result<(), BotError> {
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(MessageDispatcher::new(config.execution));
    let mut client = Client::builder(&config.token, intents)
        .event_handler(handler)
        .await?;

    info!("Starting gateway connection");
    client.start().await?;
    Ok(())
}
