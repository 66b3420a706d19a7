//! Configuration and the message types shared by the dispatcher and gateway

pub mod config;
pub mod models;

pub use config::{AppConfig, ExecutionMode, load_value};
pub use models::{ChannelId, InboundMessage, OutboundMessage, UserId};
