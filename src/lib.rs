//! benchbot - A Discord chatbot that runs a CPU benchmark on demand.
//!
//! The bot answers a single command, `?benchmark`, with an acknowledgement
//! followed by a report of a fixed numeric workload and how long it took.
//!
//! # Architecture
//!
//! - `core` loads the bot token from a local `key=value` file
//! - `benchmark` runs and formats the workload
//! - `dispatch` filters inbound messages and routes commands
//! - `discord` (feature `discord`) connects the dispatcher to serenity
//!
//! # Example
//!
//! ```no_run
//! use benchbot::core::config::{AppConfig, ExecutionMode};
//! use benchbot::dispatch::MessageDispatcher;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     benchbot::setup_logging();
//!
//!     let config = AppConfig::load(".env", "DISCORD_RUST_TOKEN", ExecutionMode::Inline)?;
//!     let dispatcher = MessageDispatcher::new(config.execution);
//!     assert!(dispatcher.commands().any(|c| c == "?benchmark"));
//!     Ok(())
//! }
//! ```
pub mod benchmark;
pub mod core;
pub mod dispatch;
pub mod errors;

#[cfg(feature = "discord")]
pub mod discord;

/// Configure structured logging with JSON output.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// benchbot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
