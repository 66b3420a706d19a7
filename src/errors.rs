use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Missing configuration value {key} in {path}")]
    ConfigurationMissing { key: String, path: String },

    #[error("Invalid value for {name}: {value}")]
    InvalidSetting { name: String, value: String },

    #[error("Failed to reach the gateway: {0}")]
    Gateway(String),

    #[error("Failed to send message: {0}")]
    Send(String),

    #[error("Benchmark worker failed: {0}")]
    Worker(String),
}

impl From<tokio::task::JoinError> for BotError {
    fn from(error: tokio::task::JoinError) -> Self {
        BotError::Worker(error.to_string())
    }
}

#[cfg(feature = "discord")]
impl From<serenity::Error> for BotError {
    fn from(error: serenity::Error) -> Self {
        BotError::Gateway(error.to_string())
    }
}
