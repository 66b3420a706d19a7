use std::env;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, error};

use crate::errors::BotError;

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_TOKEN_KEY: &str = "DISCORD_RUST_TOKEN";

pub const ENV_FILE_VAR: &str = "BENCHBOT_ENV_FILE";
pub const TOKEN_KEY_VAR: &str = "BENCHBOT_TOKEN_KEY";
pub const EXECUTION_VAR: &str = "BENCHBOT_EXECUTION";

/// Returns the value bound to `key` in a flat `key=value` file.
///
/// Blank lines, `#` comments and lines without `=` are skipped. The first
/// matching line wins and one pair of surrounding double quotes is removed.
/// A missing file or missing key both yield an empty string.
///
/// # Examples
///
/// ```no_run
/// use benchbot::core::config::load_value;
///
/// let token = load_value(".env", "DISCORD_RUST_TOKEN");
/// if token.is_empty() {
///     eprintln!("no token configured");
/// }
/// ```
#[must_use]
pub fn load_value(path: impl AsRef<Path>, key: &str) -> String {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            error!("Cannot open config file at {}: {}", path.display(), e);
            return String::new();
        }
    };

    for (index, raw) in BufReader::new(file).split(b'\n').enumerate() {
        let mut raw = match raw {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to read config file at {}: {}", path.display(), e);
                break;
            }
        };
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let line = match std::str::from_utf8(&raw) {
            Ok(line) => line,
            Err(e) => {
                debug!("Skipping line {} of {}: {}", index + 1, path.display(), e);
                continue;
            }
        };

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((candidate, value)) = line.split_once('=') else {
            continue;
        };

        if candidate == key {
            return strip_quotes(value).to_string();
        }
    }

    String::new()
}

fn strip_quotes(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') {
        // A lone quote is both the opening and the closing one
        value.get(1..value.len() - 1).unwrap_or_default()
    } else {
        value
    }
}

/// Where the benchmark runs relative to the event handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Run on the handling task, blocking it until the report is ready.
    #[default]
    Inline,
    /// Run on tokio's blocking pool and await the result.
    Offload,
}

impl FromStr for ExecutionMode {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "offload" => Ok(Self::Offload),
            other => Err(BotError::InvalidSetting {
                name: EXECUTION_VAR.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub token: String,
    pub env_file: PathBuf,
    pub token_key: String,
    pub execution: ExecutionMode,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("token", &"<redacted>")
            .field("env_file", &self.env_file)
            .field("token_key", &self.token_key)
            .field("execution", &self.execution)
            .finish()
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigurationMissing` when the token is absent or empty.
    pub fn load(
        env_file: impl Into<PathBuf>,
        token_key: impl Into<String>,
        execution: ExecutionMode,
    ) -> Result<Self, BotError> {
        let env_file = env_file.into();
        let token_key = token_key.into();

        let token = load_value(&env_file, &token_key);
        if token.is_empty() {
            return Err(BotError::ConfigurationMissing {
                key: token_key,
                path: env_file.display().to_string(),
            });
        }

        debug!(
            "Loaded {} from {} (execution: {:?})",
            token_key,
            env_file.display(),
            execution
        );

        Ok(Self {
            token,
            env_file,
            token_key,
            execution,
        })
    }

    /// # Errors
    ///
    /// Returns an error if `BENCHBOT_EXECUTION` is invalid or the token is missing.
    pub fn from_env() -> Result<Self, BotError> {
        let env_file = env::var(ENV_FILE_VAR).unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
        let token_key = env::var(TOKEN_KEY_VAR).unwrap_or_else(|_| DEFAULT_TOKEN_KEY.to_string());
        let execution = match env::var(EXECUTION_VAR) {
            Ok(raw) => raw.parse()?,
            Err(_) => ExecutionMode::default(),
        };

        Self::load(env_file, token_key, execution)
    }
}
