//! Application settings consumed by the registry.
//!
//! Only one key matters here: `EMAIL_GATEWAY_BOT`, the outbound email
//! gateway address. The email integration is offered only when it is set.

/// Error type for settings loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {key}: {reason}")]
    EnvRead { key: String, reason: String },
}

/// Crate-wide mutex for tests that mutate process environment variables.
///
/// The process environment is global state shared across all threads.
/// Per-module mutexes do NOT prevent races between modules running in
/// parallel.  Every `unsafe { set_var / remove_var }` call in tests
/// MUST hold this single lock.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Settings surface the registry reads.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Outbound email gateway address; empty means the gateway is not
    /// configured and the email integration is disabled.
    pub email_gateway_bot: String,
}

impl Settings {
    /// Build settings from an explicit gateway address (tests, embedders).
    pub fn new(email_gateway_bot: impl Into<String>) -> Self {
        Self {
            email_gateway_bot: email_gateway_bot.into(),
        }
    }

    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            email_gateway_bot: optional_env("EMAIL_GATEWAY_BOT")?.unwrap_or_default(),
        })
    }
}

/// Read an env var, treating unset and empty as absent.
pub(crate) fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvRead {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}
