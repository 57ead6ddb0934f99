//! Error types for the gateway client.

use thiserror::Error;

/// Result type for gateway client operations.
pub type Result<T> = std::result::Result<T, TelegramError>;

/// RPC error descriptions that mean "no such peer".
const UNKNOWN_PEER_ERRORS: &[&str] = &[
    "USERNAME_NOT_OCCUPIED",
    "USERNAME_INVALID",
    "PEER_ID_INVALID",
];

/// Gateway client errors.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Configuration error (missing gateway URL or session name)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// RPC error returned by Telegram through the gateway
    #[error("RPC error {code}: {description}")]
    Api { code: i32, description: String },

    /// Parse error (invalid JSON, unexpected response shape)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl TelegramError {
    /// Whether the gateway could not resolve the requested peer.
    pub fn is_unknown_peer(&self) -> bool {
        match self {
            TelegramError::Api { description, .. } => UNKNOWN_PEER_ERRORS
                .iter()
                .any(|known| description.contains(known)),
            _ => false,
        }
    }
}
