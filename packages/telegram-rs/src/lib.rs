//! Minimal Telegram TL-JSON gateway client
//!
//! Talks to an HTTP gateway that holds one authorized MTProto session (either a
//! user account or a bot account) and exposes its methods as JSON endpoints.
//! No domain-specific logic lives here.
//!
//! # Example
//!
//! ```rust,ignore
//! use telegram::{SendMessage, TelegramClient};
//!
//! let bot = TelegramClient::from_env("BOT")?;
//! let me = bot.get_self().await?;
//!
//! bot.send_message(SendMessage::new("@someone", "hello").markdown()).await?;
//!
//! // Any other method, with caller-defined payload types
//! let results: serde_json::Value = bot
//!     .invoke("messages.getInlineBotResults", &serde_json::json!({ "bot": "@gif" }))
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{Result, TelegramError};
pub use types::*;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::types::ApiResponse;

/// Client for a single gateway session.
#[derive(Clone)]
pub struct TelegramClient {
    http_client: Client,
    base_url: String,
    session: String,
}

impl TelegramClient {
    /// Create a client for `session` on the gateway at `base_url`.
    pub fn new(base_url: impl Into<String>, session: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: session.into(),
        }
    }

    /// Create from `{PREFIX}_GATEWAY_URL` and `{PREFIX}_SESSION`.
    pub fn from_env(prefix: &str) -> Result<Self> {
        let url_var = format!("{}_GATEWAY_URL", prefix);
        let session_var = format!("{}_SESSION", prefix);

        let base_url = std::env::var(&url_var)
            .map_err(|_| TelegramError::Config(format!("{} not set", url_var)))?;
        let session = std::env::var(&session_var)
            .map_err(|_| TelegramError::Config(format!("{} not set", session_var)))?;

        Ok(Self::new(base_url, session))
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// Get the gateway base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the session name.
    pub fn session(&self) -> &str {
        &self.session
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.session, method)
    }

    /// Invoke a TL method with JSON parameters.
    pub async fn invoke<P, R>(&self, method: &str, params: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(self.method_url(method))
            .json(params)
            .send()
            .await
            .map_err(|e| {
                warn!(method, error = %e, "Gateway request failed");
                TelegramError::Network(e.to_string())
            })?;

        let status = response.status();
        let envelope: ApiResponse<R> = response.json().await.map_err(|e| {
            warn!(method, status = %status, error = %e, "Unreadable gateway response");
            TelegramError::Parse(format!("{} (HTTP {})", e, status))
        })?;

        debug!(
            method,
            session = %self.session,
            duration_ms = start.elapsed().as_millis(),
            "Gateway call"
        );

        unwrap_envelope(envelope)
    }

    /// The account this session is logged in as.
    pub async fn get_self(&self) -> Result<User> {
        self.invoke("getSelf", &json!({})).await
    }

    /// Resolve a username or peer id.
    pub async fn get_info(&self, peer: &str) -> Result<PeerInfo> {
        self.invoke("getInfo", &json!({ "id": peer })).await
    }

    /// Send a message.
    pub async fn send_message(&self, message: SendMessage) -> Result<serde_json::Value> {
        self.invoke("messages.sendMessage", &message).await
    }

    /// Answer an inline query. The answer is an already-built
    /// `messages.setInlineBotResults` parameter object.
    pub async fn set_inline_bot_results<A>(&self, answer: &A) -> Result<bool>
    where
        A: Serialize + ?Sized,
    {
        self.invoke("messages.setInlineBotResults", answer).await
    }
}

fn unwrap_envelope<R>(envelope: ApiResponse<R>) -> Result<R> {
    if envelope.ok {
        return envelope
            .result
            .ok_or_else(|| TelegramError::Parse("Gateway returned ok without a result".into()));
    }

    Err(TelegramError::Api {
        code: envelope.error_code.unwrap_or(500),
        description: envelope
            .description
            .unwrap_or_else(|| "Unknown gateway error".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = TelegramClient::new("http://localhost:9000/", "pipesuser");

        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.session(), "pipesuser");
        assert_eq!(
            client.method_url("getSelf"),
            "http://localhost:9000/pipesuser/getSelf"
        );
    }

    #[test]
    fn test_unwrap_ok_envelope() {
        let envelope: ApiResponse<User> = serde_json::from_value(json!({
            "ok": true,
            "result": { "id": 77, "bot": true, "username": "pipesbot" }
        }))
        .unwrap();

        let user = unwrap_envelope(envelope).unwrap();
        assert_eq!(user.id, 77);
        assert!(user.bot);
    }

    #[test]
    fn test_unwrap_error_envelope() {
        let envelope: ApiResponse<User> = serde_json::from_value(json!({
            "ok": false,
            "error_code": 400,
            "description": "USERNAME_NOT_OCCUPIED"
        }))
        .unwrap();

        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(err.is_unknown_peer());
    }

    #[test]
    fn test_unwrap_ok_without_result() {
        let envelope: ApiResponse<bool> = serde_json::from_value(json!({ "ok": true })).unwrap();
        assert!(matches!(
            unwrap_envelope(envelope),
            Err(TelegramError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_gateway_is_network_error() {
        let client = TelegramClient::new("http://127.0.0.1:9", "pipesuser");
        let err = client.get_self().await.unwrap_err();
        assert!(matches!(err, TelegramError::Network(_)));
    }
}
