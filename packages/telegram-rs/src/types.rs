//! TL-JSON request, response and update types.
//!
//! Only the fields this client reads are typed. Constructors are tagged by the
//! `_` field, the same way the gateway serializes them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Envelope
// =============================================================================

/// Raw gateway envelope (for internal parsing).
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<R> {
    pub ok: bool,
    pub result: Option<R>,
    pub error_code: Option<i32>,
    pub description: Option<String>,
}

// =============================================================================
// Peers
// =============================================================================

/// The account a session is logged in as.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    #[serde(default)]
    pub bot: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

/// A resolved peer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerInfo {
    /// Bot API style identifier of the peer
    pub bot_api_id: i64,

    /// Peer type reported by the gateway ("bot", "user", "channel", ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

// =============================================================================
// Messages
// =============================================================================

/// `messages.sendMessage` parameters.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    /// Target peer, either a username string or a TL peer object
    pub peer: Value,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_msg_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
}

impl SendMessage {
    /// Create a plain-text message for a peer.
    pub fn new(peer: impl Into<Value>, message: impl Into<String>) -> Self {
        Self {
            peer: peer.into(),
            message: message.into(),
            reply_to_msg_id: None,
            parse_mode: None,
        }
    }

    /// Reply to an existing message.
    pub fn reply_to(mut self, msg_id: i32) -> Self {
        self.reply_to_msg_id = Some(msg_id);
        self
    }

    /// Render the text as markdown.
    pub fn markdown(mut self) -> Self {
        self.parse_mode = Some("markdown".to_string());
        self
    }
}

/// A message carried by `updateNewMessage` / `updateNewChannelMessage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,

    /// Sent by this session
    #[serde(default)]
    pub out: bool,

    #[serde(default)]
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_id: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_id: Option<Value>,
}

// =============================================================================
// Updates
// =============================================================================

/// Inline query addressed to the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotInlineQuery {
    pub query_id: i64,
    pub user_id: i64,
    pub query: String,
    #[serde(default)]
    pub offset: String,
}

/// Updates delivered by the gateway webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_")]
pub enum Update {
    #[serde(rename = "updateBotInlineQuery")]
    BotInlineQuery(BotInlineQuery),

    #[serde(rename = "updateNewMessage")]
    NewMessage { message: Message },

    #[serde(rename = "updateNewChannelMessage")]
    NewChannelMessage { message: Message },

    /// Anything this bot does not react to
    #[serde(other)]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_inline_query_update() {
        let update: Update = serde_json::from_value(json!({
            "_": "updateBotInlineQuery",
            "query_id": 42,
            "user_id": 1001,
            "query": "hello | @bold $",
            "offset": ""
        }))
        .unwrap();

        match update {
            Update::BotInlineQuery(q) => {
                assert_eq!(q.query_id, 42);
                assert_eq!(q.user_id, 1001);
                assert_eq!(q.query, "hello | @bold $");
            }
            other => panic!("unexpected update: {:?}", other),
        }
    }

    #[test]
    fn test_decode_unknown_update() {
        let update: Update = serde_json::from_value(json!({
            "_": "updateUserStatus",
            "user_id": 5
        }))
        .unwrap();
        assert!(matches!(update, Update::Unsupported));
    }

    #[test]
    fn test_message_defaults() {
        let update: Update = serde_json::from_value(json!({
            "_": "updateNewMessage",
            "message": { "id": 7, "peer_id": { "_": "peerUser", "user_id": 9 } }
        }))
        .unwrap();

        let Update::NewMessage { message } = update else {
            panic!("expected a new message");
        };
        assert!(!message.out);
        assert_eq!(message.message, "");
    }

    #[test]
    fn test_send_message_builder() {
        let body = serde_json::to_value(
            SendMessage::new("@someone", "hi").reply_to(3).markdown(),
        )
        .unwrap();

        assert_eq!(body["peer"], "@someone");
        assert_eq!(body["reply_to_msg_id"], 3);
        assert_eq!(body["parse_mode"], "markdown");

        let plain = serde_json::to_value(SendMessage::new("@someone", "hi")).unwrap();
        assert!(plain.get("parse_mode").is_none());
    }
}
