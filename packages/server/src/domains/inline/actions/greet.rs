//! `/start` handling

use telegram::{Message, SendMessage};
use tracing::{debug, error, warn};

use crate::domains::inline::WELCOME;
use crate::kernel::ServerDeps;

/// Reply to `/start` with usage instructions. Everything else is ignored.
pub async fn handle_new_message(message: &Message, deps: &ServerDeps) {
    if message.out || !message.message.starts_with("/start") {
        return;
    }

    let Some(peer) = message.peer_id.clone() else {
        warn!(message_id = message.id, "Message without a peer, cannot reply");
        return;
    };

    debug!(message_id = message.id, "Sending welcome message");
    let reply = SendMessage::new(peer, WELCOME).reply_to(message.id).markdown();

    if let Err(e) = deps.messenger.send_message(reply).await {
        error!(message_id = message.id, error = %e, "Failed to send welcome message");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{MockMessenger, TestDependencies};
    use serde_json::json;

    fn message(text: &str, out: bool) -> Message {
        Message {
            id: 12,
            out,
            message: text.to_string(),
            peer_id: Some(json!({ "_": "peerUser", "user_id": 4242 })),
            from_id: None,
        }
    }

    #[tokio::test]
    async fn test_start_gets_welcome_reply() {
        let test_deps = TestDependencies::new();

        handle_new_message(&message("/start", false), &test_deps.server_deps()).await;

        let sent = test_deps.messenger.messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].message, WELCOME);
        assert_eq!(sent[0].reply_to_msg_id, Some(12));
        assert_eq!(sent[0].parse_mode.as_deref(), Some("markdown"));
        assert_eq!(sent[0].peer["user_id"], 4242);
    }

    #[tokio::test]
    async fn test_other_and_outgoing_messages_are_ignored() {
        let test_deps = TestDependencies::new();
        let deps = test_deps.server_deps();

        handle_new_message(&message("hello", false), &deps).await;
        handle_new_message(&message("/start", true), &deps).await;

        assert!(test_deps.messenger.messages().is_empty());
    }

    #[tokio::test]
    async fn test_send_failure_is_swallowed() {
        let test_deps = TestDependencies::new().mock_messenger(MockMessenger::new().failing_messages());

        handle_new_message(&message("/start lel", false), &test_deps.server_deps()).await;

        assert_eq!(test_deps.messenger.messages().len(), 1);
    }
}
