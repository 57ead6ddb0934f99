use telegram::Update;
use tracing::debug;

use super::{handle_inline_query, handle_new_message};
use crate::kernel::ServerDeps;

/// Route one gateway update to its handler.
pub async fn handle_update(update: Update, deps: &ServerDeps) {
    match update {
        Update::BotInlineQuery(query) => handle_inline_query(&query, deps).await,
        Update::NewMessage { message } | Update::NewChannelMessage { message } => {
            handle_new_message(&message, deps).await
        }
        Update::Unsupported => debug!("Ignoring unsupported update"),
    }
}
