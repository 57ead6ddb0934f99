//! Server dependencies for inline handlers (using traits for testability)
//!
//! This module provides the central dependency container used by the inline domain.
//! All external services use trait abstractions to enable testing.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use telegram::{SendMessage, TelegramClient};

use crate::domains::inline::models::InlineAnswer;
use crate::domains::pipes::models::{BotResults, SwitchPm};
use crate::kernel::{BaseBotMessenger, BaseInlineProvider, ResolvedBot};

// =============================================================================
// Gateway Inline Provider (implements BaseInlineProvider over the user session)
// =============================================================================

/// Wrapper around the user-session TelegramClient that implements BaseInlineProvider.
///
/// Inline queries to other bots can only be made by a user account, hence the
/// separate session.
pub struct GatewayInlineProvider(pub Arc<TelegramClient>);

impl GatewayInlineProvider {
    pub fn new(client: Arc<TelegramClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseInlineProvider for GatewayInlineProvider {
    async fn resolve_bot(&self, handle: &str) -> Result<ResolvedBot> {
        let info = self.0.get_info(handle).await.map_err(|e| {
            if e.is_unknown_peer() {
                anyhow::anyhow!("Unknown provider {}", handle)
            } else {
                anyhow::Error::new(e).context(format!("Failed to resolve {}", handle))
            }
        })?;

        Ok(ResolvedBot {
            id: info.bot_api_id,
            handle: handle.to_string(),
        })
    }

    async fn query(&self, bot: &ResolvedBot, user_id: i64, query: &str) -> Result<BotResults> {
        self.0
            .invoke(
                "messages.getInlineBotResults",
                &json!({
                    "bot": bot.handle,
                    "peer": user_id,
                    "query": query,
                    "offset": "0",
                }),
            )
            .await
            .with_context(|| format!("Inline query to {} failed", bot.handle))
    }
}

// =============================================================================
// Gateway Messenger (implements BaseBotMessenger over the bot session)
// =============================================================================

pub struct GatewayMessenger(pub Arc<TelegramClient>);

impl GatewayMessenger {
    pub fn new(client: Arc<TelegramClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseBotMessenger for GatewayMessenger {
    async fn answer_inline_query(&self, answer: &InlineAnswer) -> Result<()> {
        self.0
            .set_inline_bot_results(answer)
            .await
            .map(|_| ())
            .with_context(|| format!("Failed to answer inline query {}", answer.query_id))
    }

    async fn send_message(&self, message: SendMessage) -> Result<()> {
        self.0
            .send_message(message)
            .await
            .map(|_| ())
            .context("Failed to send message")
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub provider: Arc<dyn BaseInlineProvider>,
    pub messenger: Arc<dyn BaseBotMessenger>,
    /// Bot API id of this bot; stages addressing it are refused
    pub self_id: i64,
    /// Where failures are reported
    pub admin_peer: String,
    /// Fallback "switch to private chat" button
    pub faq: SwitchPm,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        provider: Arc<dyn BaseInlineProvider>,
        messenger: Arc<dyn BaseBotMessenger>,
        self_id: i64,
        admin_peer: String,
        faq: SwitchPm,
    ) -> Self {
        Self {
            provider,
            messenger,
            self_id,
            admin_peer,
            faq,
        }
    }
}
