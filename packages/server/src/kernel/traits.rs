// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Pipeline logic lives in domains/pipes and talks to providers through these traits.
//
// Naming convention: Base* for trait names (e.g., BaseInlineProvider, BaseBotMessenger)

use anyhow::Result;
use async_trait::async_trait;
use telegram::SendMessage;

use crate::domains::inline::models::InlineAnswer;
use crate::domains::pipes::models::BotResults;

// =============================================================================
// Inline Provider Trait (Infrastructure - other bots' inline search)
// =============================================================================

/// A provider handle resolved to its bot id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBot {
    pub id: i64,
    pub handle: String,
}

#[async_trait]
pub trait BaseInlineProvider: Send + Sync {
    /// Resolve a provider username. Fails for unknown handles.
    async fn resolve_bot(&self, handle: &str) -> Result<ResolvedBot>;

    /// Run an inline query against a provider on behalf of `user_id`
    async fn query(&self, bot: &ResolvedBot, user_id: i64, query: &str) -> Result<BotResults>;
}

// =============================================================================
// Bot Messenger Trait (Infrastructure - delivery back to Telegram)
// =============================================================================

#[async_trait]
pub trait BaseBotMessenger: Send + Sync {
    /// Deliver the answer to an inline query
    async fn answer_inline_query(&self, answer: &InlineAnswer) -> Result<()>;

    /// Send a chat message as the bot
    async fn send_message(&self, message: SendMessage) -> Result<()>;
}
