// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Map};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use telegram::SendMessage;

use super::{BaseBotMessenger, BaseInlineProvider, ResolvedBot, ServerDeps};
use crate::domains::inline::models::InlineAnswer;
use crate::domains::pipes::models::{
    BotInlineMessage, BotResults, CandidateResult, InlineResult, MessageKind, SwitchPm,
};

/// Bot id the test deps run as
pub const TEST_SELF_ID: i64 = 777;

/// Operator peer the test deps report to
pub const TEST_ADMIN_PEER: &str = "@admin";

// =============================================================================
// Fixtures
// =============================================================================

fn inline_result(id: &str, kind: &str, message: BotInlineMessage) -> InlineResult<BotInlineMessage> {
    InlineResult {
        id: id.to_string(),
        kind: kind.to_string(),
        send_message: message,
        rest: Map::new(),
    }
}

fn message(kind: MessageKind, text: Option<&str>) -> BotInlineMessage {
    BotInlineMessage {
        kind,
        message: text.map(str::to_string),
        entities: None,
        geo: None,
        rest: Map::new(),
    }
}

/// A plain text result
pub fn text_candidate(id: &str, text: &str) -> CandidateResult {
    CandidateResult::Text(inline_result(id, "article", message(MessageKind::Text, Some(text))))
}

/// A photo result with an optional caption
pub fn photo_candidate(id: &str, caption: Option<&str>) -> CandidateResult {
    let mut body = inline_result(id, "photo", message(MessageKind::MediaAuto, caption));
    body.rest.insert("photo".to_string(), json!({ "_": "photo", "id": id }));
    CandidateResult::Photo(body)
}

/// A game result, never resubmittable
pub fn game_candidate(id: &str) -> CandidateResult {
    let mut body = inline_result(id, "game", message(MessageKind::MediaAuto, Some("")));
    body.rest.insert("game".to_string(), json!({ "_": "game", "short_name": id }));
    CandidateResult::Game(body)
}

/// Text results named `{prefix}1..={count}` with the same text pattern
pub fn text_candidates(prefix: &str, count: usize) -> Vec<CandidateResult> {
    (1..=count)
        .map(|n| text_candidate(&format!("{}{}", prefix, n), &format!("{} result {}", prefix, n)))
        .collect()
}

// =============================================================================
// Mock Inline Provider
// =============================================================================

/// Arguments captured from a provider query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCallArgs {
    pub handle: String,
    pub user_id: i64,
    pub query: String,
}

pub struct MockInlineProvider {
    bots: Arc<Mutex<HashMap<String, i64>>>,
    responses: Arc<Mutex<HashMap<String, BotResults>>>,
    failing: Arc<Mutex<Vec<String>>>,
    resolve_calls: Arc<Mutex<Vec<String>>>,
    query_calls: Arc<Mutex<Vec<QueryCallArgs>>>,
}

impl MockInlineProvider {
    pub fn new() -> Self {
        Self {
            bots: Arc::new(Mutex::new(HashMap::new())),
            responses: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(Mutex::new(Vec::new())),
            resolve_calls: Arc::new(Mutex::new(Vec::new())),
            query_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a provider handle with a fixed bot id
    pub fn with_bot(self, handle: &str, id: i64) -> Self {
        self.bots.lock().unwrap().insert(handle.to_string(), id);
        self
    }

    /// Register a provider returning `response` for every query
    pub fn with_response(self, handle: &str, response: BotResults) -> Self {
        {
            let mut bots = self.bots.lock().unwrap();
            let next_id = 1000 + bots.len() as i64;
            bots.entry(handle.to_string()).or_insert(next_id);
        }
        self.responses
            .lock()
            .unwrap()
            .insert(handle.to_string(), response);
        self
    }

    /// Register a provider returning these candidates
    pub fn with_results(self, handle: &str, results: Vec<CandidateResult>) -> Self {
        self.with_response(handle, BotResults::new(results))
    }

    /// Register a provider whose queries fail with a transport error
    pub fn failing(self, handle: &str) -> Self {
        let provider = self.with_response(handle, BotResults::new(Vec::new()));
        provider.failing.lock().unwrap().push(handle.to_string());
        provider
    }

    /// Get all handles that were resolved
    pub fn resolve_calls(&self) -> Vec<String> {
        self.resolve_calls.lock().unwrap().clone()
    }

    /// Get all queries with their arguments
    pub fn query_calls(&self) -> Vec<QueryCallArgs> {
        self.query_calls.lock().unwrap().clone()
    }

    /// Check if a provider was queried
    pub fn was_queried(&self, handle: &str) -> bool {
        self.query_calls
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.handle == handle)
    }
}

impl Default for MockInlineProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseInlineProvider for MockInlineProvider {
    async fn resolve_bot(&self, handle: &str) -> Result<ResolvedBot> {
        self.resolve_calls.lock().unwrap().push(handle.to_string());

        let id = self
            .bots
            .lock()
            .unwrap()
            .get(handle)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Unknown provider {}", handle))?;

        Ok(ResolvedBot {
            id,
            handle: handle.to_string(),
        })
    }

    async fn query(&self, bot: &ResolvedBot, user_id: i64, query: &str) -> Result<BotResults> {
        self.query_calls.lock().unwrap().push(QueryCallArgs {
            handle: bot.handle.clone(),
            user_id,
            query: query.to_string(),
        });

        if self.failing.lock().unwrap().contains(&bot.handle) {
            anyhow::bail!("Connection reset while querying {}", bot.handle);
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(&bot.handle)
            .cloned()
            .unwrap_or_else(|| BotResults::new(Vec::new())))
    }
}

// =============================================================================
// Mock Messenger
// =============================================================================

pub struct MockMessenger {
    answers: Arc<Mutex<Vec<InlineAnswer>>>,
    messages: Arc<Mutex<Vec<SendMessage>>>,
    fail_messages: bool,
}

impl MockMessenger {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(Mutex::new(Vec::new())),
            messages: Arc::new(Mutex::new(Vec::new())),
            fail_messages: false,
        }
    }

    /// Make every send_message call fail
    pub fn failing_messages(mut self) -> Self {
        self.fail_messages = true;
        self
    }

    /// Get all inline answers that were delivered
    pub fn answers(&self) -> Vec<InlineAnswer> {
        self.answers.lock().unwrap().clone()
    }

    /// Get the most recent inline answer
    pub fn last_answer(&self) -> Option<InlineAnswer> {
        self.answers.lock().unwrap().last().cloned()
    }

    /// Get all messages that were sent (including failed attempts)
    pub fn messages(&self) -> Vec<SendMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Get messages sent to a given peer
    pub fn messages_to(&self, peer: &str) -> Vec<SendMessage> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.peer == peer)
            .cloned()
            .collect()
    }
}

impl Default for MockMessenger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseBotMessenger for MockMessenger {
    async fn answer_inline_query(&self, answer: &InlineAnswer) -> Result<()> {
        self.answers.lock().unwrap().push(answer.clone());
        Ok(())
    }

    async fn send_message(&self, message: SendMessage) -> Result<()> {
        self.messages.lock().unwrap().push(message);
        if self.fail_messages {
            anyhow::bail!("PEER_ID_INVALID");
        }
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub provider: Arc<MockInlineProvider>,
    pub messenger: Arc<MockMessenger>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            provider: Arc::new(MockInlineProvider::new()),
            messenger: Arc::new(MockMessenger::new()),
        }
    }

    /// Set a mock inline provider
    pub fn mock_provider(mut self, provider: MockInlineProvider) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// Set a mock messenger
    pub fn mock_messenger(mut self, messenger: MockMessenger) -> Self {
        self.messenger = Arc::new(messenger);
        self
    }

    /// Convert into ServerDeps for testing
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.provider.clone(),
            self.messenger.clone(),
            TEST_SELF_ID,
            TEST_ADMIN_PEER.to_string(),
            SwitchPm::new("FAQ", "lel"),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
