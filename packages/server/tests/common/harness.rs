//! Test harness for integration testing.
//!
//! Every test gets fresh mock gateways preloaded with a small set of provider
//! bots, plus the full axum app wired to them.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pipesbot_core::domains::pipes::models::{BotResults, SwitchPm};
use pipesbot_core::kernel::test_dependencies::{
    game_candidate, text_candidate, text_candidates, MockInlineProvider, TestDependencies,
    TEST_SELF_ID,
};
use pipesbot_core::kernel::ServerDeps;
use pipesbot_core::server::build_app;
use serde_json::Value;
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Handle that resolves to the bot itself
pub const SELF_HANDLE: &str = "@pipesbot";

/// Button a provider answers with when it needs a private chat first
pub fn login_button() -> SwitchPm {
    SwitchPm::new("Connect your account", "login")
}

/// Providers known to every harness:
///
/// - `@filtersbot`: three spellings of the query text
/// - `@lolcatzbot`: five text results
/// - `@pipesbot`: this bot
/// - `@private`: always redirects to a private chat
/// - `@games`: returns a game next to a text result
fn providers() -> MockInlineProvider {
    MockInlineProvider::new()
        .with_results(
            "@filtersbot",
            vec![
                text_candidate("f1", "draw a cat"),
                text_candidate("f2", "dr4w 4 c4t (eleet)"),
                text_candidate("f3", "DRAW A CAT"),
            ],
        )
        .with_results("@lolcatzbot", text_candidates("lol", 5))
        .with_bot(SELF_HANDLE, TEST_SELF_ID)
        .with_response("@private", BotResults::redirect(login_button()))
        .with_results(
            "@games",
            vec![text_candidate("t1", "snake"), game_candidate("snake")],
        )
}

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let status = ctx.post_update(json!({ ... })).await;
///     // ... assertions on ctx.deps.messenger
/// }
/// ```
pub struct TestHarness {
    /// Mock gateways - inspect these for recorded calls.
    pub deps: TestDependencies,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            deps: TestDependencies::new().mock_provider(providers()),
        }
    }

    async fn teardown(self) {
        // Mocks are dropped with the harness
    }
}

impl TestHarness {
    /// Server dependencies backed by this harness's mocks.
    pub fn server_deps(&self) -> ServerDeps {
        self.deps.server_deps()
    }

    /// A fresh app sharing this harness's mocks.
    pub fn app(&self) -> Router {
        build_app(self.server_deps())
    }

    /// POST one TL update to the webhook.
    pub async fn post_update(&self, update: Value) -> StatusCode {
        let request = Request::builder()
            .method("POST")
            .uri("/updates")
            .header("content-type", "application/json")
            .body(Body::from(update.to_string()))
            .expect("Failed to build request");

        self.app()
            .oneshot(request)
            .await
            .expect("Router failed")
            .status()
    }

    /// GET a path and return its status and JSON body.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self.app().oneshot(request).await.expect("Router failed");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        (status, serde_json::from_slice(&bytes).expect("Body is not JSON"))
    }
}
