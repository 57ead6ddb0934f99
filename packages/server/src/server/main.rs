// Main entry point for the pipes bot

use std::sync::Arc;

use anyhow::{Context, Result};
use pipesbot_core::domains::pipes::models::SwitchPm;
use pipesbot_core::kernel::{GatewayInlineProvider, GatewayMessenger, ServerDeps};
use pipesbot_core::{server::build_app, Config};
use telegram::TelegramClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pipesbot_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting pipes bot");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let user = Arc::new(TelegramClient::new(
        &config.user_gateway_url,
        &config.user_session,
    ));
    let bot = Arc::new(TelegramClient::new(
        &config.bot_gateway_url,
        &config.bot_session,
    ));

    // Both sessions must be usable before accepting updates
    let me = user
        .get_self()
        .await
        .context("Failed to reach the user session")?;
    if me.bot {
        anyhow::bail!("USER_SESSION must be logged in as a user, not a bot");
    }
    tracing::info!(user_id = me.id, "User session ready");

    let self_bot = bot
        .get_self()
        .await
        .context("Failed to reach the bot session")?;
    tracing::info!(bot_id = self_bot.id, username = ?self_bot.username, "Bot session ready");

    let deps = ServerDeps::new(
        Arc::new(GatewayInlineProvider::new(user)),
        Arc::new(GatewayMessenger::new(bot)),
        self_bot.id,
        config.admin_peer.clone(),
        SwitchPm::new(config.faq_text.clone(), config.faq_start_param.clone()),
    );

    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Update webhook: http://localhost:{}/updates", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
