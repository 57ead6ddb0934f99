use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Gateway holding the user session (queries other bots)
    pub user_gateway_url: String,
    pub user_session: String,
    /// Gateway holding the bot session (receives updates, answers)
    pub bot_gateway_url: String,
    pub bot_session: String,
    /// Peer that receives failure reports
    pub admin_peer: String,
    pub faq_text: String,
    pub faq_start_param: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            user_gateway_url: env::var("USER_GATEWAY_URL")
                .context("USER_GATEWAY_URL must be set")?,
            user_session: env::var("USER_SESSION").context("USER_SESSION must be set")?,
            bot_gateway_url: env::var("BOT_GATEWAY_URL")
                .context("BOT_GATEWAY_URL must be set")?,
            bot_session: env::var("BOT_SESSION").context("BOT_SESSION must be set")?,
            admin_peer: env::var("ADMIN_PEER").unwrap_or_else(|_| "@danogentili".to_string()),
            faq_text: env::var("FAQ_TEXT").unwrap_or_else(|_| "FAQ".to_string()),
            faq_start_param: env::var("FAQ_START_PARAM").unwrap_or_else(|_| "lel".to_string()),
        })
    }
}
