//! Inline domain - the bot's user-facing surface
//!
//! Architecture:
//!   webhook → handle_update → (inline query) answer_inline_query → pipes → messenger
//!                           → (message) handle_new_message → messenger
//!
//! Responsibilities:
//! - Answering inline queries, always with something submittable
//! - Reporting pipeline failures to the operator
//! - `/start` usage instructions

pub mod actions;
pub mod models;
mod welcome;

pub use actions::{answer_inline_query, handle_inline_query, handle_new_message, handle_update};
pub use models::InlineAnswer;
pub use welcome::WELCOME;
