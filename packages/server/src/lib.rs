// Pipes bot - API Core
//
// This crate chains Telegram inline bots: an inline query names a sequence of
// provider bots, each stage's chosen result feeds the next, and the final
// results are resubmitted as the bot's own answer.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
