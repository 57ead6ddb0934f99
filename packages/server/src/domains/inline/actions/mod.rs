//! Inline domain actions
//!
//! Actions are async functions called from the update webhook. They never fail:
//! errors are logged or reported to the operator and the user still gets an answer.

mod answer_query;
mod dispatch;
mod greet;

pub use answer_query::{answer_inline_query, handle_inline_query};
pub use dispatch::handle_update;
pub use greet::handle_new_message;
