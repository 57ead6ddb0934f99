//! Pipes domain - chains inline bots together
//!
//! A query like `text | @botA:filter | @botB $` is resolved stage by stage:
//!   parse_query → PipelineExecutor (provider query → select → hand text on) → translate
//!
//! Responsibilities:
//! - Pipe syntax parsing
//! - Per-stage result selection (index / select-all / regex)
//! - Translating final results into resubmittable input form

pub mod error;
pub mod executor;
pub mod models;
pub mod parser;
pub mod selector;
pub mod translate;

pub use error::PipelineError;
pub use executor::PipelineExecutor;
pub use parser::parse_query;
pub use selector::select;
pub use translate::{translate, translate_all};
