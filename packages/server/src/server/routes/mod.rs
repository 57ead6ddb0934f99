// HTTP routes
pub mod health;
pub mod updates;

pub use health::*;
pub use updates::*;
