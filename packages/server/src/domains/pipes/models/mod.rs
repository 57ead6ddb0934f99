pub mod outcome;
pub mod result;
pub mod stage;

pub use outcome::*;
pub use result::*;
pub use stage::*;
