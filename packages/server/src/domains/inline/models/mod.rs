pub mod answer;

pub use answer::*;
