// Business domains
pub mod inline;
pub mod pipes;
