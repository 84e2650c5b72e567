//! Query evaluation: single-pattern matching and star joins

pub mod matcher;
pub mod star;

pub use matcher::PatternShape;
