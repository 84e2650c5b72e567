//! # Hexastore
//!
//! An in-memory RDF triple store with six-way redundant indexing and
//! pattern-matching query evaluation.
//!
//! The store keeps every triple encoded as compact integer identifiers and
//! replicated across all six permutations of (subject, predicate, object),
//! so that any combination of bound and free positions in a query pattern
//! has an index whose first two key levels cover exactly the bound
//! positions. On top of the single-pattern matcher sits a star-join
//! evaluator for conjunctive queries sharing one central variable.
//!
//! ## Example
//!
//! ```rust
//! use hexastore::model::{NamedNode, Triple, Variable};
//! use hexastore::store::HexaStore;
//!
//! let store = HexaStore::new();
//! store.add(&Triple::new(
//!     NamedNode::new("http://example.org/alice"),
//!     NamedNode::new("http://example.org/knows"),
//!     NamedNode::new("http://example.org/bob"),
//! ));
//!
//! let pattern = Triple::new(
//!     NamedNode::new("http://example.org/alice"),
//!     NamedNode::new("http://example.org/knows"),
//!     Variable::new("who"),
//! );
//! for binding in store.match_pattern(&pattern) {
//!     println!("{binding}");
//! }
//! ```

pub mod model;
pub mod query;
pub mod store;

// Re-export the model types for convenience
pub use model::*;
pub use store::HexaStore;

/// Core error type for hexastore operations
#[derive(Debug, thiserror::Error)]
pub enum HexastoreError {
    /// An identifier was decoded that this dictionary never issued
    #[error("unknown term id: {0}")]
    UnknownTermId(u64),
    /// A star query failed validation at construction time
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Result type alias for hexastore operations
pub type Result<T> = std::result::Result<T, HexastoreError>;

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
