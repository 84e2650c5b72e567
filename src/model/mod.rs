//! RDF data model: terms, triples, substitutions, and star queries

pub mod star;
pub mod substitution;
pub mod term;
pub mod triple;

pub use star::StarQuery;
pub use substitution::Substitution;
pub use term::{Literal, NamedNode, Term, Variable};
pub use triple::Triple;
