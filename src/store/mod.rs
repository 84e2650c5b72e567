//! Storage layer: term dictionary and the six-way indexed triple store

pub mod dictionary;
pub mod hexastore;
pub mod index;

pub use dictionary::TermDictionary;
pub use hexastore::HexaStore;
pub use index::IndexOrder;
