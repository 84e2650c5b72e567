//! The six-way indexed triple store

use crate::model::{StarQuery, Substitution, Triple};
use crate::query::{matcher, star};
use crate::store::dictionary::TermDictionary;
use crate::store::index::IndexSet;
use std::sync::RwLock;
use tracing::trace;

/// An in-memory triple store indexed under all six (s, p, o) permutations
///
/// Terms are encoded through a [`TermDictionary`]; encoded triples are
/// replicated across six index permutations so that any bound/free
/// pattern shape has an O(1)-amortized lookup path.
///
/// The store is safe to share across threads: the dictionary takes its
/// own lock, and all six indexes plus the size counter live behind a
/// single `RwLock`, so readers never observe a triple present in only a
/// subset of the indexes and `len` always agrees with index contents.
#[derive(Debug, Default)]
pub struct HexaStore {
    dict: TermDictionary,
    indexes: RwLock<IndexSet>,
}

impl HexaStore {
    /// Create an empty store
    pub fn new() -> Self {
        HexaStore {
            dict: TermDictionary::new(),
            indexes: RwLock::new(IndexSet::new()),
        }
    }

    /// Insert a triple; returns true if it was not already present
    ///
    /// Duplicate inserts are no-ops (set semantics). The triple is
    /// expected to be ground; this is not validated.
    pub fn add(&self, triple: &Triple) -> bool {
        let s = self.dict.encode(triple.subject());
        let p = self.dict.encode(triple.predicate());
        let o = self.dict.encode(triple.object());

        let is_new = self.indexes.write().unwrap().insert(s, p, o);
        trace!(%triple, is_new, "add");
        is_new
    }

    /// Insert every triple from an iterator; returns the number newly added
    ///
    /// The whole batch is applied under one write lock, so a concurrent
    /// reader sees either none or all of it.
    pub fn add_all<I>(&self, triples: I) -> u64
    where
        I: IntoIterator<Item = Triple>,
    {
        let mut added = 0;
        let mut indexes = self.indexes.write().unwrap();
        for triple in triples {
            let s = self.dict.encode(triple.subject());
            let p = self.dict.encode(triple.predicate());
            let o = self.dict.encode(triple.object());
            if indexes.insert(s, p, o) {
                added += 1;
            }
        }
        added
    }

    /// Number of distinct stored triples
    pub fn len(&self) -> u64 {
        self.indexes.read().unwrap().len()
    }

    /// Check whether the store holds no triples
    pub fn is_empty(&self) -> bool {
        self.indexes.read().unwrap().is_empty()
    }

    /// Membership test for a ground triple
    ///
    /// Terms the dictionary has never seen cannot be stored, so the test
    /// never allocates identifiers.
    pub fn contains(&self, triple: &Triple) -> bool {
        let (Some(s), Some(p), Some(o)) = (
            self.dict.try_encode(triple.subject()),
            self.dict.try_encode(triple.predicate()),
            self.dict.try_encode(triple.object()),
        ) else {
            return false;
        };
        self.indexes.read().unwrap().contains(s, p, o)
    }

    /// Reconstruct every stored triple, each exactly once
    ///
    /// Reads only the canonical SPO index to avoid duplicate
    /// reconstruction.
    pub fn triples(&self) -> Vec<Triple> {
        let indexes = self.indexes.read().unwrap();
        indexes
            .iter_spo()
            .map(|(s, p, o)| {
                Triple::new(
                    self.decode(s),
                    self.decode(p),
                    self.decode(o),
                )
            })
            .collect()
    }

    /// Match a single triple pattern
    ///
    /// Returns a finite sequence of substitutions, one per stored triple
    /// matching the pattern, in unspecified order and with no duplicates.
    /// An all-bound pattern yields exactly one empty substitution when
    /// the triple is present. A pattern that matches nothing yields an
    /// empty sequence, never an error.
    pub fn match_pattern(&self, pattern: &Triple) -> impl Iterator<Item = Substitution> {
        let indexes = self.indexes.read().unwrap();
        matcher::match_pattern(&indexes, &self.dict, pattern).into_iter()
    }

    /// Match a star query
    ///
    /// The query was validated at construction, so evaluation cannot
    /// fail; a query with no consistent bindings yields an empty
    /// sequence.
    pub fn match_star(&self, query: &StarQuery) -> impl Iterator<Item = Substitution> {
        star::evaluate(self, query).into_iter()
    }

    /// Estimated match cardinality for a pattern
    ///
    /// The proxy is the size of the OPS bucket for the pattern's
    /// (object, predicate) pair, regardless of which positions are
    /// variables; variable positions estimate as zero. This is the
    /// heuristic the star-join evaluator orders patterns by.
    pub fn estimate_matches(&self, pattern: &Triple) -> usize {
        let (Some(o), Some(p)) = (
            self.dict.try_encode(pattern.object()),
            self.dict.try_encode(pattern.predicate()),
        ) else {
            return 0;
        };
        self.indexes.read().unwrap().estimate(o, p)
    }

    /// Access the term dictionary for raw encode/decode
    pub fn dictionary(&self) -> &TermDictionary {
        &self.dict
    }

    fn decode(&self, id: u64) -> crate::model::Term {
        self.dict
            .decode(id)
            .expect("identifier issued by this dictionary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Literal, NamedNode, Term, Variable};

    fn node(n: &str) -> Term {
        NamedNode::new(format!("urn:{n}")).into()
    }

    fn triple(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(node(s), node(p), node(o))
    }

    #[test]
    fn test_add_and_size() {
        let store = HexaStore::new();

        assert!(store.add(&triple("s1", "p1", "o1")));
        assert_eq!(store.len(), 1);

        assert!(store.add(&triple("s2", "p2", "o2")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicate_add_returns_false() {
        let store = HexaStore::new();

        assert!(store.add(&triple("s1", "p1", "o1")));
        assert!(!store.add(&triple("s1", "p1", "o1")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_all_counts_new_triples() {
        let store = HexaStore::new();
        store.add(&triple("s1", "p1", "o1"));

        let added = store.add_all(vec![
            triple("s1", "p1", "o1"),
            triple("s2", "p2", "o2"),
            triple("s3", "p3", "o3"),
        ]);

        assert_eq!(added, 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_contains() {
        let store = HexaStore::new();
        store.add(&triple("s1", "p1", "o1"));

        assert!(store.contains(&triple("s1", "p1", "o1")));
        assert!(!store.contains(&triple("s1", "p1", "o2")));
        // Entirely unknown terms must not be encoded by the probe
        assert!(!store.contains(&triple("x", "y", "z")));
        assert_eq!(store.dictionary().len(), 3);
    }

    #[test]
    fn test_triples_reconstructs_each_once() {
        let store = HexaStore::new();
        let t1 = triple("s1", "p1", "o1");
        let t2 = triple("s2", "p2", "o2");
        store.add(&t1);
        store.add(&t2);
        store.add(&t1);

        let atoms = store.triples();
        assert_eq!(atoms.len(), 2);
        assert!(atoms.contains(&t1));
        assert!(atoms.contains(&t2));
    }

    #[test]
    fn test_match_on_empty_store() {
        let store = HexaStore::new();
        let pattern = Triple::new(Variable::new("s"), Variable::new("p"), Variable::new("o"));

        assert_eq!(store.match_pattern(&pattern).count(), 0);
    }

    #[test]
    fn test_estimate_matches() {
        let store = HexaStore::new();
        store.add(&triple("s1", "p1", "o1"));
        store.add(&triple("s2", "p1", "o1"));
        store.add(&triple("s1", "p2", "o1"));

        // Two subjects under (o1, p1), one under (o1, p2)
        assert_eq!(store.estimate_matches(&triple("s1", "p1", "o1")), 2);
        assert_eq!(store.estimate_matches(&triple("s1", "p2", "o1")), 1);
        // Variable positions estimate as zero
        let var_pattern = Triple::new(node("s1"), Variable::new("p"), node("o1"));
        assert_eq!(store.estimate_matches(&var_pattern), 0);
    }

    #[test]
    fn test_literals_and_nodes_are_distinct_terms() {
        let store = HexaStore::new();
        store.add(&Triple::new(node("s"), node("p"), Literal::new("urn:o")));

        assert!(!store.contains(&triple("s", "p", "o")));
        assert!(store.contains(&Triple::new(node("s"), node("p"), Literal::new("urn:o"))));
    }
}
