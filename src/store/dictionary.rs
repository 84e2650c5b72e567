//! Bidirectional term dictionary
//!
//! Maps every distinct constant term the store has seen to a compact
//! integer identifier and back. Identifiers start at 1, grow
//! monotonically, and are never reused or reassigned. The dictionary only
//! grows; there is no removal.

use crate::model::Term;
use crate::{HexastoreError, Result};
use bimap::BiMap;
use std::sync::RwLock;

#[derive(Debug)]
struct DictionaryInner {
    terms: BiMap<u64, Term>,
    next_id: u64,
}

/// Thread-safe bidirectional mapping between terms and identifiers
///
/// Lookups of already-encoded terms take a read lock; only the allocation
/// of a new identifier takes the write lock, with a re-check under it so
/// two concurrent encodes of the same new term agree on one identifier.
#[derive(Debug)]
pub struct TermDictionary {
    inner: RwLock<DictionaryInner>,
}

impl TermDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        TermDictionary {
            inner: RwLock::new(DictionaryInner {
                terms: BiMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Return the identifier for `term`, allocating one if needed
    pub fn encode(&self, term: &Term) -> u64 {
        // Fast path: the term is usually already known
        {
            let inner = self.inner.read().unwrap();
            if let Some(&id) = inner.terms.get_by_right(term) {
                return id;
            }
        }

        let mut inner = self.inner.write().unwrap();
        // Re-check in case another thread encoded it between the locks
        if let Some(&id) = inner.terms.get_by_right(term) {
            return id;
        }

        let id = inner.next_id;
        inner.next_id += 1;
        inner.terms.insert(id, term.clone());
        id
    }

    /// Return the identifier for `term` without allocating
    ///
    /// Query paths use this so that probing a pattern never grows the
    /// dictionary.
    pub fn try_encode(&self, term: &Term) -> Option<u64> {
        let inner = self.inner.read().unwrap();
        inner.terms.get_by_right(term).copied()
    }

    /// Return the term associated with `id`
    ///
    /// # Errors
    ///
    /// Returns [`HexastoreError::UnknownTermId`] if the identifier was
    /// never issued by this dictionary. All identifiers flowing through
    /// the store's own code paths originate here, so this only fires on
    /// misuse.
    pub fn decode(&self, id: u64) -> Result<Term> {
        let inner = self.inner.read().unwrap();
        inner
            .terms
            .get_by_left(&id)
            .cloned()
            .ok_or(HexastoreError::UnknownTermId(id))
    }

    /// Number of distinct terms encoded so far
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().terms.len()
    }

    /// Check whether no terms have been encoded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TermDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Literal, NamedNode};

    #[test]
    fn test_round_trip() {
        let dict = TermDictionary::new();
        let term: Term = NamedNode::new("http://example.org/s1").into();

        let id = dict.encode(&term);
        assert_eq!(dict.decode(id).unwrap(), term);
    }

    #[test]
    fn test_same_term_same_id() {
        let dict = TermDictionary::new();
        let t1: Term = Literal::new("value").into();
        let t2: Term = Literal::new("value").into();
        let t3: Term = Literal::new("other").into();

        assert_eq!(dict.encode(&t1), dict.encode(&t2));
        assert_ne!(dict.encode(&t1), dict.encode(&t3));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_ids_start_at_one_and_grow() {
        let dict = TermDictionary::new();
        let first = dict.encode(&Literal::new("a").into());
        let second = dict.encode(&Literal::new("b").into());

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_unknown_id() {
        let dict = TermDictionary::new();
        assert!(matches!(
            dict.decode(42),
            Err(HexastoreError::UnknownTermId(42))
        ));
    }

    #[test]
    fn test_try_encode_does_not_allocate() {
        let dict = TermDictionary::new();
        let term: Term = Literal::new("unseen").into();

        assert_eq!(dict.try_encode(&term), None);
        assert!(dict.is_empty());

        let id = dict.encode(&term);
        assert_eq!(dict.try_encode(&term), Some(id));
    }

    #[test]
    fn test_concurrent_encode_yields_one_id() {
        use std::sync::Arc;
        use std::thread;

        let dict = Arc::new(TermDictionary::new());
        let mut handles = vec![];

        for i in 0..16 {
            let dict = Arc::clone(&dict);
            handles.push(thread::spawn(move || {
                let term: Term = NamedNode::new(format!("urn:t{}", i % 3)).into();
                dict.encode(&term)
            }));
        }

        let ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let unique: std::collections::HashSet<_> = ids.iter().collect();

        // Only three distinct terms were encoded
        assert_eq!(unique.len(), 3);
        assert_eq!(dict.len(), 3);
    }
}
