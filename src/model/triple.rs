//! RDF triples, usable both as stored data and as query patterns

use crate::model::{Term, Variable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An ordered (subject, predicate, object) triple
///
/// Each position holds a [`Term`], which may be a variable. A triple with
/// no variables is *ground* and can be stored; a triple with variables is
/// a query pattern. The store does not validate groundness on insert
/// (callers are expected to feed it ground triples).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    subject: Term,
    predicate: Term,
    object: Term,
}

impl Triple {
    /// Create a new triple from its three components
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Self {
        Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Get the subject term
    pub fn subject(&self) -> &Term {
        &self.subject
    }

    /// Get the predicate term
    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    /// Get the object term
    pub fn object(&self) -> &Term {
        &self.object
    }

    /// Check whether all three positions are constants
    pub fn is_ground(&self) -> bool {
        !self.subject.is_variable()
            && !self.predicate.is_variable()
            && !self.object.is_variable()
    }

    /// Collect the distinct variables appearing in this triple
    pub fn variables(&self) -> BTreeSet<&Variable> {
        [&self.subject, &self.predicate, &self.object]
            .into_iter()
            .filter_map(Term::as_variable)
            .collect()
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
