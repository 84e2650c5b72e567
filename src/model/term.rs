//! RDF term types: named nodes, literals, and variables
//!
//! A [`Term`] is either a constant (named node or literal) or a query
//! variable. Two terms are equal iff they represent the same resource,
//! literal value, or variable name. Constants are the only terms the
//! store ever assigns identifiers to; variables exist purely as pattern
//! placeholders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An IRI-identified resource
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamedNode {
    iri: String,
}

impl NamedNode {
    /// Create a named node from an IRI
    ///
    /// The IRI is treated as an opaque identifier; no syntax validation
    /// is performed.
    pub fn new(iri: impl Into<String>) -> Self {
        NamedNode { iri: iri.into() }
    }

    /// Get the IRI as a string slice
    pub fn as_str(&self) -> &str {
        &self.iri
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

/// An opaque literal value
///
/// Literals carry no datatype or language tag; term identity is the
/// literal's lexical form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    value: String,
}

impl Literal {
    /// Create a literal from its lexical value
    pub fn new(value: impl Into<String>) -> Self {
        Literal {
            value: value.into(),
        }
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

/// A query variable
///
/// The name is stored without the leading `?`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    name: String,
}

impl Variable {
    /// Create a variable from its name (without the `?` prefix)
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }

    /// Get the variable name (without the `?` prefix)
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.name)
    }
}

/// A term in a triple position: constant or variable
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    NamedNode(NamedNode),
    Literal(Literal),
    Variable(Variable),
}

impl Term {
    /// Check whether this term is a variable
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// Get the variable if this term is one
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(n) => n.fmt(f),
            Term::Literal(l) => l.fmt(f),
            Term::Variable(v) => v.fmt(f),
        }
    }
}

impl From<NamedNode> for Term {
    fn from(node: NamedNode) -> Self {
        Term::NamedNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Term::Variable(variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_equality() {
        let n1: Term = NamedNode::new("http://example.org/a").into();
        let n2: Term = NamedNode::new("http://example.org/a").into();
        let l1: Term = Literal::new("http://example.org/a").into();

        assert_eq!(n1, n2);
        assert_ne!(n1, l1);
    }

    #[test]
    fn test_is_variable() {
        let var: Term = Variable::new("x").into();
        let lit: Term = Literal::new("x").into();

        assert!(var.is_variable());
        assert!(!lit.is_variable());
        assert_eq!(var.as_variable(), Some(&Variable::new("x")));
        assert_eq!(lit.as_variable(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Term::from(NamedNode::new("urn:a")).to_string(),
            "<urn:a>"
        );
        assert_eq!(Term::from(Literal::new("abc")).to_string(), "\"abc\"");
        assert_eq!(Term::from(Variable::new("x")).to_string(), "?x");
    }
}
