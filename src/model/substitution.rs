//! Variable-to-term bindings produced by pattern matching

use crate::model::{Term, Variable};
use std::collections::HashMap;
use std::fmt;

/// A binding of variables to constant terms
///
/// Substitutions are built by the matcher and read by consumers; they are
/// not mutated after evaluation. Two substitutions are equal iff their
/// mappings are equal as sets of (variable, term) pairs. The empty
/// substitution is a valid result and means "matched, no free variables".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: HashMap<Variable, Term>,
}

impl Substitution {
    /// Create an empty substitution
    pub fn new() -> Self {
        Substitution {
            bindings: HashMap::new(),
        }
    }

    /// Bind a variable to a term
    ///
    /// Binding the same variable twice keeps the later term; patterns
    /// repeating a variable across positions are not validated (see the
    /// matcher documentation).
    pub fn bind(&mut self, var: Variable, value: Term) {
        self.bindings.insert(var, value);
    }

    /// Get the term bound to a variable
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Iterate over the (variable, term) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.bindings.iter()
    }

    /// Restrict this substitution to the given variables
    pub fn project(&self, vars: &[Variable]) -> Substitution {
        let mut projected = Substitution::new();
        for var in vars {
            if let Some(value) = self.bindings.get(var) {
                projected.bind(var.clone(), value.clone());
            }
        }
        projected
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check whether no variables are bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(Variable, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Variable, Term)>>(iter: I) -> Self {
        Substitution {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Substitution {
    /// Renders bindings sorted by variable name for stable log output
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<_> = self.bindings.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        write!(f, "{{")?;
        for (i, (var, term)) in pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{var} -> {term}")?;
        }
        write!(f, "}}")
    }
}
