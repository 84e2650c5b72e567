//! Star queries: conjunctions of triple patterns around a shared variable

use crate::model::{Triple, Variable};
use crate::{HexastoreError, Result};
use std::collections::BTreeSet;

/// A star-shaped conjunctive query
///
/// A star query is a non-empty list of triple patterns that all bind the
/// same set of variables — in the standard case a single central variable,
/// with every other position literal. The evaluator joins the patterns by
/// substitution equality, which is only correct under that shared-variable
/// precondition, so `StarQuery::new` enforces it instead of producing
/// silently wrong joins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarQuery {
    label: String,
    atoms: Vec<Triple>,
    answer_variables: Vec<Variable>,
}

impl StarQuery {
    /// Create a validated star query
    ///
    /// # Errors
    ///
    /// Returns [`HexastoreError::InvalidQuery`] if `atoms` is empty, if
    /// any atom is fully ground, or if the atoms do not all bind exactly
    /// the same variable set.
    pub fn new(
        label: impl Into<String>,
        atoms: Vec<Triple>,
        answer_variables: Vec<Variable>,
    ) -> Result<Self> {
        let first = atoms.first().ok_or_else(|| {
            HexastoreError::InvalidQuery("star query has no patterns".into())
        })?;

        let shared: BTreeSet<&Variable> = first.variables();
        if shared.is_empty() {
            return Err(HexastoreError::InvalidQuery(
                "star query pattern binds no variables".into(),
            ));
        }
        for atom in &atoms[1..] {
            if atom.variables() != shared {
                return Err(HexastoreError::InvalidQuery(format!(
                    "pattern `{atom}` does not bind the query's shared variable set"
                )));
            }
        }

        Ok(StarQuery {
            label: label.into(),
            atoms,
            answer_variables,
        })
    }

    /// Get the query label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the triple patterns
    pub fn atoms(&self) -> &[Triple] {
        &self.atoms
    }

    /// Get the designated answer variables
    pub fn answer_variables(&self) -> &[Variable] {
        &self.answer_variables
    }

    /// The variable set every pattern binds
    pub fn shared_variables(&self) -> BTreeSet<&Variable> {
        // Validated non-empty at construction
        self.atoms[0].variables()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NamedNode, Term};

    fn pattern(s: &str, p: &str, o: Term) -> Triple {
        Triple::new(NamedNode::new(s), NamedNode::new(p), o)
    }

    #[test]
    fn test_rejects_empty_query() {
        let result = StarQuery::new("empty", vec![], vec![]);
        assert!(matches!(result, Err(HexastoreError::InvalidQuery(_))));
    }

    #[test]
    fn test_rejects_ground_pattern() {
        let atoms = vec![pattern("urn:s", "urn:p", NamedNode::new("urn:o").into())];
        let result = StarQuery::new("ground", atoms, vec![]);
        assert!(matches!(result, Err(HexastoreError::InvalidQuery(_))));
    }

    #[test]
    fn test_rejects_mismatched_variable_sets() {
        let x = Variable::new("x");
        let y = Variable::new("y");
        let atoms = vec![
            Triple::new(x.clone(), NamedNode::new("urn:p1"), NamedNode::new("urn:o1")),
            Triple::new(y.clone(), NamedNode::new("urn:p2"), NamedNode::new("urn:o2")),
        ];
        let result = StarQuery::new("mismatched", atoms, vec![x]);
        assert!(matches!(result, Err(HexastoreError::InvalidQuery(_))));
    }

    #[test]
    fn test_accepts_shared_central_variable() {
        let x = Variable::new("x");
        let atoms = vec![
            Triple::new(x.clone(), NamedNode::new("urn:p1"), NamedNode::new("urn:o1")),
            Triple::new(x.clone(), NamedNode::new("urn:p2"), NamedNode::new("urn:o2")),
        ];
        let query = StarQuery::new("star", atoms, vec![x.clone()]).unwrap();

        assert_eq!(query.atoms().len(), 2);
        assert_eq!(query.shared_variables(), BTreeSet::from([&x]));
        assert_eq!(query.answer_variables(), &[x]);
    }
}
