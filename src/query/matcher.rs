//! Single-pattern matching over the six indexes
//!
//! The matcher is a state-free dispatcher over the eight bound/free
//! combinations of a triple pattern. Each shape maps to the one canonical
//! index whose first two key levels cover exactly the bound positions;
//! the remaining levels enumerate the free positions.
//!
//! Patterns that repeat a variable across positions are not validated:
//! within one substitution the later binding wins, which matches the
//! store's documented scope (degenerate atoms are the caller's problem).

use crate::model::{Substitution, Term, Triple};
use crate::store::dictionary::TermDictionary;
use crate::store::index::IndexSet;
use crate::store::IndexOrder;

/// The bound (`Lit`) / free (`Var`) shape of a pattern, in (s, p, o) order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternShape {
    LitLitLit,
    LitLitVar,
    LitVarLit,
    VarLitLit,
    LitVarVar,
    VarLitVar,
    VarVarLit,
    VarVarVar,
}

impl PatternShape {
    /// Classify a pattern by which positions are variables
    pub fn of(pattern: &Triple) -> PatternShape {
        match (
            pattern.subject().is_variable(),
            pattern.predicate().is_variable(),
            pattern.object().is_variable(),
        ) {
            (false, false, false) => PatternShape::LitLitLit,
            (false, false, true) => PatternShape::LitLitVar,
            (false, true, false) => PatternShape::LitVarLit,
            (true, false, false) => PatternShape::VarLitLit,
            (false, true, true) => PatternShape::LitVarVar,
            (true, false, true) => PatternShape::VarLitVar,
            (true, true, false) => PatternShape::VarVarLit,
            (true, true, true) => PatternShape::VarVarVar,
        }
    }

    /// The canonical index answering this shape
    pub fn index_order(&self) -> IndexOrder {
        match self {
            PatternShape::LitLitLit => IndexOrder::Spo,
            PatternShape::LitLitVar => IndexOrder::Spo,
            PatternShape::LitVarLit => IndexOrder::Sop,
            PatternShape::VarLitLit => IndexOrder::Pos,
            PatternShape::LitVarVar => IndexOrder::Spo,
            PatternShape::VarLitVar => IndexOrder::Pso,
            PatternShape::VarVarLit => IndexOrder::Osp,
            PatternShape::VarVarVar => IndexOrder::Spo,
        }
    }
}

/// Decode an identifier that the indexes themselves produced
fn term(dict: &TermDictionary, id: u64) -> Term {
    dict.decode(id)
        .expect("identifier issued by this dictionary")
}

/// Bind one variable position
fn bind1(pattern_term: &Term, value: Term) -> Substitution {
    let mut sub = Substitution::new();
    if let Some(var) = pattern_term.as_variable() {
        sub.bind(var.clone(), value);
    }
    sub
}

/// Enumerate the substitutions matching `pattern` against the indexes
///
/// Bound terms unknown to the dictionary, or bound keys absent from the
/// selected index, produce an empty result; matching never errors and
/// never grows the dictionary.
pub(crate) fn match_pattern(
    indexes: &IndexSet,
    dict: &TermDictionary,
    pattern: &Triple,
) -> Vec<Substitution> {
    let shape = PatternShape::of(pattern);
    let index = indexes.index(shape.index_order());

    // Encode the bound positions without allocating; an unknown constant
    // cannot match anything.
    let encode = |t: &Term| -> Option<u64> {
        if t.is_variable() {
            Some(0) // placeholder, never used as a key
        } else {
            dict.try_encode(t)
        }
    };
    let (Some(s), Some(p), Some(o)) = (
        encode(pattern.subject()),
        encode(pattern.predicate()),
        encode(pattern.object()),
    ) else {
        return Vec::new();
    };

    match shape {
        PatternShape::LitLitLit => {
            if index.contains(s, p, o) {
                // Matched with no free variables
                vec![Substitution::new()]
            } else {
                Vec::new()
            }
        }
        PatternShape::LitLitVar => index
            .leaf(s, p)
            .into_iter()
            .flatten()
            .map(|&id| bind1(pattern.object(), term(dict, id)))
            .collect(),
        PatternShape::LitVarLit => index
            .leaf(s, o)
            .into_iter()
            .flatten()
            .map(|&id| bind1(pattern.predicate(), term(dict, id)))
            .collect(),
        PatternShape::VarLitLit => index
            .leaf(p, o)
            .into_iter()
            .flatten()
            .map(|&id| bind1(pattern.subject(), term(dict, id)))
            .collect(),
        PatternShape::LitVarVar => index
            .sub(s)
            .into_iter()
            .flat_map(|sub| sub.iter())
            .flat_map(|(&p_id, objects)| {
                objects.iter().map(move |&o_id| (p_id, o_id))
            })
            .map(|(p_id, o_id)| {
                let mut sub = Substitution::new();
                if let Some(var) = pattern.predicate().as_variable() {
                    sub.bind(var.clone(), term(dict, p_id));
                }
                if let Some(var) = pattern.object().as_variable() {
                    sub.bind(var.clone(), term(dict, o_id));
                }
                sub
            })
            .collect(),
        PatternShape::VarLitVar => index
            .sub(p)
            .into_iter()
            .flat_map(|sub| sub.iter())
            .flat_map(|(&s_id, objects)| {
                objects.iter().map(move |&o_id| (s_id, o_id))
            })
            .map(|(s_id, o_id)| {
                let mut sub = Substitution::new();
                if let Some(var) = pattern.subject().as_variable() {
                    sub.bind(var.clone(), term(dict, s_id));
                }
                if let Some(var) = pattern.object().as_variable() {
                    sub.bind(var.clone(), term(dict, o_id));
                }
                sub
            })
            .collect(),
        PatternShape::VarVarLit => index
            .sub(o)
            .into_iter()
            .flat_map(|sub| sub.iter())
            .flat_map(|(&s_id, predicates)| {
                predicates.iter().map(move |&p_id| (s_id, p_id))
            })
            .map(|(s_id, p_id)| {
                let mut sub = Substitution::new();
                if let Some(var) = pattern.subject().as_variable() {
                    sub.bind(var.clone(), term(dict, s_id));
                }
                if let Some(var) = pattern.predicate().as_variable() {
                    sub.bind(var.clone(), term(dict, p_id));
                }
                sub
            })
            .collect(),
        PatternShape::VarVarVar => indexes
            .iter_spo()
            .map(|(s_id, p_id, o_id)| {
                let mut sub = Substitution::new();
                if let Some(var) = pattern.subject().as_variable() {
                    sub.bind(var.clone(), term(dict, s_id));
                }
                if let Some(var) = pattern.predicate().as_variable() {
                    sub.bind(var.clone(), term(dict, p_id));
                }
                if let Some(var) = pattern.object().as_variable() {
                    sub.bind(var.clone(), term(dict, o_id));
                }
                sub
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NamedNode, Variable};

    fn pattern(s: Term, p: Term, o: Term) -> Triple {
        Triple::new(s, p, o)
    }

    #[test]
    fn test_shape_classification() {
        let lit: Term = NamedNode::new("urn:a").into();
        let var: Term = Variable::new("x").into();

        let cases = [
            (pattern(lit.clone(), lit.clone(), lit.clone()), PatternShape::LitLitLit),
            (pattern(lit.clone(), lit.clone(), var.clone()), PatternShape::LitLitVar),
            (pattern(lit.clone(), var.clone(), lit.clone()), PatternShape::LitVarLit),
            (pattern(var.clone(), lit.clone(), lit.clone()), PatternShape::VarLitLit),
            (pattern(lit.clone(), var.clone(), var.clone()), PatternShape::LitVarVar),
            (pattern(var.clone(), lit.clone(), var.clone()), PatternShape::VarLitVar),
            (pattern(var.clone(), var.clone(), lit.clone()), PatternShape::VarVarLit),
            (pattern(var.clone(), var.clone(), var.clone()), PatternShape::VarVarVar),
        ];
        for (p, expected) in cases {
            assert_eq!(PatternShape::of(&p), expected);
        }
    }

    #[test]
    fn test_canonical_index_per_shape() {
        assert_eq!(PatternShape::LitLitLit.index_order(), IndexOrder::Spo);
        assert_eq!(PatternShape::LitLitVar.index_order(), IndexOrder::Spo);
        assert_eq!(PatternShape::LitVarLit.index_order(), IndexOrder::Sop);
        assert_eq!(PatternShape::VarLitLit.index_order(), IndexOrder::Pos);
        assert_eq!(PatternShape::LitVarVar.index_order(), IndexOrder::Spo);
        assert_eq!(PatternShape::VarLitVar.index_order(), IndexOrder::Pso);
        assert_eq!(PatternShape::VarVarLit.index_order(), IndexOrder::Osp);
        assert_eq!(PatternShape::VarVarVar.index_order(), IndexOrder::Spo);
    }
}
