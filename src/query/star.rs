//! Star-join evaluation by substitution intersection
//!
//! A star query's patterns all bind the same variable set (enforced at
//! construction), so joining them reduces to keeping exactly the driver
//! substitutions that every other pattern also produces. The driver is
//! the pattern with the smallest estimated cardinality, measured as the
//! size of the OPS bucket for its (object, predicate) pair.

use crate::model::{StarQuery, Substitution};
use crate::store::HexaStore;
use tracing::debug;

/// Evaluate a star query against the store
pub(crate) fn evaluate(store: &HexaStore, query: &StarQuery) -> Vec<Substitution> {
    // Pick the driver: smallest OPS estimate, ties broken by atom order.
    let mut driver_idx = 0;
    let mut driver_estimate = usize::MAX;
    for (idx, atom) in query.atoms().iter().enumerate() {
        let estimate = store.estimate_matches(atom);
        if estimate < driver_estimate {
            driver_estimate = estimate;
            driver_idx = idx;
        }
    }
    debug!(
        label = query.label(),
        driver = %query.atoms()[driver_idx],
        estimate = driver_estimate,
        "selected star-join driver"
    );

    // Materialize every other pattern's substitutions once; an empty set
    // anywhere empties the whole result.
    let mut others: Vec<Vec<Substitution>> = Vec::with_capacity(query.atoms().len() - 1);
    for (idx, atom) in query.atoms().iter().enumerate() {
        if idx == driver_idx {
            continue;
        }
        let subs: Vec<Substitution> = store.match_pattern(atom).collect();
        if subs.is_empty() {
            return Vec::new();
        }
        others.push(subs);
    }

    store
        .match_pattern(&query.atoms()[driver_idx])
        .filter(|sub| others.iter().all(|subs| subs.contains(sub)))
        .collect()
}
