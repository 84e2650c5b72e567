//! The six index permutations over encoded triples
//!
//! Each index is a two-level nested map keyed by an ordered pair of triple
//! positions, with the third position's identifiers as a leaf set. A
//! pattern whose bound positions match an index's first two key levels can
//! be answered with O(1)-amortized lookups; the leaf (or the remaining
//! levels) enumerates the free positions.

use std::collections::{HashMap, HashSet};

/// One of the six (first, second, third) orderings of (s, p, o)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexOrder {
    Spo,
    Sop,
    Pso,
    Pos,
    Osp,
    Ops,
}

impl IndexOrder {
    /// All six permutations
    pub const ALL: [IndexOrder; 6] = [
        IndexOrder::Spo,
        IndexOrder::Sop,
        IndexOrder::Pso,
        IndexOrder::Pos,
        IndexOrder::Osp,
        IndexOrder::Ops,
    ];

    /// Permute an encoded (s, p, o) triple into this index's key order
    pub fn key(&self, s: u64, p: u64, o: u64) -> (u64, u64, u64) {
        match self {
            IndexOrder::Spo => (s, p, o),
            IndexOrder::Sop => (s, o, p),
            IndexOrder::Pso => (p, s, o),
            IndexOrder::Pos => (p, o, s),
            IndexOrder::Osp => (o, s, p),
            IndexOrder::Ops => (o, p, s),
        }
    }

    /// Recover the encoded (s, p, o) triple from this index's key order
    pub fn spo(&self, a: u64, b: u64, c: u64) -> (u64, u64, u64) {
        match self {
            IndexOrder::Spo => (a, b, c),
            IndexOrder::Sop => (a, c, b),
            IndexOrder::Pso => (b, a, c),
            IndexOrder::Pos => (c, a, b),
            IndexOrder::Osp => (b, c, a),
            IndexOrder::Ops => (c, b, a),
        }
    }
}

/// One two-level index: first key -> second key -> set of third values
#[derive(Debug, Default)]
pub struct TripleIndex {
    map: HashMap<u64, HashMap<u64, HashSet<u64>>>,
}

impl TripleIndex {
    fn new() -> Self {
        TripleIndex {
            map: HashMap::new(),
        }
    }

    /// Insert a permuted triple; returns true if the leaf entry was new
    fn insert(&mut self, a: u64, b: u64, c: u64) -> bool {
        self.map.entry(a).or_default().entry(b).or_default().insert(c)
    }

    /// Leaf set under the (first, second) key pair
    pub fn leaf(&self, a: u64, b: u64) -> Option<&HashSet<u64>> {
        self.map.get(&a)?.get(&b)
    }

    /// Second-level map under the first key
    pub fn sub(&self, a: u64) -> Option<&HashMap<u64, HashSet<u64>>> {
        self.map.get(&a)
    }

    /// Membership test for a fully-bound permuted triple
    pub fn contains(&self, a: u64, b: u64, c: u64) -> bool {
        self.leaf(a, b).is_some_and(|set| set.contains(&c))
    }

    /// Iterate every (first, second, third) entry in this index
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64, u64)> + '_ {
        self.map.iter().flat_map(|(&a, sub)| {
            sub.iter()
                .flat_map(move |(&b, leaf)| leaf.iter().map(move |&c| (a, b, c)))
        })
    }
}

/// The six mutually-consistent indexes plus the triple count
///
/// The whole set lives behind one lock in [`HexaStore`], so a triple is
/// always visible in either all six indexes or none, and `len` always
/// agrees with the index contents at a serialization point.
///
/// [`HexaStore`]: crate::store::HexaStore
#[derive(Debug, Default)]
pub struct IndexSet {
    spo: TripleIndex,
    sop: TripleIndex,
    pso: TripleIndex,
    pos: TripleIndex,
    osp: TripleIndex,
    ops: TripleIndex,
    len: u64,
}

impl IndexSet {
    pub fn new() -> Self {
        IndexSet {
            spo: TripleIndex::new(),
            sop: TripleIndex::new(),
            pso: TripleIndex::new(),
            pos: TripleIndex::new(),
            osp: TripleIndex::new(),
            ops: TripleIndex::new(),
            len: 0,
        }
    }

    fn index_mut(&mut self, order: IndexOrder) -> &mut TripleIndex {
        match order {
            IndexOrder::Spo => &mut self.spo,
            IndexOrder::Sop => &mut self.sop,
            IndexOrder::Pso => &mut self.pso,
            IndexOrder::Pos => &mut self.pos,
            IndexOrder::Osp => &mut self.osp,
            IndexOrder::Ops => &mut self.ops,
        }
    }

    /// Borrow the index with the given ordering
    pub fn index(&self, order: IndexOrder) -> &TripleIndex {
        match order {
            IndexOrder::Spo => &self.spo,
            IndexOrder::Sop => &self.sop,
            IndexOrder::Pso => &self.pso,
            IndexOrder::Pos => &self.pos,
            IndexOrder::Osp => &self.osp,
            IndexOrder::Ops => &self.ops,
        }
    }

    /// Insert an encoded triple into all six indexes as one unit
    ///
    /// Returns true if the triple was new. Newness is decided by the
    /// canonical SPO index; the remaining five insertions cannot fail, so
    /// no partial state is reachable.
    pub fn insert(&mut self, s: u64, p: u64, o: u64) -> bool {
        let is_new = self.spo.insert(s, p, o);
        if is_new {
            for order in IndexOrder::ALL {
                if order == IndexOrder::Spo {
                    continue;
                }
                let (a, b, c) = order.key(s, p, o);
                let inserted = self.index_mut(order).insert(a, b, c);
                debug_assert!(inserted, "indexes out of sync for {order:?}");
            }
            self.len += 1;
        }
        is_new
    }

    /// Membership test for an encoded triple (canonical SPO index)
    pub fn contains(&self, s: u64, p: u64, o: u64) -> bool {
        self.spo.contains(s, p, o)
    }

    /// Number of distinct triples, maintained as an O(1) counter
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate every encoded triple exactly once, via SPO only
    pub fn iter_spo(&self) -> impl Iterator<Item = (u64, u64, u64)> + '_ {
        self.spo.iter()
    }

    /// Cheap cardinality proxy: size of the OPS leaf for (object, predicate)
    pub fn estimate(&self, o: u64, p: u64) -> usize {
        self.ops.leaf(o, p).map_or(0, HashSet::len)
    }
}
