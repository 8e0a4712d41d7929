use crate::algorithm::catalog::{Catalog, Group};
use crate::io::configuration::{SETS_PER_PARTITION, TILE_MAX, TILE_MIN};
use crate::tiles::hand::Hand;

/// A completed hand split into one pair and four triples or runs
///
/// Sets are kept in the order the search found them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partition {
    pair: &'static Group,
    sets: [&'static Group; SETS_PER_PARTITION],
}

impl Partition {
    /// The pair
    pub const fn pair(&self) -> &'static Group {
        self.pair
    }

    /// The four triples or runs in discovery order
    pub const fn sets(&self) -> &[&'static Group; SETS_PER_PARTITION] {
        &self.sets
    }

    /// All five groups, pair first
    pub fn groups(&self) -> impl Iterator<Item = &'static Group> + '_ {
        std::iter::once(self.pair).chain(self.sets.iter().copied())
    }

    /// Group in slot `slot`, slot 0 being the pair
    pub fn group(&self, slot: usize) -> Option<&'static Group> {
        self.groups().nth(slot)
    }

    /// Union of every member of every group
    ///
    /// Returns `None` if the groups would need a fifth copy of a value.
    pub fn tiles(&self) -> Option<Hand> {
        Hand::from_tiles(self.groups().flat_map(|group| group.members().iter().copied()))
    }
}

/// Partial decomposition carried down the search
#[derive(Clone, Copy)]
struct Branch {
    pair: &'static Group,
    sets: [Option<&'static Group>; SETS_PER_PARTITION],
    depth: usize,
    remaining: Hand,
}

impl Branch {
    const fn new(pair: &'static Group, remaining: Hand) -> Self {
        Self {
            pair,
            sets: [None; SETS_PER_PARTITION],
            depth: 0,
            remaining,
        }
    }

    fn with(&self, group: &'static Group, remaining: Hand) -> Option<Self> {
        let mut next = *self;
        *next.sets.get_mut(self.depth)? = Some(group);
        next.depth += 1;
        next.remaining = remaining;
        Some(next)
    }

    fn complete(&self) -> Option<Partition> {
        if !self.remaining.is_empty() {
            return None;
        }
        let [Some(a), Some(b), Some(c), Some(d)] = self.sets else {
            return None;
        };
        Some(Partition {
            pair: self.pair,
            sets: [a, b, c, d],
        })
    }
}

/// Find every way to split a completed hand into a pair and four sets
///
/// Each pair value with at least two copies is tried in ascending order.
/// The remaining tiles are then consumed lowest value first: that value must
/// start either a triple (tried first) or a run, and both are explored.
/// A hand that cannot be split, including one that does not hold exactly 14
/// tiles, yields no partitions.
pub fn find_partitions(hand: &Hand) -> Vec<Partition> {
    let catalog = Catalog::global();
    let mut partitions = Vec::new();

    for tile in TILE_MIN..=TILE_MAX {
        let (Some(pair), Some(remaining)) = (catalog.pair(tile), hand.remove(tile, 2)) else {
            continue;
        };
        collect_sets(catalog, Branch::new(pair, remaining), &mut partitions);
    }

    partitions
}

fn collect_sets(catalog: &'static Catalog, branch: Branch, partitions: &mut Vec<Partition>) {
    let Some(lowest) = branch.remaining.lowest() else {
        partitions.extend(branch.complete());
        return;
    };

    if branch.depth >= SETS_PER_PARTITION {
        return;
    }

    let candidates = [catalog.triple(lowest), catalog.run(lowest)];
    for group in candidates.into_iter().flatten() {
        let next = branch
            .remaining
            .take(group)
            .and_then(|remaining| branch.with(group, remaining));
        if let Some(next) = next {
            collect_sets(catalog, next, partitions);
        }
    }
}
