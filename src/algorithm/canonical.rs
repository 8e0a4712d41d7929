use crate::algorithm::catalog::{CODE_BITS, Group};
use crate::algorithm::decomposition::Partition;
use crate::io::configuration::GROUPS_PER_PARTITION;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// One group of a partition with its open/closed assignment resolved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MarkedGroup {
    group: &'static Group,
    code: u16,
    open: bool,
}

/// A partition read as a wait: one group is open on the completing tile
///
/// Groups are held in ascending code order, which is also the display
/// order: closed sets, then the closed pair, then the open group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkedPartition {
    groups: [MarkedGroup; GROUPS_PER_PARTITION],
    completion: u8,
}

impl MarkedPartition {
    /// Mark the group in `open_slot` (slot 0 being the pair) as open on `completion`
    ///
    /// Returns `None` if the slot does not exist or its group does not hold `completion`.
    pub fn new(partition: &Partition, open_slot: usize, completion: u8) -> Option<Self> {
        let open_code = partition.group(open_slot)?.open_code(completion)?;

        let mut groups = [MarkedGroup {
            group: partition.pair(),
            code: partition.pair().code(),
            open: false,
        }; GROUPS_PER_PARTITION];

        for ((slot, group), marked) in partition.groups().enumerate().zip(groups.iter_mut()) {
            let open = slot == open_slot;
            *marked = MarkedGroup {
                group,
                code: if open { open_code } else { group.code() },
                open,
            };
        }
        groups.sort_by_key(|marked| marked.code);

        Some(Self { groups, completion })
    }

    /// Tile assumed to complete the hand
    pub const fn completion(&self) -> u8 {
        self.completion
    }

    /// Group rendered open
    pub fn open_group(&self) -> Option<&'static Group> {
        self.groups
            .iter()
            .find(|marked| marked.open)
            .map(|marked| marked.group)
    }

    /// Order-independent identity of this wait
    pub fn key(&self) -> CanonicalKey {
        CanonicalKey::from_codes(self.groups.iter().map(|marked| marked.code))
    }

    /// Text form, such as `(111)(222)(888)(99)[45]`
    pub fn render(&self) -> String {
        let mut text = String::with_capacity(24);
        for marked in &self.groups {
            let part = if marked.open {
                marked.group.open(self.completion)
            } else {
                Some(marked.group.closed())
            };
            text.push_str(part.unwrap_or_default());
        }
        text
    }
}

/// Comparable signature of a wait, blind to the order groups were found in
///
/// Five 12-bit group codes sorted descending and concatenated. Equal keys
/// mean equal rendered text and the converse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(u64);

impl CanonicalKey {
    /// Build a key from group codes in any order
    pub fn from_codes(codes: impl IntoIterator<Item = u16>) -> Self {
        let mut sorted: Vec<u16> = codes.into_iter().collect();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        Self(
            sorted
                .iter()
                .fold(0, |key, &code| (key << CODE_BITS) | u64::from(code)),
        )
    }

    /// Raw packed value
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Keys already emitted for the hand being solved
#[derive(Default, Debug)]
pub struct SeenKeys {
    keys: HashSet<CanonicalKey>,
}

impl SeenKeys {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key`, returning `true` the first time it is seen
    pub fn insert(&mut self, key: CanonicalKey) -> bool {
        self.keys.insert(key)
    }

    /// Number of distinct keys recorded
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Test if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Forget every key, ready for the next hand
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Memoization of rendered text across hands
///
/// Different hands often share the same decomposition; the text is built
/// once per key and reused. Owned by a single worker.
#[derive(Default)]
pub struct RenderCache {
    /// Key to rendered text mapping
    rendered: HashMap<CanonicalKey, String>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl RenderCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve cached text or render and store it
    ///
    /// Uses the provided closure to render only when the key is not
    /// already cached.
    pub fn get_or_render<F>(&mut self, key: CanonicalKey, render_fn: F) -> &str
    where
        F: FnOnce() -> String,
    {
        match self.rendered.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(render_fn())
            }
        }
    }

    /// Number of distinct texts held
    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    /// Test if nothing has been rendered yet
    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}
