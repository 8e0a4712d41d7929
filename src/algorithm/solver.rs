use crate::algorithm::canonical::{MarkedPartition, RenderCache, SeenKeys};
use crate::algorithm::decomposition::find_partitions;
use crate::io::configuration::{HEADER_SUFFIX, NO_WAIT_MARKER, TILE_MAX, TILE_MIN};
use crate::tiles::hand::Hand;
use crate::tiles::mask::TileMask;

/// Every distinct wait of one waiting hand
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    hand: Hand,
    lines: Vec<String>,
    completions: TileMask,
}

impl Solution {
    /// Hand that was solved
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Rendered waits in discovery order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Tiles that complete the hand
    pub const fn completions(&self) -> TileMask {
        self.completions
    }

    /// Test whether no tile completes the hand
    pub fn is_none(&self) -> bool {
        self.lines.is_empty()
    }

    /// Output block: the hand digits and a colon, then one line per wait
    ///
    /// A hand with no wait gets the single line `(none)`.
    pub fn block(&self) -> String {
        let mut block = String::with_capacity(16 + 24 * self.lines.len().max(1));
        block.push_str(&self.hand.to_string());
        block.push(HEADER_SUFFIX);
        block.push('\n');
        if self.lines.is_empty() {
            block.push_str(NO_WAIT_MARKER);
            block.push('\n');
        }
        for line in &self.lines {
            block.push_str(line);
            block.push('\n');
        }
        block
    }
}

/// Solves waiting hands one at a time, reusing rendered text across hands
#[derive(Default)]
pub struct Solver {
    cache: RenderCache,
    seen: SeenKeys,
}

impl Solver {
    /// Create a solver with an empty render cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Render cache statistics so far
    pub const fn cache(&self) -> &RenderCache {
        &self.cache
    }

    /// Find every distinct wait of a 13-tile hand
    ///
    /// Each tile 1..=9 is tried as the completion unless it would be a fifth
    /// copy. Every partition of the completed hand is then read once per group
    /// holding the completion, that group shown open. A wait is kept the first
    /// time its key appears for this hand, whichever completion produced it.
    pub fn solve(&mut self, hand: &Hand) -> Solution {
        self.seen.clear();
        let mut lines = Vec::new();
        let mut completions = TileMask::new();

        for completion in TILE_MIN..=TILE_MAX {
            let Some(complete) = hand.add(completion) else {
                continue;
            };

            for partition in find_partitions(&complete) {
                completions.insert(completion);
                for (slot, group) in partition.groups().enumerate() {
                    if !group.contains(completion) {
                        continue;
                    }
                    let Some(marked) = MarkedPartition::new(&partition, slot, completion) else {
                        continue;
                    };
                    let key = marked.key();
                    if self.seen.insert(key) {
                        let text = self.cache.get_or_render(key, || marked.render());
                        lines.push(text.to_owned());
                    }
                }
            }
        }

        Solution {
            hand: *hand,
            lines,
            completions,
        }
    }
}
