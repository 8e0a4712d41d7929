use crate::io::configuration::{TILE_KINDS, TILE_MAX, TILE_MIN};
use bitvec::prelude::*;
use std::fmt;

type Bits = BitArray<[u16; 1], Lsb0>;

/// Fixed-size presence set over the tile values of one suit
///
/// Uses tile values 1..=9 directly, storing value `v` at bit `v - 1`.
/// Values outside the suit are never members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileMask {
    bits: Bits,
}

impl TileMask {
    /// Create a mask with no tiles present
    pub fn new() -> Self {
        Self {
            bits: BitArray::new([0]),
        }
    }

    /// Create a mask containing every tile value
    pub fn all() -> Self {
        let mut mask = Self::new();
        for tile in TILE_MIN..=TILE_MAX {
            mask.insert(tile);
        }
        mask
    }

    /// Create a mask from tile values, ignoring any outside the suit
    pub fn from_tiles(tiles: impl IntoIterator<Item = u8>) -> Self {
        let mut mask = Self::new();
        for tile in tiles {
            mask.insert(tile);
        }
        mask
    }

    /// Insert a tile value
    pub fn insert(&mut self, tile: u8) {
        if let Some(index) = bit_index(tile) {
            self.bits.set(index, true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: u8) -> bool {
        bit_index(tile).is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test whether `start`, `start + 1` and `start + 2` are all present
    pub fn contains_run(&self, start: u8) -> bool {
        (0..3).all(|step| self.contains(start.saturating_add(step)))
    }

    /// Smallest tile value present
    pub fn first(&self) -> Option<u8> {
        self.bits.first_one().map(tile_value)
    }

    /// Create a new mask containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = *self;
        for index in other.bits.iter_zeros() {
            result.bits.set(index, false);
        }
        result
    }

    /// Create a new mask containing the union
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = *self;
        for index in other.bits.iter_ones() {
            result.bits.set(index, true);
        }
        result
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tile values in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all tile values in ascending order
    pub fn to_vec(&self) -> Vec<u8> {
        self.bits.iter_ones().map(tile_value).collect()
    }
}

fn bit_index(tile: u8) -> Option<usize> {
    (TILE_MIN..=TILE_MAX)
        .contains(&tile)
        .then(|| usize::from(tile - TILE_MIN))
}

// Bits past the suit are never set, so the index always fits
fn tile_value(index: usize) -> u8 {
    debug_assert!(index < TILE_KINDS);
    index as u8 + TILE_MIN
}

impl fmt::Display for TileMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in self.to_vec() {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}
