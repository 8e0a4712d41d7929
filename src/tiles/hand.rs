use crate::algorithm::catalog::Group;
use crate::io::configuration::{COPIES_PER_TILE, HAND_SIZE, TILE_KINDS, TILE_MAX, TILE_MIN};
use crate::io::error::{Result, invalid_hand};
use crate::tiles::mask::TileMask;
use std::fmt;

/// Multiset of tiles from one suit, stored as a count per value
///
/// No value is ever held more than four times. Every operation returns a
/// fresh hand rather than mutating, so search branches can share a parent
/// without undo bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    counts: [u8; TILE_KINDS],
}

/// Position of a tile value in a count table
pub fn tile_index(tile: u8) -> Option<usize> {
    (TILE_MIN..=TILE_MAX)
        .contains(&tile)
        .then(|| usize::from(tile - TILE_MIN))
}

impl Hand {
    /// Create a hand holding no tiles
    pub const fn empty() -> Self {
        Self {
            counts: [0; TILE_KINDS],
        }
    }

    /// Create the full wall: four copies of every value
    pub const fn wall() -> Self {
        Self {
            counts: [COPIES_PER_TILE; TILE_KINDS],
        }
    }

    /// Create a hand from per-value counts, index 0 holding value 1
    pub fn from_counts(counts: [u8; TILE_KINDS]) -> Option<Self> {
        counts
            .iter()
            .all(|&count| count <= COPIES_PER_TILE)
            .then_some(Self { counts })
    }

    /// Create a hand from tile values
    ///
    /// Returns `None` if a value is outside the suit or appears more than four times.
    pub fn from_tiles(tiles: impl IntoIterator<Item = u8>) -> Option<Self> {
        tiles
            .into_iter()
            .try_fold(Self::empty(), |hand, tile| hand.add(tile))
    }

    /// Parse a waiting hand from an input line
    ///
    /// Leading whitespace is skipped and only the first whitespace-delimited
    /// token is read. It must be exactly 13 digits in 1..=9.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing, contains anything other
    /// than the digits 1 to 9, has the wrong length, or holds a fifth copy
    /// of a value
    pub fn parse(line: &str) -> Result<Self> {
        let token = line
            .split_whitespace()
            .next()
            .ok_or_else(|| invalid_hand(&line, &"no tiles given"))?;

        let mut hand = Self::empty();
        for c in token.chars() {
            let tile = c
                .to_digit(10)
                .and_then(|digit| u8::try_from(digit).ok())
                .filter(|tile| tile_index(*tile).is_some())
                .ok_or_else(|| invalid_hand(&token, &format!("'{c}' is not a tile 1-9")))?;
            hand = hand
                .add(tile)
                .ok_or_else(|| invalid_hand(&token, &format!("more than four {tile}s")))?;
        }

        if hand.len() != HAND_SIZE {
            return Err(invalid_hand(
                &token,
                &format!("expected {HAND_SIZE} tiles, found {}", hand.len()),
            ));
        }

        Ok(hand)
    }

    /// Copies of a tile value held
    pub fn count(&self, tile: u8) -> u8 {
        tile_index(tile)
            .and_then(|index| self.counts.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Per-value counts, index 0 holding value 1
    pub const fn counts(&self) -> &[u8; TILE_KINDS] {
        &self.counts
    }

    /// Total number of tiles
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&count| usize::from(count)).sum()
    }

    /// Test if the hand holds no tiles
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Hand with one more copy of `tile`
    ///
    /// Returns `None` for a fifth copy or a value outside the suit.
    #[must_use]
    pub fn add(&self, tile: u8) -> Option<Self> {
        let mut next = *self;
        let count = next.counts.get_mut(tile_index(tile)?)?;
        if *count >= COPIES_PER_TILE {
            return None;
        }
        *count += 1;
        Some(next)
    }

    /// Hand with `n` copies of `tile` removed, if that many are held
    #[must_use]
    pub fn remove(&self, tile: u8, n: u8) -> Option<Self> {
        let mut next = *self;
        let count = next.counts.get_mut(tile_index(tile)?)?;
        *count = count.checked_sub(n)?;
        Some(next)
    }

    /// Hand with every member of `group` removed, if all are held
    #[must_use]
    pub fn take(&self, group: &Group) -> Option<Self> {
        group
            .members()
            .iter()
            .try_fold(*self, |hand, &tile| hand.remove(tile, 1))
    }

    /// Hand holding the tiles of both hands, if no value exceeds four copies
    #[must_use]
    pub fn merge(&self, other: &Self) -> Option<Self> {
        other.tiles().try_fold(*self, |hand, tile| hand.add(tile))
    }

    /// Smallest tile value held
    pub fn lowest(&self) -> Option<u8> {
        self.presence().first()
    }

    /// Set of values held at least once
    pub fn presence(&self) -> TileMask {
        TileMask::from_tiles((TILE_MIN..=TILE_MAX).filter(|&tile| self.count(tile) > 0))
    }

    /// Every tile in ascending order, repeated by count
    pub fn tiles(&self) -> impl Iterator<Item = u8> + '_ {
        (TILE_MIN..=TILE_MAX).flat_map(move |tile| {
            std::iter::repeat_n(tile, usize::from(self.count(tile)))
        })
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in self.tiles() {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}
