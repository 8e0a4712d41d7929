//! Packed representation of waiting hands and their lexicographic successor

use crate::io::configuration::{COPIES_PER_TILE, HAND_SIZE, TILE_MAX, TILE_MIN};
use crate::io::error::{Result, invalid_hand};
use crate::tiles::hand::Hand;
use std::fmt;

const BITS_PER_DIGIT: usize = 4;
const DIGIT_MASK: u64 = 0xf;

/// A waiting hand as 13 non-decreasing digits, one per nibble
///
/// The first (most significant) digit sits in the highest nibble, so numeric
/// order of the packed value is lexicographic order of the digit sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedHand(u64);

impl PackedHand {
    /// Lexicographically smallest hand, `1111222233334`
    pub fn first() -> Self {
        let mut digits = [TILE_MIN; HAND_SIZE];
        fill_minimal(&mut digits, 0, TILE_MIN);
        Self::pack(&digits)
    }

    /// Pack digits, validating order, range and the four-copy bound
    ///
    /// # Errors
    ///
    /// Returns an error if the digits decrease anywhere, leave the suit,
    /// or repeat a value more than four times
    pub fn from_digits(digits: &[u8; HAND_SIZE]) -> Result<Self> {
        let text: String = digits
            .iter()
            .map(|&digit| char::from_digit(u32::from(digit), 10).unwrap_or('?'))
            .collect();

        if digits.iter().any(|digit| !(TILE_MIN..=TILE_MAX).contains(digit)) {
            return Err(invalid_hand(&text, &"digits must be tiles 1-9"));
        }
        if digits.windows(2).any(|pair| pair.first() > pair.get(1)) {
            return Err(invalid_hand(&text, &"digits must be non-decreasing"));
        }
        if Hand::from_tiles(digits.iter().copied()).is_none() {
            return Err(invalid_hand(&text, &"more than four copies of a tile"));
        }

        Ok(Self::pack(digits))
    }

    /// Raw packed value
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Unpack into digits, most significant first
    pub fn digits(self) -> [u8; HAND_SIZE] {
        let mut digits = [0; HAND_SIZE];
        for (position, digit) in digits.iter_mut().enumerate() {
            let shift = (HAND_SIZE - 1 - position) * BITS_PER_DIGIT;
            *digit = ((self.0 >> shift) & DIGIT_MASK) as u8;
        }
        digits
    }

    /// Count table of the packed hand
    pub fn hand(self) -> Hand {
        Hand::from_tiles(self.digits()).unwrap_or_default()
    }

    /// Lexicographically next hand, or `None` once the space is exhausted
    ///
    /// Odometer with bounded digits: the rightmost digit that can grow is
    /// raised by one and everything to its right is reset to the smallest
    /// continuation, four copies of each value in turn.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn next(self) -> Option<Self> {
        let mut digits = self.digits();

        for position in (0..HAND_SIZE).rev() {
            let Some(&current) = digits.get(position) else {
                continue;
            };
            // Digits to the left never exceed `current`, so the raised value starts with zero copies
            let raised = current + 1;
            if raised > TILE_MAX {
                continue;
            }

            let remaining = HAND_SIZE - position;
            let capacity = usize::from(COPIES_PER_TILE) * usize::from(TILE_MAX + 1 - raised);
            if remaining > capacity {
                continue;
            }

            fill_minimal(&mut digits, position, raised);
            return Some(Self::pack(&digits));
        }

        None
    }

    fn pack(digits: &[u8; HAND_SIZE]) -> Self {
        Self(
            digits
                .iter()
                .fold(0, |packed, &digit| (packed << BITS_PER_DIGIT) | u64::from(digit)),
        )
    }
}

// Caller guarantees the fill never passes TILE_MAX
fn fill_minimal(digits: &mut [u8; HAND_SIZE], position: usize, value: u8) {
    for (offset, digit) in digits.iter_mut().skip(position).enumerate() {
        *digit = value + (offset / usize::from(COPIES_PER_TILE)) as u8;
    }
}

impl fmt::Display for PackedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:013x}", self.0)
    }
}

/// Ordered walk over every waiting hand
#[derive(Clone, Debug)]
pub struct HandSequence {
    next: Option<PackedHand>,
}

impl Iterator for HandSequence {
    type Item = PackedHand;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }
}

/// Iterate every waiting hand in strictly increasing lexicographic order
pub fn hands() -> HandSequence {
    HandSequence {
        next: Some(PackedHand::first()),
    }
}
