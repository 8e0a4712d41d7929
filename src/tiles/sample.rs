//! Seeded random hands for spot checks outside the full enumeration

use crate::algorithm::catalog::{Catalog, Group};
use crate::io::configuration::{HAND_SIZE, SETS_PER_PARTITION, TILE_MAX, TILE_MIN};
use crate::tiles::hand::Hand;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Deterministic source of random hands
pub struct HandSampler {
    rng: StdRng,
}

impl HandSampler {
    /// Create a sampler whose sequence depends only on `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw 13 tiles uniformly from a full wall of 36
    pub fn random_hand(&mut self) -> Hand {
        let mut wall: Vec<u8> = Hand::wall().tiles().collect();
        wall.shuffle(&mut self.rng);
        Hand::from_tiles(wall.into_iter().take(HAND_SIZE)).unwrap_or_default()
    }

    /// Build a complete 14-tile hand from four random sets and a random pair
    ///
    /// Only groups that fit under the four-copy bound are drawn. Twelve tiles
    /// over nine values always leave room for another set, and for a pair.
    pub fn complete_hand(&mut self) -> Hand {
        let catalog = Catalog::global();

        let mut hand = Hand::empty();
        for _ in 0..SETS_PER_PARTITION {
            hand = self.add_random_group(hand, catalog.sets());
        }
        self.add_random_group(
            hand,
            (TILE_MIN..=TILE_MAX).filter_map(|tile| catalog.pair(tile)),
        )
    }

    fn add_random_group(
        &mut self,
        hand: Hand,
        groups: impl Iterator<Item = &'static Group>,
    ) -> Hand {
        let options: Vec<Hand> = groups
            .filter_map(|group| {
                Hand::from_tiles(group.members().iter().copied())
                    .and_then(|members| hand.merge(&members))
            })
            .collect();
        if options.is_empty() {
            return hand;
        }
        let choice = self.rng.random_range(0..options.len());
        options.get(choice).copied().unwrap_or(hand)
    }
}
