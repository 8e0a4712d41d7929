//! Tests for seeded random hand generation

#[cfg(test)]
mod tests {
    use chinitsu::algorithm::decomposition::find_partitions;
    use chinitsu::tiles::sample::HandSampler;

    // Tests the same seed gives the same hands
    // Verified by seeding from entropy
    #[test]
    fn test_deterministic_for_seed() {
        let mut first = HandSampler::new(7);
        let mut second = HandSampler::new(7);

        for _ in 0..20 {
            assert_eq!(first.random_hand(), second.random_hand());
            assert_eq!(first.complete_hand(), second.complete_hand());
        }
    }

    // Tests random waiting hands hold 13 tiles
    // Verified by drawing 14 tiles from the wall
    #[test]
    fn test_random_hand_size() {
        let mut sampler = HandSampler::new(1);
        for _ in 0..100 {
            let hand = sampler.random_hand();
            assert_eq!(hand.len(), 13);
            assert!(hand.counts().iter().all(|&count| count <= 4));
        }
    }

    // Tests random complete hands really split into a pair and four sets
    // Verified by drawing five sets and no pair
    #[test]
    fn test_complete_hand_is_complete() {
        let mut sampler = HandSampler::new(2);
        for _ in 0..100 {
            let hand = sampler.complete_hand();
            assert_eq!(hand.len(), 14);
            assert!(!find_partitions(&hand).is_empty(), "{hand} is not complete");
        }
    }
}
