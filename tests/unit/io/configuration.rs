//! Tests for tile constants and defaults

#[cfg(test)]
mod tests {
    use chinitsu::io::configuration::{
        COMPLETE_HAND_SIZE, COPIES_PER_TILE, DEFAULT_SEED, GROUPS_PER_PARTITION, HAND_SIZE,
        HEADER_SUFFIX, NO_WAIT_MARKER, PROGRESS_REFRESH_INTERVAL, SETS_PER_PARTITION,
        TILE_KINDS, TILE_MAX, TILE_MIN, TOTAL_HANDS,
    };

    // Tests the suit spans nine values with four copies each
    // Verified by changing the largest tile value
    #[test]
    fn test_suit_shape() {
        assert_eq!(usize::from(TILE_MAX - TILE_MIN + 1), TILE_KINDS);
        assert_eq!(COPIES_PER_TILE, 4);
    }

    // Tests hand sizes agree with the group structure
    // Verified by changing the number of sets
    #[test]
    fn test_hand_sizes() {
        assert_eq!(COMPLETE_HAND_SIZE, HAND_SIZE + 1);
        assert_eq!(COMPLETE_HAND_SIZE, 2 + 3 * SETS_PER_PARTITION);
        assert_eq!(GROUPS_PER_PARTITION, 5);
        assert_eq!(TOTAL_HANDS, 93_600);
    }

    // Tests output markers and defaults
    // Verified by changing the no-wait marker
    #[test]
    fn test_output_format_and_defaults() {
        assert_eq!(NO_WAIT_MARKER, "(none)");
        assert_eq!(HEADER_SUFFIX, ':');
        assert_eq!(DEFAULT_SEED, 42);
        assert!(PROGRESS_REFRESH_INTERVAL > 0);
    }
}
