//! Tile constants and runtime configuration defaults

// Tile domain
/// Smallest tile value
pub const TILE_MIN: u8 = 1;
/// Largest tile value
pub const TILE_MAX: u8 = 9;
/// Number of distinct tile values in the suit
pub const TILE_KINDS: usize = 9;
/// Copies of each tile value in the wall
pub const COPIES_PER_TILE: u8 = 4;

/// Tiles in a waiting hand
pub const HAND_SIZE: usize = 13;
/// Tiles in a completed hand
pub const COMPLETE_HAND_SIZE: usize = 14;
/// Triples or runs in a completed hand (the pair is extra)
pub const SETS_PER_PARTITION: usize = 4;
/// Groups in a completed hand, pair included
pub const GROUPS_PER_PARTITION: usize = SETS_PER_PARTITION + 1;

// Every non-decreasing 13 digit sequence over 1..=9 with at most four of a digit
/// Number of distinct waiting hands in the suit
pub const TOTAL_HANDS: usize = 93_600;

// Output format
/// Line emitted for a hand that completes with no tile
pub const NO_WAIT_MARKER: &str = "(none)";
/// Terminates the digits on the header line of each block
pub const HEADER_SUFFIX: char = ':';

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
/// Hands solved between progress bar refreshes
pub const PROGRESS_REFRESH_INTERVAL: usize = 512;

// Default values for configurable parameters
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;
