/// Command-line parsing and mode orchestration
pub mod cli;
/// Order-insensitive comparison of enumeration logs
pub mod compare;
/// Tile constants and runtime defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// Buffered block output to stdout or a file
pub mod output;
/// Shared progress bar over the hand space
pub mod progress;
