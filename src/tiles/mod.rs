/// Packed 13-digit hands and their ordered successor
pub mod codec;
/// Per-value tile counts with copy-on-branch updates
pub mod hand;
/// Bit-packed presence set over the nine tile values
pub mod mask;
/// Seeded random waiting and complete hands
pub mod sample;
