/// Canonical keys, per-hand deduplication and the render cache
pub mod canonical;
/// Interned pairs, triples and runs with their text forms
pub mod catalog;
/// Backtracking split of a complete hand into a pair and four sets
pub mod decomposition;
/// Whole-space enumeration split across workers
pub mod driver;
/// Known hands checked before enumeration
pub mod selfcheck;
/// Waits of a single hand
pub mod solver;
/// Independent validation of rendered waits
pub mod verify;
