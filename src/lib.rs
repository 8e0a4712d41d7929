//! Exhaustive wait enumeration for single-suit 13-tile hands
//!
//! Every hand of one suit (values 1 to 9, at most four copies each) is
//! walked in lexicographic order. For each, every tile that completes it is
//! found together with every distinct split of the completed hand into a
//! pair and four triples or runs.

#![forbid(unsafe_code)]

/// Group catalog, decomposition search, deduplication and enumeration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Hand representations, ordered codec and sampling
pub mod tiles;

pub use io::error::{Result, SolverError};
