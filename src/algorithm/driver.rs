//! Enumeration of the whole hand space, split across workers by stride

use crate::algorithm::solver::Solver;
use crate::io::configuration::{PROGRESS_REFRESH_INTERVAL, TOTAL_HANDS};
use crate::io::error::{Result, SolverError};
use crate::io::progress::ProgressTracker;
use crate::tiles::codec::hands;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

/// Parameters of one enumeration run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Number of independent workers, at least one
    pub workers: usize,
    /// Restrict the run to the first `limit` hands of the ordered space
    pub limit: Option<usize>,
}

impl EnumerationConfig {
    /// Single worker over every hand
    pub const fn sequential() -> Self {
        Self {
            workers: 1,
            limit: None,
        }
    }

    /// Number of hands the run covers
    pub fn hand_count(&self) -> usize {
        self.limit.map_or(TOTAL_HANDS, |limit| limit.min(TOTAL_HANDS))
    }
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self::sequential()
    }
}

/// Blocks of every hand owned by worker `offset` of `count`, in order
///
/// Hand `i` of the ordered space belongs to worker `i mod count`. A count of
/// zero is treated as one.
pub fn enumerate_all(offset: usize, count: usize) -> Vec<String> {
    enumerate_strided(offset, count, None, &ProgressTracker::hidden())
}

/// Same as [`enumerate_all`] over the first `limit` hands only, reporting progress
pub fn enumerate_strided(
    offset: usize,
    count: usize,
    limit: Option<usize>,
    progress: &ProgressTracker,
) -> Vec<String> {
    let mut solver = Solver::new();
    let mut blocks = Vec::new();
    let mut pending = 0;

    for packed in hands()
        .take(limit.unwrap_or(TOTAL_HANDS))
        .skip(offset)
        .step_by(count.max(1))
    {
        blocks.push(solver.solve(&packed.hand()).block());

        pending += 1;
        if pending == PROGRESS_REFRESH_INTERVAL {
            progress.advance(pending);
            pending = 0;
        }
    }
    progress.advance(pending);

    blocks
}

/// Interleave per-worker output back into global order
///
/// Takes one block from each worker in index order, repeating until some
/// worker has nothing left. Strided workers never hold more blocks than a
/// lower-indexed one, so nothing is dropped.
pub fn merge_round_robin(per_worker: Vec<Vec<String>>) -> Vec<String> {
    let total = per_worker.iter().map(Vec::len).sum();
    let mut merged = Vec::with_capacity(total);
    let mut workers: Vec<_> = per_worker.into_iter().map(Vec::into_iter).collect();
    if workers.is_empty() {
        return merged;
    }

    'merge: loop {
        for blocks in &mut workers {
            let Some(block) = blocks.next() else {
                break 'merge;
            };
            merged.push(block);
        }
    }

    merged
}

/// Enumerate with the configured number of workers and merge their output
///
/// One worker runs on the calling thread. More run as one task each on a
/// dedicated pool, every worker owning its own solver and render cache.
///
/// # Errors
///
/// Returns `WorkerPool` if the thread pool cannot be created
pub fn run(config: &EnumerationConfig, progress: &ProgressTracker) -> Result<Vec<String>> {
    let workers = config.workers.max(1);
    if workers == 1 {
        return Ok(enumerate_strided(0, 1, config.limit, progress));
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|source| SolverError::WorkerPool { workers, source })?;

    let per_worker: Vec<Vec<String>> = pool.install(|| {
        (0..workers)
            .into_par_iter()
            .map(|offset| enumerate_strided(offset, workers, config.limit, progress))
            .collect()
    });

    Ok(merge_round_robin(per_worker))
}
