//! Command-line interface for enumerating, solving and checking waiting hands

use crate::algorithm::driver::{self, EnumerationConfig};
use crate::algorithm::selfcheck::run_self_check;
use crate::algorithm::solver::Solver;
use crate::algorithm::verify::{check_complete_hand, check_solution};
use crate::io::compare::compare_files;
use crate::io::configuration::{DEFAULT_SEED, TOTAL_HANDS};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::io::output::BlockWriter;
use crate::io::progress::ProgressTracker;
use crate::tiles::hand::Hand;
use crate::tiles::sample::HandSampler;
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "chinitsu")]
#[command(
    author,
    version,
    about = "List every wait of every single-suit 13-tile hand"
)]
/// Command-line arguments for the hand enumerator
pub struct Cli {
    /// Solve this 13-tile hand only, such as 1112224588899
    #[arg(value_name = "HAND", conflicts_with_all = ["sample", "compare"])]
    pub hand: Option<String>,

    /// Worker count; with no value or 0, one per available core
    #[arg(
        short,
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "0"
    )]
    pub jobs: Option<usize>,

    /// Enumerate only the first N hands
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Write blocks to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Random seed for --sample
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Solve and verify N random hands and N random complete hands
    #[arg(long, value_name = "N", conflicts_with = "compare")]
    pub sample: Option<usize>,

    /// Compare two enumeration logs, ignoring line and group order
    #[arg(long, num_args = 2, value_names = ["A", "B"])]
    pub compare: Option<Vec<PathBuf>>,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Number of workers to enumerate with
    ///
    /// No `--jobs` means one worker, `--jobs` alone or `--jobs 0` means one
    /// per core the platform reports.
    pub fn workers(&self) -> usize {
        match self.jobs {
            None => 1,
            Some(0) => std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
            Some(workers) => workers,
        }
    }

    /// Enumeration parameters from the command line
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero `--limit`
    pub fn enumeration_config(&self) -> Result<EnumerationConfig> {
        if self.limit == Some(0) {
            return Err(invalid_parameter("limit", &0, &"must be at least 1"));
        }
        if let Some(limit) = self.limit
            && limit > TOTAL_HANDS
        {
            return Err(invalid_parameter(
                "limit",
                &limit,
                &format!("there are only {TOTAL_HANDS} hands"),
            ));
        }
        Ok(EnumerationConfig {
            workers: self.workers(),
            limit: self.limit,
        })
    }
}

/// Orchestrates one invocation according to the command line
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected mode
    ///
    /// Log comparison runs on its own. Every other mode first runs the
    /// self-check and stops if it fails.
    ///
    /// # Errors
    ///
    /// Returns the self-check mismatch, an invalid hand or parameter, a
    /// failed verification, differing logs, or an I/O failure
    pub fn run(&self) -> Result<()> {
        if let Some(paths) = &self.cli.compare {
            return match paths.as_slice() {
                [left, right] => self.compare(left, right),
                _ => Err(invalid_parameter(
                    "compare",
                    &paths.len(),
                    &"expected two log files",
                )),
            };
        }

        self.self_check()?;

        if let Some(hand) = &self.cli.hand {
            self.solve_one(hand)
        } else if let Some(count) = self.cli.sample {
            self.sample(count)
        } else {
            self.enumerate()
        }
    }

    // Allow print for user feedback on self-check progress
    #[allow(clippy::print_stderr)]
    fn self_check(&self) -> Result<()> {
        let checked = run_self_check(|hand| {
            if !self.cli.quiet {
                eprintln!("Self-check {hand}: passed");
            }
        })?;
        if !self.cli.quiet {
            eprintln!("Self-check complete: {checked} hands");
        }
        Ok(())
    }

    fn solve_one(&self, text: &str) -> Result<()> {
        let hand = Hand::parse(text)?;
        let solution = Solver::new().solve(&hand);

        let mut writer = BlockWriter::open(self.cli.output.as_deref())?;
        writer.write_block(&solution.block())?;
        writer.finish()?;
        Ok(())
    }

    // Allow print for user feedback on enumeration summary
    #[allow(clippy::print_stderr)]
    fn enumerate(&self) -> Result<()> {
        let start_time = Instant::now();
        let config = self.cli.enumeration_config()?;
        let progress = ProgressTracker::new(config.hand_count(), self.cli.should_show_progress());

        let blocks = driver::run(&config, &progress)?;
        progress.finish();

        let mut writer = BlockWriter::open(self.cli.output.as_deref())?;
        writer.write_blocks(&blocks)?;
        let written = writer.finish()?;

        if !self.cli.quiet {
            eprintln!(
                "Enumerated {written} hands with {} workers in {:.2?}",
                config.workers,
                start_time.elapsed()
            );
        }
        Ok(())
    }

    // Allow print for user feedback on sampling summary
    #[allow(clippy::print_stderr)]
    fn sample(&self, count: usize) -> Result<()> {
        if count == 0 {
            return Err(invalid_parameter("sample", &count, &"must be at least 1"));
        }

        let mut sampler = HandSampler::new(self.cli.seed);
        let mut solver = Solver::new();
        let mut writer = BlockWriter::open(self.cli.output.as_deref())?;
        let mut waiting = 0;

        for _ in 0..count {
            let solution = solver.solve(&sampler.random_hand());
            check_solution(&solution)?;
            if !solution.is_none() {
                waiting += 1;
            }
            writer.write_block(&solution.block())?;
        }
        writer.finish()?;

        for _ in 0..count {
            check_complete_hand(&mut solver, &sampler.complete_hand())?;
        }

        if !self.cli.quiet {
            eprintln!(
                "Sampled {count} hands ({waiting} waiting) and {count} complete hands with seed {}: all waits consistent",
                self.cli.seed
            );
        }
        Ok(())
    }

    // Allow print for user feedback on comparison result
    #[allow(clippy::print_stderr)]
    fn compare(&self, left: &Path, right: &Path) -> Result<()> {
        let comparison = compare_files(left, right)?;

        if !self.cli.quiet {
            for (a, b) in &comparison.differences {
                eprintln!("Different\n{a}  and\n{b}");
            }
        }

        if comparison.is_identical() {
            if !self.cli.quiet {
                eprintln!("Passed: {} blocks", comparison.left_blocks);
            }
            return Ok(());
        }

        let reason = if comparison.left_blocks == comparison.right_blocks {
            format!(
                "{} of {} blocks differ",
                comparison.differences.len(),
                comparison.left_blocks
            )
        } else {
            format!(
                "{} blocks against {}",
                comparison.left_blocks, comparison.right_blocks
            )
        };
        Err(SolverError::LogsDiffer {
            left: left.to_path_buf(),
            right: right.to_path_buf(),
            reason,
        })
    }
}
