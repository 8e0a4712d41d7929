//! Progress tracking over the hand space, shared by every worker

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Hands: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} ({{eta}})"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Counts solved hands on a single bar
///
/// The bar is reference counted internally, so workers on other threads
/// advance it through a shared reference. A hidden tracker still counts.
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// Create a tracker over `total` hands, drawn on stderr when `visible`
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Create a tracker that never draws
    pub fn hidden() -> Self {
        Self::new(0, false)
    }

    /// Record `hands` more solved hands
    pub fn advance(&self, hands: usize) {
        if hands > 0 {
            self.bar.inc(hands as u64);
        }
    }

    /// Hands recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Hands expected in total
    pub fn total(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::hidden()
    }
}
