//! Progress display for subdivision rounds

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed rounds of a single generation run
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar over `iterations` rounds drawn to stderr
    pub fn new(iterations: u32) -> Self {
        Self::with_target(iterations, ProgressDrawTarget::stderr())
    }

    /// Create a progress bar that is never drawn
    pub fn hidden(iterations: u32) -> Self {
        Self::with_target(iterations, ProgressDrawTarget::hidden())
    }

    fn with_target(iterations: u32, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(u64::from(iterations)), target);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message("depth");
        Self { bar }
    }

    /// Record that `completed` rounds have been applied
    pub fn update_depth(&self, completed: u32) {
        self.bar.set_position(u64::from(completed));
    }

    /// Rounds recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of rounds
    pub fn length(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Mark the run as finished and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
