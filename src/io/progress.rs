//! Progress bar over the collapse loop

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static COLLAPSE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Collapsing [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Displays how many nodes are determined
pub struct CollapseProgress {
    bar: ProgressBar,
}

impl CollapseProgress {
    /// Create a bar counting up to `total` determined nodes
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(COLLAPSE_STYLE.clone());
        Self { bar }
    }

    /// Hidden bar, used when output is suppressed or redirected
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Report the number of determined nodes
    pub fn update(&self, determined: usize) {
        self.bar.set_position(determined as u64);
    }

    /// Current position of the bar
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total length of the bar
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Complete the bar and leave it on screen
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}
