//! Batch progress display for multi-source processing
//!
//! Shows one bar per source while the batch is small and collapses to a
//! single batch bar for large directory runs, with each source advancing
//! through the fixed pipeline stages (load, render, export).

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PIPELINE_STAGES};

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Sources: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch mosaic runs
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    source_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            source_bars: Vec::new(),
        }
    }

    /// Initialize progress bars based on source count
    pub fn initialize(&mut self, source_count: usize) {
        if source_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(source_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            return;
        }

        for _ in 0..source_count {
            let pb = ProgressBar::new(PIPELINE_STAGES);
            pb.set_style(STAGE_STYLE.clone());
            self.source_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Label the bar for a source about to be processed
    pub fn start_source(&mut self, index: usize, display_name: &str) {
        if let Some(bar) = self.source_bars.get(index) {
            bar.set_message(display_name.to_string());
            bar.set_prefix("loading");
        }
    }

    /// Advance a source's bar to the next pipeline stage
    pub fn advance_stage(&mut self, index: usize, stage: &'static str) {
        if let Some(bar) = self.source_bars.get(index) {
            bar.inc(1);
            bar.set_prefix(stage);
        }
    }

    /// Mark a source as fully processed
    pub fn complete_source(&mut self, index: usize) {
        if let Some(bar) = self.source_bars.get(index) {
            bar.set_prefix("done");
            bar.finish();
        }
        if let Some(ref batch) = self.batch_bar {
            batch.inc(1);
        }
    }

    /// Finish all remaining bars
    pub fn finish(&mut self) {
        if let Some(ref batch) = self.batch_bar {
            batch.finish();
        }
        for bar in &self.source_bars {
            if !bar.is_finished() {
                bar.finish();
            }
        }
    }
}
