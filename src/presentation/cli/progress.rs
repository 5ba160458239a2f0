//! Progress reporting for CLI

use crate::application::ProgressCallback;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter using indicatif
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Creates a progress reporter for classification, drawn on stderr
    pub fn for_classification(total_files: u64, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(total_files)
        } else {
            ProgressBar::hidden()
        };
        let style = ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} files ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message("Classifying files...");
        bar.set_length(total_files);

        Self { bar }
    }

    /// Finishes with a message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Gets a callback for batch progress
    pub fn batch_callback(&self) -> ProgressCallback {
        let bar = self.bar.clone();
        Box::new(move |done: usize, total: usize| {
            bar.set_length(total as u64);
            bar.set_position(done as u64);
        })
    }
}
