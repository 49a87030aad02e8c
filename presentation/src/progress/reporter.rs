//! Status spinner shown while a gateway call is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for a single in-flight request.
///
/// One request maps to one spinner; there is no multi-task progress since
/// calls are serial and cannot be cancelled.
pub struct StatusSpinner {
    bar: ProgressBar,
}

impl StatusSpinner {
    fn new(message: &'static str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    /// Spinner for a question in flight.
    pub fn thinking() -> Self {
        Self::new("Thinking...")
    }

    /// Spinner for a PDF upload in flight.
    pub fn uploading() -> Self {
        Self::new("Uploading...")
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
