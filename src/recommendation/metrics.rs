//! Query metrics and timing for friend suggestions

use serde::Serialize;
use std::time::Instant;

/// Summary of a single `suggest_friends` call
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuggestionStats {
    pub user_id: String,
    pub candidates_considered: usize,
    pub suggestions_returned: usize,
    pub parallel: bool,
    pub duration_ms: u64,
}

/// Performance timer for tracking operation duration
pub struct PerformanceTimer {
    start: Instant,
    label: &'static str,
}

impl PerformanceTimer {
    pub fn new(label: &'static str) -> Self {
        Self {
            start: Instant::now(),
            label,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn log_if_slow(&self, threshold_ms: u64) {
        let elapsed = self.elapsed_ms();
        if elapsed > threshold_ms {
            tracing::warn!(
                "Slow operation: {} took {}ms (threshold: {}ms)",
                self.label,
                elapsed,
                threshold_ms
            );
        }
    }
}

impl Drop for PerformanceTimer {
    fn drop(&mut self) {
        tracing::trace!("{} completed in {}ms", self.label, self.elapsed_ms());
    }
}
