use crate::prelude::Endpoint;
use std::collections::HashMap;
use std::sync::Mutex;

/// Per-endpoint request counters shared by every clone of the API client.
pub struct MetricsRecorder {
    inner: Mutex<HashMap<Endpoint, Counts>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub issued: usize,
    pub failed: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    pub fn record_issued(&self, endpoint: Endpoint) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.entry(endpoint).or_default().issued += 1;
        }
    }

    pub fn record_error(&self, endpoint: Endpoint) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.entry(endpoint).or_default().failed += 1;
        }
    }

    pub fn counts(&self, endpoint: Endpoint) -> Counts {
        self.inner
            .lock()
            .ok()
            .and_then(|metrics| metrics.get(&endpoint).copied())
            .unwrap_or_default()
    }

    /// Totals across endpoints as `(issued, failed)`.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            metrics
                .values()
                .fold((0, 0), |(issued, failed), c| (issued + c.issued, failed + c.failed))
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
