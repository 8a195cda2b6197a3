//! Diagnostic counters for cookie queue operations
//!
//! Counts accepted and dropped cookies, evictions by cause, and reports
//! served. None of these affect queue behavior.
//!
//! ## Usage
//!
//! ```ignore
//! let snapshot = service.metrics().snapshot();
//! println!("dropped {} malformed cookies", snapshot.rejected);
//! ```

use crate::domain::NormalizeOutcome;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for queue operations
#[derive(Debug, Default)]
pub struct QueueMetrics {
    /// Cookies stored in the queue
    pub accepted: AtomicU64,
    /// Error-tagged cookies dropped on add
    pub rejected: AtomicU64,
    /// Slots evicted by the capacity bound
    pub evicted_overflow: AtomicU64,
    /// Slots evicted by TTL expiry
    pub evicted_expired: AtomicU64,
    /// Reports produced
    pub reports_generated: AtomicU64,
}

impl QueueMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the evictions of one normalization pass
    pub fn record_evictions(&self, outcome: &NormalizeOutcome) {
        self.evicted_overflow
            .fetch_add(outcome.evicted_overflow as u64, Ordering::Relaxed);
        self.evicted_expired
            .fetch_add(outcome.evicted_expired as u64, Ordering::Relaxed);
    }

    pub fn record_report(&self) {
        self.reports_generated.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of current metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            accepted: self.accepted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            evicted_overflow: self.evicted_overflow.load(Ordering::Relaxed),
            evicted_expired: self.evicted_expired.load(Ordering::Relaxed),
            reports_generated: self.reports_generated.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.accepted.store(0, Ordering::Relaxed);
        self.rejected.store(0, Ordering::Relaxed);
        self.evicted_overflow.store(0, Ordering::Relaxed);
        self.evicted_expired.store(0, Ordering::Relaxed);
        self.reports_generated.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time snapshot of metrics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub accepted: u64,
    pub rejected: u64,
    pub evicted_overflow: u64,
    pub evicted_expired: u64,
    pub reports_generated: u64,
}

impl MetricsSnapshot {
    /// Fraction of offered cookies that were dropped as malformed
    pub fn rejection_rate(&self) -> f64 {
        let offered = self.accepted + self.rejected;
        if offered == 0 {
            0.0
        } else {
            self.rejected as f64 / offered as f64
        }
    }
}
