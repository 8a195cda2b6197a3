//! Cookie Queue Service
//!
//! Binds the clock-free [`ExpiringQueue`] to a [`TimeSource`] and records
//! diagnostics for every operation.

use std::sync::Arc;
use tracing::{debug, trace};

use crate::domain::{
    AddOutcome, Cookie, ExpiringQueue, QueueConfig, QueueError, QueueStatus, Report,
};
use crate::metrics::QueueMetrics;
use crate::ports::{CookieQueueApi, TimeSource};

/// Cookie queue service implementation
///
/// Implements the `CookieQueueApi` port using an injected time source.
pub struct CookieQueueService<T: TimeSource> {
    /// Wall clock (driven port)
    time_source: Arc<T>,
    /// The underlying queue
    queue: ExpiringQueue,
    /// Diagnostic counters
    metrics: QueueMetrics,
}

impl<T: TimeSource> CookieQueueService<T> {
    /// Create a new service with the default configuration
    pub fn new(time_source: Arc<T>) -> Self {
        Self {
            time_source,
            queue: ExpiringQueue::with_defaults(),
            metrics: QueueMetrics::new(),
        }
    }

    /// Create with a custom configuration
    ///
    /// # Errors
    /// Returns the validation error if `config` is unusable.
    pub fn with_config(time_source: Arc<T>, config: QueueConfig) -> Result<Self, QueueError> {
        Ok(Self {
            time_source,
            queue: ExpiringQueue::new(config)?,
            metrics: QueueMetrics::new(),
        })
    }

    pub fn metrics(&self) -> &QueueMetrics {
        &self.metrics
    }

    pub fn config(&self) -> &QueueConfig {
        self.queue.config()
    }
}

impl<T: TimeSource> CookieQueueApi for CookieQueueService<T> {
    fn add(&mut self, cookie: Cookie) {
        let now = self.time_source.now();
        let label = cookie.label().to_string();

        match self.queue.add(cookie, now) {
            AddOutcome::Rejected => {
                self.metrics.record_rejected();
                debug!(label = %label, "Dropped error cookie");
            }
            AddOutcome::Accepted(outcome) => {
                self.metrics.record_accepted();
                self.metrics.record_evictions(&outcome);
                trace!(label = %label, now, len = self.queue.len(), "Cookie accepted");
                if outcome.total() > 0 {
                    debug!(
                        evicted_overflow = outcome.evicted_overflow,
                        evicted_expired = outcome.evicted_expired,
                        "Trimmed queue tail"
                    );
                }
            }
        }
    }

    fn generate_report(&mut self) -> Report {
        let now = self.time_source.now();
        let (report, outcome) = self.queue.generate_report(now);

        self.metrics.record_evictions(&outcome);
        self.metrics.record_report();
        debug!(
            report_len = report.len(),
            evicted_overflow = outcome.evicted_overflow,
            evicted_expired = outcome.evicted_expired,
            "Generated cookie report"
        );

        report
    }

    fn status(&self) -> QueueStatus {
        self.queue.status()
    }
}
