//! Cookie queue error types.
//!
//! Only configuration can fail. Inadmissible cookies are filtered, not reported.

use thiserror::Error;

/// Errors raised while building a queue configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("Queue capacity must be at least 1, got {capacity}")]
    InvalidCapacity { capacity: usize },

    #[error("Queue TTL must be non-zero, got {ttl_ms}ms")]
    InvalidTtl { ttl_ms: u64 },

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnvValue { var: &'static str, value: String },
}
