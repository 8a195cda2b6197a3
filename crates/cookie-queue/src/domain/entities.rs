//! Core domain entities for the cookie queue.
//!
//! Defines the record type, its classification tag, and queue configuration.

use super::errors::QueueError;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Timestamp in milliseconds since UNIX epoch.
pub type Timestamp = u64;

/// Maximum number of cookies retained (and reported).
pub const DEFAULT_CAPACITY: usize = 100;

/// Time a cookie stays valid after acceptance.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// [`DEFAULT_TTL`] in milliseconds.
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

/// Environment variable overriding the queue capacity.
pub const CAPACITY_ENV: &str = "COOKIE_QUEUE_CAPACITY";

/// Environment variable overriding the TTL, in whole seconds.
pub const TTL_SECS_ENV: &str = "COOKIE_QUEUE_TTL_SECS";

/// Classification tag of a cookie.
///
/// Exactly one variant, [`CookieType::Error`], marks a cookie as inadmissible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookieType {
    ChristmasTree,
    SantaClausHat,
    /// Malformed cookie. Silently dropped on `add`.
    Error,
}

impl CookieType {
    /// Returns true if cookies of this type may enter the queue.
    pub fn is_admissible(self) -> bool {
        !matches!(self, CookieType::Error)
    }
}

/// A single record fed into the queue.
///
/// Immutable once constructed. The label is opaque and only used for identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cookie {
    label: String,
    cookie_type: CookieType,
}

impl Cookie {
    /// Creates a new cookie.
    pub fn new(label: impl Into<String>, cookie_type: CookieType) -> Self {
        Self {
            label: label.into(),
            cookie_type,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn cookie_type(&self) -> CookieType {
        self.cookie_type
    }

    /// Returns true unless the cookie is tagged [`CookieType::Error`].
    pub fn is_admissible(&self) -> bool {
        self.cookie_type.is_admissible()
    }
}

/// Queue configuration.
///
/// Defaults reproduce the reference behavior: 100 cookies, 5 minute TTL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueConfig {
    /// Maximum cookies retained regardless of expiry.
    pub capacity: usize,
    /// Time-to-live after acceptance (milliseconds).
    pub ttl_ms: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl_ms: DEFAULT_TTL_MS,
        }
    }
}

impl QueueConfig {
    /// Creates a minimal config for testing.
    pub fn for_testing() -> Self {
        Self {
            capacity: 10,
            ttl_ms: 1000, // 1 second
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `COOKIE_QUEUE_CAPACITY`: Maximum cookies (default: 100)
    /// - `COOKIE_QUEUE_TTL_SECS`: Time-to-live in seconds (default: 300)
    ///
    /// # Errors
    /// - `InvalidEnvValue` if a variable is set but not a number
    /// - `InvalidCapacity` / `InvalidTtl` if the result fails [`QueueConfig::validate`]
    pub fn from_env() -> Result<Self, QueueError> {
        let mut config = Self::default();

        if let Ok(value) = env::var(CAPACITY_ENV) {
            config.capacity = parse_env(CAPACITY_ENV, &value)?;
        }

        if let Ok(value) = env::var(TTL_SECS_ENV) {
            let secs: u64 = parse_env(TTL_SECS_ENV, &value)?;
            config.ttl_ms = secs.saturating_mul(1000);
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can hold at least one live cookie.
    ///
    /// # Errors
    /// - `InvalidCapacity` if capacity is zero
    /// - `InvalidTtl` if TTL is zero
    pub fn validate(&self) -> Result<(), QueueError> {
        if self.capacity == 0 {
            return Err(QueueError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        if self.ttl_ms == 0 {
            return Err(QueueError::InvalidTtl {
                ttl_ms: self.ttl_ms,
            });
        }
        Ok(())
    }

    /// TTL as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

fn parse_env<V: std::str::FromStr>(var: &'static str, value: &str) -> Result<V, QueueError> {
    value
        .trim()
        .parse()
        .map_err(|_| QueueError::InvalidEnvValue {
            var,
            value: value.to_string(),
        })
}
