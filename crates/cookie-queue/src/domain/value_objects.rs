//! Value objects for the cookie queue.
//!
//! Immutable results handed back to callers.

use super::entities::{Cookie, Timestamp};
use serde::{Deserialize, Serialize};

/// Newest-first snapshot of the valid cookies at report time.
///
/// Owns its cookies, so later queue mutation never changes an issued report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    cookies: Vec<Cookie>,
}

impl Report {
    pub fn new(cookies: Vec<Cookie>) -> Self {
        Self { cookies }
    }

    /// Reported cookies, newest first.
    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cookie> {
        self.cookies.iter()
    }

    pub fn into_cookies(self) -> Vec<Cookie> {
        self.cookies
    }
}

impl IntoIterator for Report {
    type Item = Cookie;
    type IntoIter = std::vec::IntoIter<Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Cookie;
    type IntoIter = std::slice::Iter<'a, Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.iter()
    }
}

/// Slots removed by one normalization pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeOutcome {
    /// Removed because the queue exceeded capacity.
    pub evicted_overflow: usize,
    /// Removed because their deadline passed.
    pub evicted_expired: usize,
}

impl NormalizeOutcome {
    pub fn total(&self) -> usize {
        self.evicted_overflow + self.evicted_expired
    }
}

/// Result of offering a cookie to the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// Cookie was stored as the new head.
    Accepted(NormalizeOutcome),
    /// Cookie was inadmissible and dropped.
    Rejected,
}

impl AddOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AddOutcome::Accepted(_))
    }
}

/// Raw queue state. Not normalized, so it may still count expired slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueStatus {
    /// Slots currently linked.
    pub len: usize,
    /// Configured capacity.
    pub capacity: usize,
    /// Configured TTL (ms).
    pub ttl_ms: u64,
    /// Deadline of the tail slot.
    pub oldest_deadline: Option<Timestamp>,
    /// Deadline of the head slot.
    pub newest_deadline: Option<Timestamp>,
}
