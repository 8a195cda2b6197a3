//! # Expiring Queue - Bounded, Newest-First Cookie Storage
//!
//! ## Data Structures
//!
//! - `slots`: arena of [`Slot`]s linked newest-to-oldest by index
//! - `head`: newest slot, where inserts land (O(1))
//! - `tail`: oldest slot, where evictions happen (O(1))
//!
//! ## Invariants Enforced
//!
//! After every public method returns:
//!
//! - Walking `older` links from `head` visits exactly `count` slots
//! - `count <= capacity`
//! - No reachable slot has a deadline at or before the `now` last passed in
//! - `head`/`tail` are both `None` iff `count == 0`, and equal when `count == 1`
//!
//! Acceptance order equals deadline order, so expired slots always sit in a
//! contiguous run at the tail and trimming from the back is enough.

use super::entities::{Cookie, QueueConfig, Timestamp};
use super::errors::QueueError;
use super::slots::{Slot, SlotArena, SlotIndex};
use super::value_objects::{AddOutcome, NormalizeOutcome, QueueStatus, Report};

/// Doubly linked, capacity-bounded queue whose entries expire after a TTL.
///
/// The structure is clock-free: callers pass `now` explicitly. Use
/// [`crate::service::CookieQueueService`] for a queue bound to a time source.
#[derive(Debug)]
pub struct ExpiringQueue {
    config: QueueConfig,
    slots: SlotArena,
    head: Option<SlotIndex>,
    tail: Option<SlotIndex>,
    count: usize,
}

impl Default for ExpiringQueue {
    fn default() -> Self {
        Self::build(QueueConfig::default())
    }
}

impl ExpiringQueue {
    /// Creates an empty queue.
    ///
    /// # Errors
    /// Returns the validation error if `config` is unusable.
    pub fn new(config: QueueConfig) -> Result<Self, QueueError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Creates a queue with 100 slots and a 5 minute TTL.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    fn build(config: QueueConfig) -> Self {
        Self {
            slots: SlotArena::with_capacity(config.capacity),
            config,
            head: None,
            tail: None,
            count: 0,
        }
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn ttl_ms(&self) -> u64 {
        self.config.ttl_ms
    }

    /// Number of linked slots. Not normalized: may include expired slots
    /// until the next `add` or `generate_report`.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Deadline of the oldest slot.
    pub fn oldest_deadline(&self) -> Option<Timestamp> {
        self.tail
            .and_then(|idx| self.slots.get(idx))
            .map(|slot| slot.expires_at)
    }

    /// Deadline of the newest slot.
    pub fn newest_deadline(&self) -> Option<Timestamp> {
        self.head
            .and_then(|idx| self.slots.get(idx))
            .map(|slot| slot.expires_at)
    }

    /// Returns a snapshot of the raw queue state.
    pub fn status(&self) -> QueueStatus {
        QueueStatus {
            len: self.count,
            capacity: self.config.capacity,
            ttl_ms: self.config.ttl_ms,
            oldest_deadline: self.oldest_deadline(),
            newest_deadline: self.newest_deadline(),
        }
    }

    /// Offers a cookie to the queue.
    ///
    /// Inadmissible cookies are dropped without error. Admissible ones become
    /// the new head with deadline `now + ttl`, after which the queue is
    /// normalized.
    pub fn add(&mut self, cookie: Cookie, now: Timestamp) -> AddOutcome {
        if !cookie.is_admissible() {
            return AddOutcome::Rejected;
        }

        let expires_at = now.saturating_add(self.config.ttl_ms);
        self.push_front(Slot::new(cookie, expires_at));

        AddOutcome::Accepted(self.normalize(now))
    }

    /// Produces the newest-first report of cookies still valid at `now`.
    ///
    /// Normalizes first, so stale or overflow slots never leak into a report
    /// even if no cookie was added recently.
    pub fn generate_report(&mut self, now: Timestamp) -> (Report, NormalizeOutcome) {
        let outcome = self.normalize(now);

        let mut cookies = Vec::with_capacity(self.count.min(self.config.capacity));
        let mut cursor = self.head;
        while cookies.len() < self.config.capacity {
            let Some(slot) = cursor.and_then(|idx| self.slots.get(idx)) else {
                break;
            };
            cookies.push(slot.cookie.clone());
            cursor = slot.older;
        }

        (Report::new(cookies), outcome)
    }

    /// Links a slot in as the new head.
    fn push_front(&mut self, slot: Slot) {
        let old_head = self.head;
        let idx = self.slots.insert(slot);

        match old_head {
            Some(old) => {
                if let Some(new_slot) = self.slots.get_mut(idx) {
                    new_slot.older = Some(old);
                }
                if let Some(old_slot) = self.slots.get_mut(old) {
                    old_slot.newer = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
        self.count += 1;
    }

    /// Drops overflow slots, then expired slots, both from the tail.
    pub(crate) fn normalize(&mut self, now: Timestamp) -> NormalizeOutcome {
        let mut outcome = NormalizeOutcome::default();

        while self.count > self.config.capacity {
            if self.remove_tail().is_none() {
                break;
            }
            outcome.evicted_overflow += 1;
        }

        while self.tail_is_expired(now) {
            if self.remove_tail().is_none() {
                break;
            }
            outcome.evicted_expired += 1;
        }

        outcome
    }

    fn tail_is_expired(&self, now: Timestamp) -> bool {
        self.tail
            .and_then(|idx| self.slots.get(idx))
            .is_some_and(|slot| slot.is_expired(now))
    }

    /// Unlinks and frees the oldest slot.
    fn remove_tail(&mut self) -> Option<Slot> {
        let tail = self.tail?;
        let slot = self.slots.remove(tail)?;

        match slot.newer {
            None => {
                // Tail was also head
                self.head = None;
                self.tail = None;
                self.count = 0;
            }
            Some(newer) => {
                if let Some(new_tail) = self.slots.get_mut(newer) {
                    new_tail.older = None;
                }
                self.tail = Some(newer);
                self.count -= 1;
            }
        }

        Some(slot)
    }

    /// Walks the chain and checks every structural invariant.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self, now: Timestamp) {
        assert!(self.count <= self.config.capacity, "count over capacity");
        assert_eq!(self.head.is_none(), self.count == 0);
        assert_eq!(self.tail.is_none(), self.count == 0);
        if self.count == 1 {
            assert_eq!(self.head, self.tail);
        }
        assert_eq!(self.slots.len(), self.count, "arena leaked slots");

        let mut visited = 0;
        let mut prev: Option<SlotIndex> = None;
        let mut prev_deadline = Timestamp::MAX;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let slot = self.slots.get(idx).expect("dangling link");
            assert_eq!(slot.newer, prev, "newer link mismatch");
            assert!(slot.expires_at <= prev_deadline, "deadline order broken");
            assert!(!slot.is_expired(now), "expired slot still linked");
            prev_deadline = slot.expires_at;
            prev = Some(idx);
            cursor = slot.older;
            visited += 1;
        }
        assert_eq!(prev, self.tail);
        assert_eq!(visited, self.count);
    }
}
