//! Slot storage for the expiring queue.
//!
//! Slots live in an arena and link to each other by index, so the doubly
//! linked chain needs no shared ownership. Freed indices are recycled on the
//! next insert; a freed slot is never reachable from the chain.

use super::entities::{Cookie, Timestamp};

/// Stable index of a slot inside a [`SlotArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotIndex(usize);

/// One accepted cookie plus its deadline and chain links.
#[derive(Clone, Debug)]
pub struct Slot {
    /// The accepted cookie (never mutated).
    pub cookie: Cookie,
    /// Absolute expiry deadline (ms).
    pub expires_at: Timestamp,
    /// Neighbor accepted right after this one (towards head).
    pub newer: Option<SlotIndex>,
    /// Neighbor accepted right before this one (towards tail).
    pub older: Option<SlotIndex>,
}

impl Slot {
    /// Creates an unlinked slot.
    pub fn new(cookie: Cookie, expires_at: Timestamp) -> Self {
        Self {
            cookie,
            expires_at,
            newer: None,
            older: None,
        }
    }

    /// A slot is expired once its deadline is at or before `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}

/// Index-addressed slot storage with a free list.
#[derive(Debug, Default)]
pub struct SlotArena {
    entries: Vec<Option<Slot>>,
    free: Vec<usize>,
}

impl SlotArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the arena for `capacity` live slots (plus the one transient
    /// overflow slot an insert creates before trimming).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.saturating_add(1)),
            free: Vec::new(),
        }
    }

    /// Stores a slot and returns its index.
    pub fn insert(&mut self, slot: Slot) -> SlotIndex {
        match self.free.pop() {
            Some(idx) => {
                self.entries[idx] = Some(slot);
                SlotIndex(idx)
            }
            None => {
                self.entries.push(Some(slot));
                SlotIndex(self.entries.len() - 1)
            }
        }
    }

    /// Removes a slot, returning it. The index becomes reusable.
    pub fn remove(&mut self, idx: SlotIndex) -> Option<Slot> {
        let slot = self.entries.get_mut(idx.0)?.take()?;
        self.free.push(idx.0);
        Some(slot)
    }

    pub fn get(&self, idx: SlotIndex) -> Option<&Slot> {
        self.entries.get(idx.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, idx: SlotIndex) -> Option<&mut Slot> {
        self.entries.get_mut(idx.0).and_then(Option::as_mut)
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.entries.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
