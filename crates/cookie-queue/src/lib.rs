//! # Cookie Queue
//!
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Accepts a continuous stream of cookies, drops malformed ones, and on
//! demand reports the most recently accepted cookies that are still valid,
//! newest first.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Chain from head visits exactly `count` slots, newest first | `domain/queue.rs` - `push_front()` / `remove_tail()` |
//! | INVARIANT-2 | At most `capacity` (100) slots | `domain/queue.rs` - `normalize()` overflow pass |
//! | INVARIANT-3 | No expired slot survives a public call | `domain/queue.rs` - `normalize()` expiry pass |
//! | INVARIANT-4 | Head/tail both empty iff `count == 0` | `domain/queue.rs` - `remove_tail()` |
//!
//! ## Eviction
//!
//! ```text
//!   add ──→ [head] ⇄ [ ] ⇄ [ ] ⇄ ... ⇄ [tail] ──→ evict
//!                                          │
//!                    count > capacity ─────┤
//!                    deadline <= now  ─────┘
//! ```
//!
//! | Trigger | Pass | Runs on |
//! |---------|------|---------|
//! | Over capacity | overflow trim | `add`, `generate_report` |
//! | Deadline passed (5 min TTL) | expiry trim | `add`, `generate_report` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  service.rs - CookieQueueService (clock + metrics + logging)     │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - CookieQueueApi trait                       │
//! │  ports/outbound.rs - TimeSource trait                           │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/entities.rs      - Cookie, CookieType, QueueConfig      │
//! │  domain/slots.rs         - Slot, SlotArena                      │
//! │  domain/queue.rs         - ExpiringQueue                        │
//! │  domain/value_objects.rs - Report, NormalizeOutcome             │
//! │  domain/errors.rs        - QueueError enum                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cookie_queue::{Cookie, CookieQueueApi, CookieQueueService, CookieType, MockTimeSource};
//!
//! let clock = Arc::new(MockTimeSource::new(0));
//! let mut queue = CookieQueueService::new(Arc::clone(&clock));
//!
//! queue.add(Cookie::new("label-1", CookieType::ChristmasTree));
//! queue.add(Cookie::new("broken", CookieType::Error));
//! queue.add(Cookie::new("label-2", CookieType::SantaClausHat));
//!
//! let report = queue.generate_report();
//! let labels: Vec<_> = report.iter().map(Cookie::label).collect();
//! assert_eq!(labels, ["label-2", "label-1"]);
//!
//! clock.advance(5 * 60 * 1000);
//! assert!(queue.generate_report().is_empty());
//! ```

pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

pub use domain::*;
pub use metrics::{MetricsSnapshot, QueueMetrics};
pub use ports::*;
pub use service::CookieQueueService;
