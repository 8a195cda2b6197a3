//! # Domain Layer - Cookie Queue
//!
//! Pure queue logic. No clock, no logging: every time-dependent operation
//! takes `now` as an argument.
//!
//! ## Components
//!
//! - `entities`: Cookie, CookieType, QueueConfig, default constants
//! - `slots`: Slot and the index-addressed SlotArena
//! - `queue`: ExpiringQueue with capacity and TTL trimming
//! - `value_objects`: Report, NormalizeOutcome, AddOutcome, QueueStatus
//! - `errors`: QueueError enumeration

pub mod entities;
pub mod errors;
pub mod queue;
pub mod slots;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use queue::*;
pub use value_objects::*;
