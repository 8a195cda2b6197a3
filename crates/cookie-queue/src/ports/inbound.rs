//! # Inbound Port - CookieQueueApi
//!
//! Primary driving port exposing the cookie queue.
//!
//! | Method | Side |
//! |--------|------|
//! | `add` | Producer |
//! | `generate_report` | Consumer |
//! | `status` | Diagnostics |

use crate::domain::{Cookie, QueueStatus, Report};

/// Primary API for the cookie queue.
///
/// Both mutating calls take `&mut self`: the queue assumes one logical
/// mutator. Callers that share a queue across threads wrap it in a lock.
///
/// # Example
///
/// ```rust,ignore
/// use cookie_queue::ports::CookieQueueApi;
///
/// fn example(queue: &mut impl CookieQueueApi) {
///     queue.add(Cookie::new("label-1", CookieType::ChristmasTree));
///     queue.add(Cookie::new("broken", CookieType::Error)); // silently dropped
///
///     let report = queue.generate_report();
///     assert_eq!(report.len(), 1);
/// }
/// ```
pub trait CookieQueueApi {
    /// Offers a cookie. Error-tagged cookies are dropped without any signal.
    fn add(&mut self, cookie: Cookie);

    /// Returns up to `capacity` still-valid cookies, newest first.
    ///
    /// Never fails; an empty queue yields an empty report.
    fn generate_report(&mut self) -> Report;

    /// Returns the raw queue state without normalizing it.
    fn status(&self) -> QueueStatus;
}
