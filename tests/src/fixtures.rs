//! Shared test fixtures.

use cookie_queue::{Cookie, CookieQueueService, CookieType, MockTimeSource, Timestamp};
use std::sync::Arc;

/// Arbitrary fixed start time (ms since epoch).
pub const T0: Timestamp = 1_700_000_000_000;

pub const MINUTE_MS: u64 = 60 * 1000;

/// Hands out admissible cookies with unique labels, alternating types.
#[derive(Debug, Default)]
pub struct CookieFactory {
    next: usize,
}

impl CookieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn good(&mut self) -> Cookie {
        self.next += 1;
        let cookie_type = if self.next % 2 == 0 {
            CookieType::ChristmasTree
        } else {
            CookieType::SantaClausHat
        };
        Cookie::new(format!("label-{}", self.next), cookie_type)
    }

    pub fn bad(&mut self) -> Cookie {
        self.next += 1;
        Cookie::new(format!("bad-cookie-{}", self.next), CookieType::Error)
    }

    /// `n` good cookies, in creation order.
    pub fn batch(&mut self, n: usize) -> Vec<Cookie> {
        (0..n).map(|_| self.good()).collect()
    }
}

/// A default-configured service on a mock clock starting at [`T0`].
pub fn queue_at_t0() -> (Arc<MockTimeSource>, CookieQueueService<MockTimeSource>) {
    let clock = Arc::new(MockTimeSource::new(T0));
    let queue = CookieQueueService::new(Arc::clone(&clock));
    (clock, queue)
}

/// Newest-first view of cookies given in acceptance order.
pub fn newest_first(cookies: &[Cookie]) -> Vec<Cookie> {
    cookies.iter().rev().cloned().collect()
}
