//! # TTL Expiry
//!
//! Cookies expire five minutes after acceptance, whether or not anything
//! else happens to the queue.

#[cfg(test)]
mod tests {
    use cookie_queue::{
        CookieQueueApi, CookieQueueService, MockTimeSource, QueueConfig, DEFAULT_TTL_MS,
    };
    use std::sync::Arc;

    use crate::fixtures::{newest_first, queue_at_t0, CookieFactory, MINUTE_MS, T0};

    #[test]
    fn test_expired_cookies_not_reported() {
        let (clock, mut queue) = queue_at_t0();
        let mut factory = CookieFactory::new();

        let early = factory.batch(50);
        for cookie in &early {
            queue.add(cookie.clone());
        }

        clock.advance(3 * MINUTE_MS);
        let late = factory.batch(50);
        for cookie in &late {
            queue.add(cookie.clone());
        }

        let report = queue.generate_report();
        let mut expected = newest_first(&late);
        expected.extend(newest_first(&early));
        assert_eq!(report.len(), 100);
        assert_eq!(report.cookies(), expected.as_slice());

        clock.advance(3 * MINUTE_MS);
        let report = queue.generate_report();
        assert_eq!(report.len(), 50);
        assert_eq!(report.cookies(), newest_first(&late).as_slice());
    }

    #[test]
    fn test_all_expire_after_five_minutes() {
        let (clock, mut queue) = queue_at_t0();
        for cookie in CookieFactory::new().batch(50) {
            queue.add(cookie);
        }

        clock.set(T0 + 5 * MINUTE_MS);
        let report = queue.generate_report();
        assert!(report.is_empty());
        assert_eq!(queue.metrics().snapshot().evicted_expired, 50);
    }

    #[test]
    fn test_valid_one_millisecond_before_deadline() {
        let (clock, mut queue) = queue_at_t0();
        for cookie in CookieFactory::new().batch(3) {
            queue.add(cookie);
        }

        clock.set(T0 + DEFAULT_TTL_MS - 1);
        assert_eq!(queue.generate_report().len(), 3);

        clock.advance(1);
        assert!(queue.generate_report().is_empty());
    }

    #[test]
    fn test_add_after_long_idle_clears_stale_cookies() {
        let (clock, mut queue) = queue_at_t0();
        let mut factory = CookieFactory::new();
        for cookie in factory.batch(20) {
            queue.add(cookie);
        }

        clock.advance(60 * MINUTE_MS);
        let fresh = factory.good();
        queue.add(fresh.clone());

        assert_eq!(queue.status().len, 1);
        assert_eq!(queue.generate_report().cookies(), &[fresh]);
    }

    #[test]
    fn test_custom_ttl_is_honored() {
        let clock = Arc::new(MockTimeSource::new(T0));
        let config = QueueConfig {
            ttl_ms: MINUTE_MS,
            ..Default::default()
        };
        let mut queue = CookieQueueService::with_config(Arc::clone(&clock), config).unwrap();
        let mut factory = CookieFactory::new();

        queue.add(factory.good());
        clock.advance(30 * 1000);
        let second = factory.good();
        queue.add(second.clone());

        clock.advance(30 * 1000);
        assert_eq!(queue.generate_report().cookies(), &[second]);
    }
}
