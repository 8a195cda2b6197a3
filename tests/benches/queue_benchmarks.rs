//! # Cookie Queue Benchmarks
//!
//! | Operation | Claim | Target |
//! |-----------|-------|--------|
//! | `add` | Amortized O(1) | flat across queue sizes |
//! | `generate_report` | O(min(count, 100)) | < 10µs at capacity |

use cookie_queue::{
    Cookie, CookieQueueApi, CookieQueueService, CookieType, MockTimeSource, QueueConfig,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::sync::Arc;

fn random_cookies(n: usize) -> Vec<Cookie> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|i| {
            let cookie_type = match rng.gen_range(0..10) {
                0 => CookieType::Error,
                1..=5 => CookieType::ChristmasTree,
                _ => CookieType::SantaClausHat,
            };
            Cookie::new(format!("label-{i}"), cookie_type)
        })
        .collect()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("cookie-queue-add");

    for capacity in [10usize, 100, 1000] {
        let cookies = random_cookies(10_000);
        group.throughput(Throughput::Elements(cookies.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("add_stream", capacity),
            &cookies,
            |b, cookies| {
                b.iter(|| {
                    let clock = Arc::new(MockTimeSource::new(0));
                    let config = QueueConfig {
                        capacity,
                        ..Default::default()
                    };
                    let mut queue = CookieQueueService::with_config(Arc::clone(&clock), config)
                        .expect("valid config");
                    for cookie in cookies {
                        clock.advance(10);
                        queue.add(black_box(cookie.clone()));
                    }
                    black_box(queue.status())
                })
            },
        );
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("cookie-queue-report");

    let clock = Arc::new(MockTimeSource::new(0));
    let mut queue = CookieQueueService::new(Arc::clone(&clock));
    for cookie in random_cookies(500) {
        queue.add(cookie);
    }

    group.bench_function("report_at_capacity", |b| {
        b.iter(|| black_box(queue.generate_report()))
    });

    group.bench_function("report_after_full_expiry", |b| {
        b.iter(|| {
            let clock = Arc::new(MockTimeSource::new(0));
            let mut queue = CookieQueueService::new(Arc::clone(&clock));
            for i in 0..100 {
                queue.add(Cookie::new(format!("label-{i}"), CookieType::ChristmasTree));
            }
            clock.advance(5 * 60 * 1000);
            black_box(queue.generate_report())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_report);
criterion_main!(benches);
