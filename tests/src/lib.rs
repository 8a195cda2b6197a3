//! # Cookie Queue Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Cookie generators, clock helpers
//! └── integration/      # Behavior through the public service API
//!     ├── reporting.rs  # Filtering, capacity, ordering, snapshots
//!     └── expiry.rs     # TTL-driven eviction
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cookie-queue-tests
//!
//! # By category
//! cargo test -p cookie-queue-tests integration::expiry
//!
//! # Benchmarks
//! cargo bench -p cookie-queue-tests
//! ```

pub mod fixtures;
