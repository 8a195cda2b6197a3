//! Ports layer - trait definitions for hexagonal architecture.
//!
//! - `inbound`: Driving port (CookieQueueApi)
//! - `outbound`: Driven port (TimeSource)

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
