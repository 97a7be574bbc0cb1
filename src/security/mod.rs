//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → http::middleware::access_control (peer address from ConnectInfo)
//!     → access_control.rs (allow-list decision)
//!     → Pass to request router, or 403 "Not allowed!"
//! ```
//!
//! # Design Decisions
//! - Fail closed: anything not explicitly allowed is rejected
//! - Checked before method or path, so rejected callers learn nothing

pub mod access_control;

pub use access_control::{AccessFilter, EmptyAllowList};
