//! Observability subsystem.
//!
//! Every request produces one structured event naming the caller, method,
//! URI and outcome; `tower_http::trace` adds per-request spans.

pub mod logging;
