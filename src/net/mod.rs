//! Network layer subsystem.
//!
//! Binding only; the accept loop and HTTP framing belong to axum.

pub mod listener;

pub use listener::{bind, ListenerError};
