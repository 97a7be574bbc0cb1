//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Resolve root dir → Build catalog + allow-list
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → server stops accepting → in-flight requests drain → exit
//! ```
//!
//! # Design Decisions
//! - Startup finishes before any socket is bound
//! - Shutdown is a broadcast so tests can drive it too

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{prepare, ServeContext, StartupError};
