//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (peer address captured via ConnectInfo)
//!     → server.rs (Axum setup, tracing, request ID, timeout)
//!     → middleware/access_control.rs (allow-list, 403 "Not allowed!")
//!     → handler.rs (method check, index or file or 404)
//!     → response.rs (canned status/body pairs)
//!     → Send to client
//! ```

pub mod handler;
pub mod middleware;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
