//! Allow-listed static file server library.

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod security;
pub mod serve;

pub use config::schema::ServeConfig;
pub use http::HttpServer;
pub use lifecycle::{prepare, ServeContext, Shutdown};
