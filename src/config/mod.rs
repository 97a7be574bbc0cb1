//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → loader.rs (optional TOML file)
//!     → cli.rs (command-line overrides)
//!     → validation.rs (semantic checks)
//!     → ServeConfig (validated, immutable)
//!     → lifecycle::startup builds the runtime context from it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the server starts
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{read_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ServeConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
