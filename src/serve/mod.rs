//! File serving subsystem.
//!
//! # Data Flow
//! ```text
//! startup
//!     → catalog.rs (fixed, ordered list of servable names)
//!
//! per request (from http::handler):
//!     "/"     → index.rs (stat catalog, render HTML, collect errors)
//!     "/name" → catalog.rs membership → transmit.rs (stream file)
//! ```

pub mod catalog;
pub mod index;
pub mod transmit;

pub use catalog::{CatalogError, FileCatalog};
pub use index::{render_index, IndexEntry, IndexPage};
pub use transmit::{transmit, TransmitError, CHUNK_SIZE};
