//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Resolve the served directory and build the file catalog
//! - Build the access filter
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Everything here completes before a socket is bound

use std::path::PathBuf;

use thiserror::Error;

use crate::config::validation::join_errors;
use crate::config::{validate_config, ServeConfig, ValidationError};
use crate::security::{AccessFilter, EmptyAllowList};
use crate::serve::{CatalogError, FileCatalog};

/// Error type for startup preparation.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),

    #[error("cannot determine working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("cannot use {path} as root directory: {source}")]
    RootDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Access(#[from] EmptyAllowList),
}

/// Everything the HTTP layer needs, resolved and immutable.
#[derive(Debug, Clone)]
pub struct ServeContext {
    pub config: ServeConfig,
    pub root_dir: PathBuf,
    pub catalog: FileCatalog,
    pub access: AccessFilter,
}

/// Turn a configuration into a ready-to-serve context.
pub fn prepare(config: ServeConfig) -> Result<ServeContext, StartupError> {
    validate_config(&config).map_err(StartupError::Invalid)?;

    let root_dir = match &config.root_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(StartupError::WorkingDir)?,
    };
    let root_dir = root_dir
        .canonicalize()
        .map_err(|source| StartupError::RootDir {
            path: root_dir.display().to_string(),
            source,
        })?;

    let catalog = if config.files.is_empty() {
        tracing::info!(dir = %root_dir.display(), "No files specified, using all files in directory");
        FileCatalog::from_directory(&root_dir)?
    } else {
        FileCatalog::from_names(&config.files)
    };

    let access = AccessFilter::new(config.allow.clone())?;

    tracing::info!(
        allowed = %access.allowed().join(","),
        files = catalog.len(),
        root = %root_dir.display(),
        "Startup prepared"
    );

    Ok(ServeContext {
        config,
        root_dir,
        catalog,
        access,
    })
}
