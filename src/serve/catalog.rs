//! The fixed set of servable file names.
//!
//! # Design Decisions
//! - Built once at startup, immutable afterwards (shared without locks)
//! - Entries are bare file names; any directory part is discarded
//! - Duplicates collapse to their first occurrence
//! - Ordered `Vec` drives index rendering, `HashSet` answers membership

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

/// Error type for catalog construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to list {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered, de-duplicated list of file names the server may transmit.
#[derive(Debug, Clone, Default)]
pub struct FileCatalog {
    names: Vec<String>,
    lookup: HashSet<String>,
}

impl FileCatalog {
    /// Build a catalog from explicit names, keeping only their base names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::default();
        for raw in names {
            match base_name(raw.as_ref()) {
                Some(name) => catalog.push(name),
                None => tracing::warn!(entry = raw.as_ref(), "Ignoring catalog entry without a file name"),
            }
        }
        catalog
    }

    /// Build a catalog from every non-directory entry in `dir`, sorted by name.
    pub fn from_directory(dir: &Path) -> Result<Self, CatalogError> {
        let read_err = |source: std::io::Error| CatalogError::ReadDir {
            path: dir.display().to_string(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let file_type = entry.file_type().map_err(read_err)?;
            if file_type.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::warn!(name = ?raw, "Skipping non UTF-8 file name"),
            }
        }
        names.sort();

        Ok(Self::from_names(names))
    }

    fn push(&mut self, name: String) {
        if self.lookup.insert(name.clone()) {
            self.names.push(name);
        }
    }

    /// Whether `name` is servable.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}

/// Final path component of `raw`, if it names a file.
fn base_name(raw: &str) -> Option<String> {
    Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}
