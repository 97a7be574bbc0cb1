//! Single file transmission.
//!
//! # Design Decisions
//! - The file is streamed in bounded chunks, never buffered whole
//! - The file handle is owned by the body stream and released whenever the
//!   stream is dropped (completion, read error, or client disconnect)
//! - Open failures, and names that turn out to be directories, surface as
//!   errors before any status is sent; failures after that simply end the body

use std::io;
use std::path::Path;

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures_util::TryStreamExt;
use thiserror::Error;
use tokio_util::io::ReaderStream;

/// Read size used when streaming a file body.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Error type for file transmission.
#[derive(Debug, Error)]
pub enum TransmitError {
    #[error("open {name}: {source}")]
    Open {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("read {name}: is a directory")]
    Directory { name: String },
}

/// Open `name` under `root_dir` and build a 200 response streaming its bytes.
pub async fn transmit(root_dir: &Path, name: &str) -> Result<Response, TransmitError> {
    let file = tokio::fs::File::open(root_dir.join(name))
        .await
        .map_err(|source| TransmitError::Open {
            name: name.to_string(),
            source,
        })?;

    let metadata = file.metadata().await.map_err(|source| TransmitError::Open {
        name: name.to_string(),
        source,
    })?;
    if metadata.is_dir() {
        return Err(TransmitError::Directory {
            name: name.to_string(),
        });
    }

    let file_name = name.to_string();
    let stream = ReaderStream::with_capacity(file, CHUNK_SIZE).inspect_err(move |e| {
        tracing::warn!(file = %file_name, error = %e, "Read failed mid-stream, closing response");
    });

    Ok((StatusCode::OK, Body::from_stream(stream)).into_response())
}
