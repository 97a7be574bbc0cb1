//! TCP listener setup.
//!
//! # Responsibilities
//! - Bind to the configured address and port
//! - Report the bound address (port 0 resolves here)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("Invalid bind address {address}: {reason}")]
    Address { address: String, reason: String },

    #[error("Failed to bind: {0}")]
    Bind(#[source] std::io::Error),
}

/// Bind a TCP listener for the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let address = config.socket_address();
    let addr: SocketAddr = address.parse().map_err(|e: std::net::AddrParseError| ListenerError::Address {
        address: address.clone(),
        reason: e.to_string(),
    })?;

    let listener = TcpListener::bind(addr).await.map_err(ListenerError::Bind)?;
    let local_addr = listener.local_addr().map_err(ListenerError::Bind)?;

    tracing::info!(address = %local_addr, "Listener bound");
    Ok(listener)
}
