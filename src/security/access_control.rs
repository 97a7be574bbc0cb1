//! Address allow-list.
//!
//! # Design Decisions
//! - Exact, case-sensitive string comparison (no CIDR, no wildcards)
//! - The port is stripped from the peer address before comparison
//! - An empty allow-list cannot be constructed

use std::net::SocketAddr;

use thiserror::Error;

/// Error returned when building a filter with nothing to allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("allow-list is empty")]
pub struct EmptyAllowList;

/// Decides whether a caller may be served at all.
#[derive(Debug, Clone)]
pub struct AccessFilter {
    allowed: Vec<String>,
}

impl AccessFilter {
    /// Create a filter. Fails if `allowed` has no entries.
    pub fn new(allowed: Vec<String>) -> Result<Self, EmptyAllowList> {
        if allowed.is_empty() {
            return Err(EmptyAllowList);
        }
        Ok(Self { allowed })
    }

    /// Returns true if the peer address, minus any port, is on the allow-list.
    pub fn is_allowed(&self, remote: &str) -> bool {
        let host = strip_port(remote);
        self.allowed.iter().any(|candidate| candidate == host)
    }

    /// Configured entries, in order.
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

/// Remove a trailing `:port` from a peer address.
///
/// Handles `1.2.3.4:80`, `[::1]:80`, and addresses that carry no port at all.
/// An IPv6 zone (`[fe80::1%2]:80`) is dropped along with the port.
pub fn strip_port(remote: &str) -> &str {
    match remote.parse::<SocketAddr>() {
        Ok(SocketAddr::V4(_)) => remote.rsplit_once(':').map_or(remote, |(host, _)| host),
        Ok(SocketAddr::V6(_)) => remote
            .rsplit_once("]:")
            .map_or(remote, |(host, _)| host.trim_start_matches('['))
            .split('%')
            .next()
            .unwrap_or(remote),
        Err(_) => remote,
    }
}
