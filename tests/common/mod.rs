//! Shared fixtures for router and end-to-end tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serve_gate::{prepare, HttpServer, ServeConfig, ServeContext};
use tempfile::TempDir;
use tower::ServiceExt;

pub const ALLOWED: &str = "127.0.0.1";

/// A temp directory populated with `files`.
pub fn populate(files: &[(&str, &[u8])]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

/// Prepared context serving `catalog` from `dir` to 127.0.0.1 only.
pub fn context(dir: &Path, catalog: &[&str]) -> ServeContext {
    context_allowing(dir, catalog, &[ALLOWED])
}

/// Prepared context serving `catalog` from `dir` to the `allow` addresses.
pub fn context_allowing(dir: &Path, catalog: &[&str], allow: &[&str]) -> ServeContext {
    let config = ServeConfig {
        root_dir: Some(dir.to_path_buf()),
        files: catalog.iter().map(|s| s.to_string()).collect(),
        allow: allow.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };
    prepare(config).unwrap()
}

pub fn router(dir: &Path, catalog: &[&str]) -> Router {
    HttpServer::new(context(dir, catalog)).into_router()
}

pub fn router_allowing(dir: &Path, catalog: &[&str], allow: &[&str]) -> Router {
    HttpServer::new(context_allowing(dir, catalog, allow)).into_router()
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").and_then(|v| v.to_str().ok())
    }
}

/// Drive one request through the router as if it came from `peer`.
pub async fn send(router: &Router, method: Method, uri: &str, peer: &str) -> Reply {
    let peer: SocketAddr = peer.parse().unwrap();
    let mut req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    req.extensions_mut().insert(ConnectInfo(peer));

    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    Reply { status, headers, body }
}

/// Shorthand for a GET from the allowed address.
pub async fn get(router: &Router, uri: &str) -> Reply {
    send(router, Method::GET, uri, "127.0.0.1:50000").await
}
