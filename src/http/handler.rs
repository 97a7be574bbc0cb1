//! Request router.
//!
//! Runs behind the access-control middleware, so every caller seen here is
//! already allowed. Decides, in order:
//! 1. non-GET method → 403 "GET only!" (processing stops)
//! 2. "/" → index page
//! 3. "/name" with name in the catalog → streamed file, or 500 on open failure
//! 4. anything else → 404 "Nope"

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{Method, Uri},
    response::Response,
};

use crate::http::response;
use crate::http::server::AppState;
use crate::serve::{render_index, transmit};

pub async fn serve_request(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
) -> Response {
    let remote = peer.ip().to_canonical();

    if method != Method::GET {
        tracing::warn!(remote = %remote, method = %method, uri = %uri, "GET only");
        return response::get_only();
    }

    let path = uri.path();
    if path == "/" {
        tracing::info!(remote = %remote, method = %method, uri = %uri, "Serving index");
        let page = render_index(&state.root_dir, &state.catalog).await;
        for err in &page.errors {
            tracing::warn!(remote = %remote, uri = %uri, error = %err, "Index error");
        }
        return response::html(page.html);
    }

    let candidate = path.strip_prefix('/').unwrap_or(path);
    let name = match urlencoding::decode(candidate) {
        Ok(name) if state.catalog.contains(&name) => name,
        _ => {
            tracing::info!(remote = %remote, method = %method, uri = %uri, "File not whitelisted");
            return response::not_found();
        }
    };

    tracing::info!(remote = %remote, method = %method, uri = %uri, file = %name, "Serving file");
    match transmit(&state.root_dir, &name).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(remote = %remote, uri = %uri, error = %e, "Transmit failed");
            response::internal_error(e.to_string())
        }
    }
}
