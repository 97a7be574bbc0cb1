//! Access Control Middleware.
//! Rejects every request whose peer address is not on the allow-list.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::response;
use crate::http::server::AppState;

pub async fn access_control_middleware(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Response {
    // IPv4 peers on a dual-stack socket arrive as ::ffff:a.b.c.d.
    // Matching on the bare IP also drops any IPv6 scope id.
    let remote = peer.ip().to_canonical();
    if state.access.is_allowed(&remote.to_string()) {
        return next.run(req).await;
    }

    tracing::warn!(
        remote = %remote,
        method = %req.method(),
        uri = %req.uri(),
        "Remote not allowed"
    );
    response::not_allowed()
}
