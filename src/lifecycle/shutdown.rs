//! Shutdown coordination for the server.

use tokio::sync::broadcast;

/// One-shot stop signal for `HttpServer::run`.
///
/// `signals::forward_signals` fires it on SIGINT/SIGTERM; end-to-end tests
/// fire it directly to stop the server they started.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Stop every server holding a receiver. A no-op once they are gone.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
