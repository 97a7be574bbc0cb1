//! Per-request log events, captured through a scoped fmt subscriber.

use std::io;
use std::sync::{Arc, Mutex};

use axum::http::Method;
use tracing_subscriber::fmt::MakeWriter;

mod common;

use common::{populate, router, send};

/// In-memory sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn line_with<'a>(logs: &'a str, message: &str) -> &'a str {
    logs.lines()
        .find(|line| line.contains(message))
        .unwrap_or_else(|| panic!("no `{message}` event in:\n{logs}"))
}

#[tokio::test]
async fn test_each_outcome_logs_caller_method_and_uri() {
    let dir = populate(&[("a.txt", b"alpha"), ("gone.txt", b"g")]);
    let app = router(dir.path(), &["a.txt", "gone.txt"]);
    std::fs::remove_file(dir.path().join("gone.txt")).unwrap();

    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    send(&app, Method::GET, "/a.txt", "10.0.0.9:1234").await;
    send(&app, Method::POST, "/a.txt", "127.0.0.1:40000").await;
    send(&app, Method::GET, "/", "127.0.0.1:40000").await;
    send(&app, Method::GET, "/a.txt", "127.0.0.1:40000").await;
    send(&app, Method::GET, "/secret.txt", "127.0.0.1:40000").await;

    let logs = captured.contents();

    let line = line_with(&logs, "Remote not allowed");
    assert!(line.contains("WARN"));
    assert!(line.contains("remote=10.0.0.9"));
    assert!(line.contains("method=GET"));
    assert!(line.contains("uri=/a.txt"));

    let line = line_with(&logs, "GET only");
    assert!(line.contains("remote=127.0.0.1"));
    assert!(line.contains("method=POST"));
    assert!(line.contains("uri=/a.txt"));

    let line = line_with(&logs, "Serving index");
    assert!(line.contains("remote=127.0.0.1"));
    assert!(line.contains("method=GET"));
    assert!(line.contains("uri=/"));

    let line = line_with(&logs, "Serving file");
    assert!(line.contains("remote=127.0.0.1"));
    assert!(line.contains("method=GET"));
    assert!(line.contains("uri=/a.txt"));

    let line = line_with(&logs, "File not whitelisted");
    assert!(line.contains("remote=127.0.0.1"));
    assert!(line.contains("method=GET"));
    assert!(line.contains("uri=/secret.txt"));
}

#[tokio::test]
async fn test_each_index_error_is_logged_separately() {
    let dir = populate(&[("kept.txt", b"k"), ("one.txt", b"1"), ("two.txt", b"2")]);
    let app = router(dir.path(), &["one.txt", "kept.txt", "two.txt"]);
    std::fs::remove_file(dir.path().join("one.txt")).unwrap();
    std::fs::remove_file(dir.path().join("two.txt")).unwrap();

    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    send(&app, Method::GET, "/", "127.0.0.1:40000").await;

    let logs = captured.contents();
    let errors: Vec<_> = logs.lines().filter(|l| l.contains("Index error")).collect();
    assert_eq!(errors.len(), 2, "{logs}");
    assert!(errors.iter().all(|l| l.contains("WARN") && l.contains("remote=127.0.0.1")));
    assert!(errors[0].contains("one.txt"));
    assert!(errors[1].contains("two.txt"));
    assert!(!logs.contains("stat kept.txt"));
}
