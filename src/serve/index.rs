//! Directory index page.
//!
//! # Responsibilities
//! - Stat every catalog entry, in catalog order
//! - Render an HTML table of name, size (KiB) and modification time
//! - Collect per-entry failures instead of aborting the page
//!
//! # Design Decisions
//! - Entries that fail to stat are omitted from the table and reported in
//!   the returned error list (and in a trailing HTML comment)
//! - The document is assembled in memory and sent in one piece

use std::fmt::Write as _;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::serve::catalog::FileCatalog;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const STYLESHEET: &str = concat!(
    " table { border: 1px solid black; width: 100%; border-collapse: collapse; } ",
    " thead tr { background-color: #FFE; line-height: 1.5em; } ",
    " thead th { border: 1px solid black; } ",
    " tbody td { text-align: center; border: 1px solid black; padding: 0.25em; } ",
    " tbody td:nth-child(1) { text-align: left; } ",
    " tbody tr:nth-child(odd) { background-color: #EFE; } ",
    " tbody tr:nth-child(even) { background-color: #EEF; } ",
);

/// One successfully stat'ed catalog entry.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub name: String,
    pub size_kib: f64,
    pub modified: DateTime<Local>,
}

impl IndexEntry {
    fn new(name: &str, size_bytes: u64, modified: SystemTime) -> Self {
        Self {
            name: name.to_string(),
            size_kib: size_bytes as f64 / 1024.0,
            modified: DateTime::<Local>::from(modified),
        }
    }
}

/// A rendered index document plus the errors met while building it.
#[derive(Debug, Clone)]
pub struct IndexPage {
    pub html: String,
    pub errors: Vec<String>,
}

/// Stat the catalog under `root_dir` and render the index page.
pub async fn render_index(root_dir: &Path, catalog: &FileCatalog) -> IndexPage {
    let (entries, errors) = collect_entries(root_dir, catalog).await;
    let html = render_document(&root_dir.display().to_string(), &entries, &errors, Local::now());
    IndexPage { html, errors }
}

/// Stat each catalog entry. Failures become messages naming the file.
pub async fn collect_entries(root_dir: &Path, catalog: &FileCatalog) -> (Vec<IndexEntry>, Vec<String>) {
    let mut entries = Vec::with_capacity(catalog.len());
    let mut errors = Vec::new();

    for name in catalog.iter() {
        let metadata = match tokio::fs::metadata(root_dir.join(name)).await {
            Ok(m) => m,
            Err(e) => {
                errors.push(format!("stat {}: {}", name, e));
                continue;
            }
        };
        match metadata.modified() {
            Ok(modified) => entries.push(IndexEntry::new(name, metadata.len(), modified)),
            Err(e) => errors.push(format!("mtime {}: {}", name, e)),
        }
    }

    (entries, errors)
}

/// Render the full HTML document.
pub fn render_document(
    root_label: &str,
    entries: &[IndexEntry],
    errors: &[String],
    generated: DateTime<Local>,
) -> String {
    let mut page = String::with_capacity(1024 + entries.len() * 160);

    page.push_str("<!DOCTYPE html><html><head><title>Serve</title><style>");
    page.push_str(STYLESHEET);
    page.push_str("</style></head><body>");

    page.push_str(r#"<table id="files"><thead><tr><th colspan="3">"#);
    page.push_str(&escape_html(root_label));
    page.push_str("</th></tr><tr><th>Name</th><th>Size (KiB)</th><th>Modified</th></tr></thead><tbody>");

    for entry in entries {
        // Writing to a String cannot fail
        let _ = write!(
            page,
            r#"<tr><td><a href="/{href}">{name}</a></td><td>{size:.2}</td><td>{modified}</td></tr>"#,
            href = urlencoding::encode(&entry.name),
            name = escape_html(&entry.name),
            size = entry.size_kib,
            modified = entry.modified.format(TIMESTAMP_FORMAT),
        );
    }
    page.push_str("</tbody></table>\n");

    let _ = writeln!(page, "<!-- Generated {} -->", generated.format(TIMESTAMP_FORMAT));
    if !errors.is_empty() {
        page.push_str("<!-- Errors encountered:\n");
        for err in errors {
            let _ = writeln!(page, "\t{}", strip_comment_close(err));
        }
        page.push_str("-->\n");
    }

    page.push_str("</body></html>");
    page
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

// An error message must not be able to terminate the surrounding comment.
fn strip_comment_close(s: &str) -> String {
    s.replace("-->", "-- >")
}
