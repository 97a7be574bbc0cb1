//! Command-line interface.
//!
//! Flags override values read from `--config`; list flags (`--allow`, files)
//! replace the file's lists rather than extending them.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{read_config, ConfigError, ServeConfig};

#[derive(Parser, Debug)]
#[command(name = "serve-gate")]
#[command(about = "Serve a fixed set of files to an allow-listed set of addresses", long_about = None)]
pub struct Cli {
    /// Port to listen on [default: 8181]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address allowed to access the files (repeatable)
    #[arg(short, long = "allow", value_name = "ADDRESS")]
    pub allow: Vec<String>,

    /// Interface to bind [default: 0.0.0.0]
    #[arg(short, long, value_name = "ADDRESS")]
    pub bind: Option<String>,

    /// Directory to serve [default: working directory]
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Files to serve [default: every file in the directory]
    pub files: Vec<String>,
}

impl Cli {
    /// Merge defaults, the optional config file, and flags.
    pub fn into_config(self) -> Result<ServeConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ServeConfig::default(),
        };

        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(dir) = self.dir {
            config.root_dir = Some(dir);
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
        if !self.allow.is_empty() {
            config.allow = self.allow;
        }
        if !self.files.is_empty() {
            config.files = self.files;
        }

        Ok(config)
    }
}
