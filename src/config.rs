use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "quicknotes")]
#[command(about = "Jot down notes in your terminal. Nothing is saved on exit.")]
pub struct Config {
    /// Write logs to this file. The terminal is taken by the UI, so logging
    /// is off unless this is set.
    #[arg(long, env = "QUICKNOTES_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter directives, e.g. `quicknotes=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "quicknotes=info")]
    pub log_filter: String,
}
