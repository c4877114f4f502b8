mod cli;
mod commands;
mod error;
mod fs;
mod prompt;
mod scaffold;
mod target;
mod templates;
mod utils;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 日志写到 stderr，级别由 SCAFFOLD_LOG 控制
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("SCAFFOLD_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    commands::run(cli::Cli::parse())
}
