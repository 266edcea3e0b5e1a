use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use ci_capabilities::{ensure_directory, logging};
use clap::Parser;
use tracing::debug;

#[derive(Parser)]
#[command(name = "create-dir")]
#[command(version, about = "Creates a directory and any missing parents", long_about = None)]
struct Cli {
    /// Directory to create
    #[arg(long)]
    path: PathBuf,
}

fn run(path: &Path) -> anyhow::Result<()> {
    ensure_directory(path, &mut io::stdout().lock())
        .with_context(|| format!("Could not prepare {}", path.display()))
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging();
    debug!(path = %cli.path.display(), "arguments parsed");

    if let Err(e) = run(&cli.path) {
        debug!(error = ?e, "directory creation failed");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
