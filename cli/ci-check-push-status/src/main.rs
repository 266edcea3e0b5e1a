use std::io;
use std::process;

use ci_capabilities::{check_push_status, logging};
use clap::Parser;
use tracing::debug;

#[derive(Parser)]
#[command(name = "check-push-status")]
#[command(version, long_about = None)]
#[command(about = "Fails the CI step unless the push status is \"true\"")]
struct Cli {
    /// Push result reported by the previous step
    #[arg(long, allow_hyphen_values = true)]
    push_status: String,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging();
    debug!(push_status = %cli.push_status, "arguments parsed");

    match check_push_status(&cli.push_status, &mut io::stdout().lock()) {
        Ok(status) => process::exit(status.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
