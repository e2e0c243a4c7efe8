//! enumgrab CLI entrypoint

use clap::Parser;

use enumgrab::cli::{Cli, RunStatus, USAGE_EXIT_CODE};
use enumgrab::output;

fn main() {
    let cli = Cli::parse();

    match cli.execute() {
        Ok(RunStatus::Extracted { .. }) => {}
        Ok(RunStatus::UsageError) => std::process::exit(USAGE_EXIT_CODE),
        Err(e) => {
            // Display error in red with clean formatting
            output::error(&format!("Error: {:#}", e));
            std::process::exit(1);
        }
    }
}
