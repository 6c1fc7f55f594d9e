//! djsuite CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success (including "nothing to update" and "up to date")
//! - 1: Precondition or operation failure (target exists, not a managed
//!   project, render failure)
//! - 2: Invalid arguments (clap's native failure path)

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("djsuite_core=info".parse().unwrap())
                .add_directive("djsuite_templates=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New(args) => commands::new::execute(args).await,
        Commands::Update(args) => commands::update::execute(args).await,
        Commands::ListFiles(args) => commands::list_files::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(ExitCodes::GENERAL_ERROR)
        }
    }
}
