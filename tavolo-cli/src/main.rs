//! Main entry point for the tavolo CLI.
//!
//! This is the command-line interface for the tavolo table reservation
//! system. It provides commands for the full reservation lifecycle:
//! - `reserve`: Book a table for a customer
//! - `update`: Change fields of an existing reservation
//! - `cancel`: Cancel a reservation and free its table
//! - `list`: List reservations
//! - `tables`: Show the table availability board
//! plus `init`, `account`, and `logs` for the supporting state.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = tavolo::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        role: cli.role.into(),
        user: cli.user,
        data_dir: cli.data_dir,
        config_file: cli.config_file,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Reserve(cmd) => cmd.execute(&global),
        cli::Command::Update(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Tables(cmd) => cmd.execute(&global),
        cli::Command::Account(cmd) => cmd.execute(&global),
        cli::Command::Logs(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
