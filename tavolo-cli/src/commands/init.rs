//! Init command implementation.
//!
//! Creates the data directory and the empty backing files so that later
//! commands start from a well-defined state. Running it against an
//! already-initialized directory is harmless.

use std::fs;

use clap::Args;

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use tavolo::store::{NEXT_ID_FILE, RESERVATIONS_FILE};

/// Create the data directory and empty backing files.
#[derive(Args)]
pub struct InitCommand {}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        fs::create_dir_all(&config.data_dir)?;

        let records = config.data_dir.join(RESERVATIONS_FILE);
        if !records.exists() {
            fs::write(&records, "")?;
        }
        let counter = config.data_dir.join(NEXT_ID_FILE);
        if !counter.exists() {
            fs::write(&counter, "1\n")?;
        }

        println!(
            "Initialized tavolo data directory at {}",
            config.data_dir.display()
        );
        Ok(())
    }
}
