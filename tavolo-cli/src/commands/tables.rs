//! Tables command implementation.
//!
//! Prints the availability board, one line per table, in the format the
//! interactive system used: `Table N is AVAILABLE` / `Table N is BOOKED`.

use clap::Args;

use crate::error::CliError;
use crate::utils::{ensure_permitted, load_configuration, open_store, GlobalOptions};
use tavolo::Action;

/// Show the table availability board.
#[derive(Args)]
pub struct TablesCommand {}

impl TablesCommand {
    /// Execute the tables command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        ensure_permitted(global, Action::ViewTables, "view table availability")?;

        let config = load_configuration(global)?;
        let store = open_store(&config)?;

        for (index, available) in store.table_availability().iter().enumerate() {
            let state = if *available { "AVAILABLE" } else { "BOOKED" };
            println!("Table {} is {state}", index + 1);
        }
        Ok(())
    }
}
