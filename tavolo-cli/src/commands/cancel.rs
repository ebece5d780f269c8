//! Cancel command implementation.
//!
//! Cancels a reservation and frees its table. Customers may only cancel
//! their own reservations.

use clap::Args;

use crate::error::CliError;
use crate::utils::{
    audit_log, customer_filter, ensure_permitted, load_configuration, open_store, GlobalOptions,
};
use tavolo::Action;

/// Cancel a reservation and free its table.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation ID to cancel (e.g. "ID 1A")
    pub id: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        ensure_permitted(global, Action::Cancel, "cancel a reservation")?;

        let config = load_configuration(global)?;
        let mut store = open_store(&config)?;
        let audit = audit_log(&config);

        match store.cancel(&self.id, customer_filter(global)) {
            Ok(removed) => {
                audit.record_action(
                    global.role,
                    &global.user,
                    "Cancelled reservation",
                    &format!("ID {}", removed.id()),
                    Some(&removed),
                )?;
                println!("Cancelled {}", removed.id());
                Ok(())
            }
            Err(e) => {
                audit.record_error(
                    global.role,
                    &global.user,
                    "Failed to cancel reservation",
                    &e.to_string(),
                    Some(&self.id),
                )?;
                Err(e.into())
            }
        }
    }
}
