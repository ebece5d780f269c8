//! Reserve command implementation.
//!
//! Books a table for a customer. On success the new reservation ID is
//! printed on stdout, alone, so scripts can capture it. Both the success
//! and any refusal are recorded in the audit log.

use clap::Args;

use crate::error::CliError;
use crate::utils::{audit_log, ensure_permitted, load_configuration, open_store, GlobalOptions};
use tavolo::{Action, Error, ReserveRequest, TableIndex};

/// Book a table for a customer.
#[derive(Args)]
pub struct ReserveCommand {
    /// Customer name the reservation is for
    #[arg(long, value_name = "NAME")]
    pub customer: String,

    /// Contact phone number (e.g. 123-456-7890)
    #[arg(long, value_name = "PHONE")]
    pub phone: String,

    /// Party size (at least 1)
    #[arg(long, value_name = "COUNT")]
    pub party_size: u32,

    /// Reservation date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Reservation time (HH:MM, 24-hour)
    #[arg(long, value_name = "TIME")]
    pub time: String,

    /// Table number (1-10)
    #[arg(long, value_name = "TABLE")]
    pub table: usize,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        ensure_permitted(global, Action::Reserve, "reserve a table")?;

        let config = load_configuration(global)?;
        let mut store = open_store(&config)?;
        let audit = audit_log(&config);

        // The customer named on the reservation is the acting party.
        let actor = self.customer.clone();

        let request = match TableIndex::from_display_number(self.table) {
            Ok(table) => ReserveRequest {
                customer: self.customer,
                phone: self.phone,
                party_size: self.party_size,
                date: self.date,
                time: self.time,
                table,
            },
            Err(e) => {
                let err = Error::from(e);
                audit.record_error(
                    global.role,
                    &actor,
                    "Failed to reserve table",
                    &err.to_string(),
                    None,
                )?;
                return Err(err.into());
            }
        };

        match store.reserve(&request) {
            Ok(id) => {
                let record = store.get(&id).cloned();
                audit.record_action(
                    global.role,
                    &actor,
                    "Reserved table",
                    &format!(
                        "#{} for {} on {} at {}",
                        request.table, request.party_size, request.date, request.time
                    ),
                    record.as_ref(),
                )?;
                println!("{id}");
                Ok(())
            }
            Err(e) => {
                audit.record_error(
                    global.role,
                    &actor,
                    "Failed to reserve table",
                    &e.to_string(),
                    None,
                )?;
                Err(e.into())
            }
        }
    }
}
