//! Update command implementation.
//!
//! Changes fields of an existing reservation in place. Omitted flags keep
//! the current value; so does an explicit `0`, the sentinel convention of
//! the interactive system this tool replaces. Customers may only update
//! their own reservations.

use clap::Args;

use crate::error::CliError;
use crate::utils::{
    audit_log, customer_filter, ensure_permitted, load_configuration, open_store, sentinel,
    GlobalOptions,
};
use tavolo::{Action, Error, ReservationId, TableIndex, UpdatePatch};

/// Change fields of an existing reservation.
#[derive(Args)]
pub struct UpdateCommand {
    /// Reservation ID to update (e.g. "ID 1A")
    pub id: String,

    /// New reservation ID (0 keeps the current one)
    #[arg(long, value_name = "ID")]
    pub new_id: Option<String>,

    /// New customer name (0 keeps the current one)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// New phone number (0 keeps the current one)
    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    /// New party size (0 keeps the current one)
    #[arg(long, value_name = "COUNT")]
    pub party_size: Option<u32>,

    /// New date (0 keeps the current one)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// New time (0 keeps the current one)
    #[arg(long, value_name = "TIME")]
    pub time: Option<String>,

    /// New table number 1-10 (0 keeps the current one)
    #[arg(long, value_name = "TABLE")]
    pub table: Option<usize>,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        ensure_permitted(global, Action::Update, "update a reservation")?;

        let config = load_configuration(global)?;
        let mut store = open_store(&config)?;
        let audit = audit_log(&config);

        let patch = match self.build_patch() {
            Ok(patch) => patch,
            Err(e) => {
                audit.record_error(
                    global.role,
                    &global.user,
                    "Failed to update reservation",
                    &e.to_string(),
                    Some(&self.id),
                )?;
                return Err(e.into());
            }
        };

        match store.update(&self.id, customer_filter(global), &patch) {
            Ok(()) => {
                // The record may now live under a different ID.
                let final_id = match &patch.new_id {
                    Some(new_id) => ReservationId::parse(new_id),
                    None => ReservationId::parse(&self.id),
                }
                .map_err(Error::from)?;
                let record = store.get(&final_id).cloned();
                audit.record_action(
                    global.role,
                    &global.user,
                    "Updated reservation",
                    &format!("ID {final_id}"),
                    record.as_ref(),
                )?;
                println!("Updated {final_id}");
                Ok(())
            }
            Err(e) => {
                audit.record_error(
                    global.role,
                    &global.user,
                    "Failed to update reservation",
                    &e.to_string(),
                    Some(&self.id),
                )?;
                Err(e.into())
            }
        }
    }

    /// Assemble the patch, applying the `0` sentinel and converting the
    /// 1-based table number.
    fn build_patch(&self) -> Result<UpdatePatch, Error> {
        let table = match self.table {
            None | Some(0) => None,
            Some(number) => Some(TableIndex::from_display_number(number)?),
        };
        Ok(UpdatePatch::new()
            .with_new_id(sentinel(self.new_id.clone()))
            .with_customer(sentinel(self.name.clone()))
            .with_phone(sentinel(self.phone.clone()))
            .with_party_size(self.party_size.filter(|size| *size != 0))
            .with_date(sentinel(self.date.clone()))
            .with_time(sentinel(self.time.clone()))
            .with_table(table))
    }
}
