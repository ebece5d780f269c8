//! List command implementation.
//!
//! Displays reservations in table, JSON, or CSV form. Customers are
//! always scoped to their own reservations; staff roles may list
//! everything or filter by customer.

use clap::{Args, ValueEnum};

use crate::error::CliError;
use crate::utils::{ensure_permitted, load_configuration, open_store, GlobalOptions};
use tavolo::{Action, Reservation};

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 7] = ["id", "customer", "party_size", "date", "time", "phone", "table"];

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Filter by customer name (staff roles only)
    #[arg(long, value_name = "NAME")]
    pub customer: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for the list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Customers see their own records regardless of the filter flag.
        let filter = if global.role.requires_ownership() {
            Some(global.user.clone())
        } else {
            self.customer.clone()
        };
        let action = if filter.is_some() {
            Action::ListOwn
        } else {
            Action::ListAll
        };
        ensure_permitted(global, action, "list reservations")?;

        let config = load_configuration(global)?;
        let store = open_store(&config)?;

        let rows: Vec<&Reservation> = match &filter {
            Some(customer) => store.list_by_customer(customer),
            None => store.list_all().iter().collect(),
        };

        match self.format {
            OutputFormat::Table => format_as_table(&rows),
            OutputFormat::Json => format_as_json(&rows),
            OutputFormat::Csv => format_as_csv(&rows),
        }
    }
}

/// Human-readable tab-separated listing; table numbers shown 1-based.
fn format_as_table(rows: &[&Reservation]) -> Result<(), CliError> {
    if rows.is_empty() {
        println!("No reservations found.");
        return Ok(());
    }
    println!("ID\tCustomer\tParty\tDate\tTime\tContact\tTable");
    for row in rows {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.id(),
            row.customer(),
            row.party_size(),
            row.date(),
            row.time(),
            row.phone(),
            row.table()
        );
    }
    Ok(())
}

/// Machine-readable JSON; table as the zero-based index, as persisted.
fn format_as_json(rows: &[&Reservation]) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    println!("{json}");
    Ok(())
}

/// Machine-readable CSV; table as the zero-based index, as persisted.
fn format_as_csv(rows: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    writer
        .write_record(COLUMN_HEADERS)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    for row in rows {
        writer
            .write_record([
                row.id().as_str(),
                row.customer(),
                &row.party_size().to_string(),
                row.date(),
                row.time(),
                row.phone(),
                &row.table().value().to_string(),
            ])
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    }
    writer.flush()?;
    Ok(())
}
