//! The audit log: a domain record of who did what.
//!
//! Every mutating operation appends an entry to `logs.txt` in the data
//! directory: action entries for successes, error entries for refused or
//! failed attempts. Entries are human-readable blocks separated by a
//! blank line; administrators read the file back verbatim.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::reservation::Reservation;
use crate::role::Role;

/// File name of the audit log within the data directory.
pub const LOG_FILE: &str = "logs.txt";

/// Appends and reads audit entries.
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Creates an audit log rooted in the given data directory.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(LOG_FILE),
        }
    }

    /// Records a successful action, optionally with the affected record's
    /// details.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or written.
    pub fn record_action(
        &self,
        role: Role,
        actor: &str,
        action: &str,
        details: &str,
        record: Option<&Reservation>,
    ) -> Result<()> {
        let mut entry = format!(
            "Reservation Log\nAction: {action} by {role}: {actor}\nDetails: {details}"
        );
        if let Some(record) = record {
            entry.push('\n');
            entry.push_str(&detail_line(record));
        }
        self.append(&entry)
    }

    /// Records a failed or refused action.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or written.
    pub fn record_error(
        &self,
        role: Role,
        actor: &str,
        action: &str,
        error: &str,
        id: Option<&str>,
    ) -> Result<()> {
        let entry = format!(
            "Reservation Error Log\nAction: {action} by {role}: {actor}\nError: {error}\nID: {}",
            id.unwrap_or("N/A")
        );
        self.append(&entry)
    }

    /// Returns the raw log contents; an absent file reads as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn read_all(&self) -> Result<String> {
        if self.path.exists() {
            Ok(std::fs::read_to_string(&self.path)?)
        } else {
            Ok(String::new())
        }
    }

    fn append(&self, entry: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{entry}\n")?;
        Ok(())
    }
}

/// The one-line record summary used in action entries. Table numbers are
/// shown 1-based, like every other user-facing surface.
fn detail_line(record: &Reservation) -> String {
    format!(
        "ID: {} | Name: {} | Contact: {} | Party-Size: {} | Date: {} | Time: {} | Table: {}",
        record.id(),
        record.customer(),
        record.phone(),
        record.party_size(),
        record.date(),
        record.time(),
        record.table()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::ReservationId;
    use crate::table::TableIndex;
    use tempfile::tempdir;

    fn sample() -> Reservation {
        Reservation::new(
            ReservationId::from_number(1),
            "alice",
            "123-456-7890",
            4,
            "2099-06-15",
            "19:30",
            TableIndex::try_from(3).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_log_reads_empty() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path());
        assert_eq!(log.read_all().unwrap(), "");
    }

    #[test]
    fn test_record_action_with_details() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path());

        log.record_action(
            Role::Customer,
            "alice",
            "Reserved table",
            "#4 for 4 on 2099-06-15 at 19:30",
            Some(&sample()),
        )
        .unwrap();

        let contents = log.read_all().unwrap();
        assert!(contents.starts_with("Reservation Log\n"));
        assert!(contents.contains("Action: Reserved table by Customer: alice"));
        assert!(contents.contains("ID: ID 1A | Name: alice"));
        // Table index 3 renders as table number 4.
        assert!(contents.contains("Table: 4"));
    }

    #[test]
    fn test_record_error() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path());

        log.record_error(
            Role::Admin,
            "root",
            "Failed to cancel reservation",
            "not found: reservation ID 9A",
            Some("ID 9A"),
        )
        .unwrap();

        let contents = log.read_all().unwrap();
        assert!(contents.starts_with("Reservation Error Log\n"));
        assert!(contents.contains("by Admin: root"));
        assert!(contents.contains("Error: not found"));
        assert!(contents.contains("ID: ID 9A"));
    }

    #[test]
    fn test_record_error_without_id() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path());

        log.record_error(Role::Customer, "bob", "Failed to reserve table", "bad phone", None)
            .unwrap();
        assert!(log.read_all().unwrap().contains("ID: N/A"));
    }

    #[test]
    fn test_entries_are_blank_line_separated() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path());

        log.record_action(Role::Customer, "alice", "Reserved table", "first", None)
            .unwrap();
        log.record_action(Role::Customer, "alice", "Cancelled reservation", "second", None)
            .unwrap();

        let contents = log.read_all().unwrap();
        let blocks: Vec<&str> = contents.trim_end().split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
    }
}
