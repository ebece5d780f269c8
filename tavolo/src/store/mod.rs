//! The reservation store: in-memory state plus flat-file persistence.
//!
//! [`ReservationStore`] owns the table availability board, the list of
//! reservation records, and the monotonic ID counter. Every mutating
//! operation validates its inputs, applies the change in memory, then
//! rewrites the backing files in full. There is no partial-write recovery
//! and no locking; the store is strictly single-threaded.
//!
//! # Examples
//!
//! ```no_run
//! use tavolo::{Clock, ReservationStore, ReserveRequest, TableIndex};
//!
//! let clock = Clock::fixed("2025-05-22", 22, 19).unwrap();
//! let mut store = ReservationStore::open("/tmp/tavolo-data", clock).unwrap();
//!
//! let request = ReserveRequest {
//!     customer: "alice".into(),
//!     phone: "123-456-7890".into(),
//!     party_size: 4,
//!     date: "2025-05-23".into(),
//!     time: "19:00".into(),
//!     table: TableIndex::try_from(3).unwrap(),
//! };
//! let id = store.reserve(&request).unwrap();
//! assert!(!store.table_availability()[3]);
//! store.cancel(id.as_str(), None).unwrap();
//! assert!(store.table_availability()[3]);
//! ```

mod codec;
mod ops;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId};
use crate::table::{TableBoard, TABLE_COUNT};
use crate::validate::Clock;

pub use ops::{ReserveRequest, UpdatePatch};

/// File name of the reservation records within the data directory.
pub const RESERVATIONS_FILE: &str = "reservations.txt";

/// File name of the persisted ID counter within the data directory.
pub const NEXT_ID_FILE: &str = "next_id.txt";

/// The reservation store.
///
/// Explicitly constructed and passed by reference; there is no global
/// instance.
#[derive(Debug)]
pub struct ReservationStore {
    data_dir: PathBuf,
    clock: Clock,
    board: TableBoard,
    reservations: Vec<Reservation>,
    next_id: u64,
}

impl ReservationStore {
    /// Opens the store rooted at `data_dir`, creating the directory if it
    /// does not exist and loading any persisted state.
    ///
    /// Loading rebuilds the availability board from the records' table
    /// indices and recovers the ID counter as the maximum of the persisted
    /// counter and one past the highest ID seen.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, a backing file
    /// cannot be read, a record line is malformed, or the records violate
    /// the one-reservation-per-table invariant.
    pub fn open(data_dir: impl Into<PathBuf>, clock: Clock) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;

        let mut store = Self {
            data_dir,
            clock,
            board: TableBoard::new(),
            reservations: Vec::new(),
            next_id: 1,
        };
        store.load()?;
        Ok(store)
    }

    /// Returns the data directory this store persists into.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the reference clock used for date and time validation.
    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Returns all reservations in insertion order.
    #[must_use]
    pub fn list_all(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns the reservations belonging to the given customer.
    #[must_use]
    pub fn list_by_customer(&self, customer: &str) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.customer() == customer)
            .collect()
    }

    /// Returns `true` if the customer has at least one reservation.
    #[must_use]
    pub fn has_reservations(&self, customer: &str) -> bool {
        self.reservations.iter().any(|r| r.customer() == customer)
    }

    /// Returns the availability snapshot: `true` means available.
    #[must_use]
    pub fn table_availability(&self) -> [bool; TABLE_COUNT] {
        self.board.slots()
    }

    /// Looks up a reservation by ID.
    #[must_use]
    pub fn get(&self, id: &ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id() == id)
    }

    /// The counter value the next allocated ID will start from.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Finds the index of the record with the given ID, restricted to the
    /// given customer when a filter is supplied.
    fn find(&self, id: &ReservationId, customer_filter: Option<&str>) -> Result<usize> {
        self.reservations
            .iter()
            .position(|r| {
                r.id() == id && customer_filter.map_or(true, |customer| r.customer() == customer)
            })
            .ok_or_else(|| Error::NotFound {
                resource: format!("reservation {id}"),
            })
    }

    /// Returns `true` if the ID is used by a record other than `exclude`.
    fn id_exists(&self, id: &ReservationId, exclude: Option<&ReservationId>) -> bool {
        self.reservations
            .iter()
            .any(|r| r.id() == id && exclude != Some(r.id()))
    }

    /// Rewrites both backing files from the in-memory state.
    fn persist(&self) -> Result<()> {
        let mut contents = String::new();
        for reservation in &self.reservations {
            contents.push_str(&codec::encode_line(reservation));
            contents.push('\n');
        }
        fs::write(self.data_dir.join(RESERVATIONS_FILE), contents)?;
        fs::write(self.data_dir.join(NEXT_ID_FILE), format!("{}\n", self.next_id))?;
        Ok(())
    }

    /// Loads records and the counter from disk. Missing files mean an
    /// empty store.
    fn load(&mut self) -> Result<()> {
        let records_path = self.data_dir.join(RESERVATIONS_FILE);
        if records_path.exists() {
            let contents = fs::read_to_string(&records_path)?;
            let mut seen_ids: HashSet<ReservationId> = HashSet::new();
            let mut seen_tables: HashSet<usize> = HashSet::new();

            for (index, line) in contents.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let line_number = index + 1;
                let reservation = codec::parse_line(line, &records_path, line_number)?;

                if !seen_ids.insert(reservation.id().clone()) {
                    return Err(Error::Parse {
                        path: records_path.clone(),
                        line: line_number,
                        message: format!("duplicate reservation ID {}", reservation.id()),
                    });
                }
                if !seen_tables.insert(reservation.table().value()) {
                    return Err(Error::Parse {
                        path: records_path.clone(),
                        line: line_number,
                        message: format!(
                            "table {} referenced by more than one reservation",
                            reservation.table()
                        ),
                    });
                }

                self.board.book(reservation.table());
                self.next_id = self.next_id.max(reservation.id().number() + 1);
                self.reservations.push(reservation);
            }
        }

        let counter_path = self.data_dir.join(NEXT_ID_FILE);
        if counter_path.exists() {
            let contents = fs::read_to_string(&counter_path)?;
            if let Ok(saved) = contents.trim().parse::<u64>() {
                self.next_id = self.next_id.max(saved);
            }
        }

        Ok(())
    }
}
