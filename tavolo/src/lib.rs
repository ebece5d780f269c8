#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tavolo
//!
//! A library for managing restaurant table reservations.
//!
//! The restaurant floor is a fixed pool of ten tables. A
//! [`ReservationStore`] owns the availability board and the reservation
//! records, validates every input field, allocates `ID <n>A` identifiers,
//! and rewrites its flat-file backing store after each mutation. Around
//! the store sit the supporting pieces a front end needs: role
//! permissions, credential storage, the audit log, configuration, and
//! diagnostic logging.
//!
//! ## Core Types
//!
//! - [`ReservationStore`]: the reservation lifecycle (reserve, update,
//!   cancel) plus queries
//! - [`Reservation`] and [`ReservationId`]: the record and its identifier
//! - [`TableIndex`] and [`TableBoard`]: the fixed table pool
//! - [`Clock`]: the reference instant for date/time validation
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```no_run
//! use tavolo::{Clock, ReservationStore, ReserveRequest, TableIndex};
//!
//! let clock = Clock::fixed("2025-05-22", 22, 19).unwrap();
//! let mut store = ReservationStore::open("/tmp/tavolo", clock).unwrap();
//!
//! let id = store.reserve(&ReserveRequest {
//!     customer: "alice".into(),
//!     phone: "123-456-7890".into(),
//!     party_size: 4,
//!     date: "2025-05-23".into(),
//!     time: "19:00".into(),
//!     table: TableIndex::try_from(3).unwrap(),
//! }).unwrap();
//! println!("booked under {id}");
//! ```

pub mod accounts;
pub mod audit;
pub mod config;
pub mod error;
pub mod logging;
pub mod reservation;
pub mod role;
pub mod store;
pub mod table;
pub mod validate;

// Re-export key types at crate root for convenience
pub use accounts::{AccountKind, AccountStore};
pub use audit::AuditLog;
pub use config::{default_data_dir, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{Reservation, ReservationId};
pub use role::{Action, Role};
pub use store::{ReservationStore, ReserveRequest, UpdatePatch};
pub use table::{TableBoard, TableIndex, TABLE_COUNT};
pub use validate::{Clock, ValidationError};
