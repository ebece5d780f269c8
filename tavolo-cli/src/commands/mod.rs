//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the data directory and empty backing files
//! - `reserve`: Book a table for a customer
//! - `update`: Change fields of an existing reservation
//! - `cancel`: Cancel a reservation and free its table
//! - `list`: List reservations in table, JSON, or CSV form
//! - `tables`: Show the table availability board
//! - `account`: Manage customer and receptionist accounts
//! - `logs`: Print the audit log

pub mod account;
pub mod cancel;
pub mod init;
pub mod list;
pub mod logs;
pub mod reserve;
pub mod tables;
pub mod update;

pub use account::AccountCommand;
pub use cancel::CancelCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use logs::LogsCommand;
pub use reserve::ReserveCommand;
pub use tables::TablesCommand;
pub use update::UpdateCommand;
