//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AccountCommand, CancelCommand, InitCommand, ListCommand, LogsCommand, ReserveCommand,
    TablesCommand, UpdateCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tavolo::Role;

/// Command-line tool for managing restaurant table reservations.
#[derive(Parser)]
#[command(name = "tavolo")]
#[command(version, about = "Manage restaurant table reservations", long_about = None)]
pub struct Cli {
    /// Acting role
    #[arg(long, value_enum, default_value = "customer", global = true, env = "TAVOLO_ROLE")]
    pub role: RoleArg,

    /// Acting user name (the customer identity for customer-role commands)
    #[arg(long, value_name = "NAME", default_value = "guest", global = true, env = "TAVOLO_USER")]
    pub user: String,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "TAVOLO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use an explicit configuration file
    #[arg(long, value_name = "PATH", global = true, env = "TAVOLO_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The acting role, as accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RoleArg {
    /// A dining customer
    Customer,
    /// Front-desk staff
    Receptionist,
    /// Administrator
    Admin,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Customer => Self::Customer,
            RoleArg::Receptionist => Self::Receptionist,
            RoleArg::Admin => Self::Admin,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the data directory and empty backing files
    Init(InitCommand),

    /// Book a table for a customer
    Reserve(ReserveCommand),

    /// Change fields of an existing reservation
    Update(UpdateCommand),

    /// Cancel a reservation and free its table
    Cancel(CancelCommand),

    /// List reservations
    List(ListCommand),

    /// Show the table availability board
    Tables(TablesCommand),

    /// Manage customer and receptionist accounts
    Account(AccountCommand),

    /// Print the audit log
    Logs(LogsCommand),
}
