//! Account command implementation.
//!
//! Creates and verifies the plain-text credential accounts carried over
//! from the interactive system. Customers self-register; receptionist
//! accounts are created by an administrator.

use clap::{Args, Subcommand};

use crate::error::CliError;
use crate::utils::{audit_log, ensure_permitted, load_configuration, GlobalOptions};
use tavolo::{Action, AccountKind, AccountStore};

/// Manage customer and receptionist accounts.
#[derive(Args)]
pub struct AccountCommand {
    #[command(subcommand)]
    pub action: AccountAction,
}

/// Account subcommands.
#[derive(Subcommand)]
pub enum AccountAction {
    /// Create an account
    Add {
        /// Username (letters and numbers only)
        username: String,

        /// Password (letters and numbers only)
        #[arg(long, value_name = "PASSWORD")]
        password: String,

        /// Create a receptionist account instead of a customer account
        #[arg(long)]
        receptionist: bool,
    },

    /// Check a username/password pair
    Verify {
        /// Username to check
        username: String,

        /// Password to check
        #[arg(long, value_name = "PASSWORD")]
        password: String,

        /// Check against receptionist accounts instead of customers
        #[arg(long)]
        receptionist: bool,
    },
}

impl AccountCommand {
    /// Execute the account command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        std::fs::create_dir_all(&config.data_dir)?;

        match self.action {
            AccountAction::Add {
                username,
                password,
                receptionist,
            } => {
                // Customers self-register; staff accounts are admin-only.
                let kind = if receptionist {
                    ensure_permitted(global, Action::ManageAccounts, "create staff accounts")?;
                    AccountKind::Receptionist
                } else {
                    AccountKind::Customer
                };

                let mut accounts = AccountStore::open(&config.data_dir, kind)?;
                accounts.add(&username, &password)?;

                let label = match kind {
                    AccountKind::Customer => "Created customer account",
                    AccountKind::Receptionist => "Created receptionist account",
                };
                audit_log(&config).record_action(
                    global.role,
                    &global.user,
                    label,
                    &format!("Username: {username}"),
                    None,
                )?;
                println!("Account '{username}' created");
                Ok(())
            }
            AccountAction::Verify {
                username,
                password,
                receptionist,
            } => {
                let kind = if receptionist {
                    AccountKind::Receptionist
                } else {
                    AccountKind::Customer
                };
                let accounts = AccountStore::open(&config.data_dir, kind)?;
                if accounts.verify(&username, &password) {
                    println!("Credentials valid for '{username}'");
                    Ok(())
                } else {
                    Err(CliError::SemanticFailure(format!(
                        "invalid credentials for '{username}'"
                    )))
                }
            }
        }
    }
}
