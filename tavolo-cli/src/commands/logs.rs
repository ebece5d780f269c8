//! Logs command implementation.
//!
//! Prints the audit log verbatim. Admin only.

use clap::Args;

use crate::error::CliError;
use crate::utils::{audit_log, ensure_permitted, load_configuration, GlobalOptions};
use tavolo::Action;

/// Print the audit log.
#[derive(Args)]
pub struct LogsCommand {}

impl LogsCommand {
    /// Execute the logs command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        ensure_permitted(global, Action::ViewLogs, "view the audit log")?;

        let config = load_configuration(global)?;
        let contents = audit_log(&config).read_all()?;
        print!("{contents}");
        Ok(())
    }
}
