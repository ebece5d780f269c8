//! Utility functions shared across CLI commands: configuration loading,
//! store construction, permission gating, and the sentinel convention.

use std::path::PathBuf;

use crate::error::CliError;
use tavolo::{Action, AuditLog, Config, ConfigBuilder, ReservationStore, Role};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Acting role.
    pub role: Role,

    /// Acting user name.
    pub user: String,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Explicit configuration file.
    pub config_file: Option<PathBuf>,

    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Load the merged configuration, with CLI flags taking precedence.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .with_data_dir(global.data_dir.clone())
        .with_config_file(global.config_file.clone())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the reservation store described by the configuration.
pub fn open_store(config: &Config) -> Result<ReservationStore, CliError> {
    let clock = config.clock()?;
    Ok(ReservationStore::open(&config.data_dir, clock)?)
}

/// The audit log rooted in the configured data directory.
pub fn audit_log(config: &Config) -> AuditLog {
    AuditLog::new(&config.data_dir)
}

/// Refuse the operation unless the acting role permits it.
pub fn ensure_permitted(global: &GlobalOptions, action: Action, label: &str) -> Result<(), CliError> {
    if global.role.may(action) {
        Ok(())
    } else {
        Err(CliError::PermissionDenied {
            role: global.role,
            action: label.to_string(),
        })
    }
}

/// The ownership filter for mutating operations: customers only touch
/// their own records, staff roles see everything.
pub fn customer_filter(global: &GlobalOptions) -> Option<&str> {
    if global.role.requires_ownership() {
        Some(global.user.as_str())
    } else {
        None
    }
}

/// Applies the keep-current sentinel: a literal `"0"` means the field is
/// left unchanged, matching the update convention of the menus this tool
/// replaces.
pub fn sentinel(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(role: Role) -> GlobalOptions {
        GlobalOptions {
            role,
            user: "alice".to_string(),
            data_dir: None,
            config_file: None,
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn test_sentinel() {
        assert_eq!(sentinel(None), None);
        assert_eq!(sentinel(Some("0".to_string())), None);
        assert_eq!(sentinel(Some("20:00".to_string())), Some("20:00".to_string()));
    }

    #[test]
    fn test_customer_filter_scopes_customers_only() {
        assert_eq!(customer_filter(&global(Role::Customer)), Some("alice"));
        assert_eq!(customer_filter(&global(Role::Admin)), None);
        assert_eq!(customer_filter(&global(Role::Receptionist)), None);
    }

    #[test]
    fn test_ensure_permitted() {
        assert!(ensure_permitted(&global(Role::Customer), Action::Reserve, "reserve").is_ok());
        let err =
            ensure_permitted(&global(Role::Receptionist), Action::Reserve, "reserve").unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
