//! Credential storage for customer and receptionist accounts.
//!
//! Accounts are `username|password` lines in a per-kind file under the
//! data directory. This is a deliberately simple plain-text store carried
//! over from the system this tool replaces; it is not a secure credential
//! vault and should not be treated as one.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::validate::ValidationError;

/// Which population an account store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Self-registered dining customers.
    Customer,
    /// Staff accounts created by an administrator.
    Receptionist,
}

impl AccountKind {
    /// The backing file name for this kind within the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Customer => "customer_accounts.txt",
            Self::Receptionist => "receptionist_accounts.txt",
        }
    }
}

/// A persistent username/password store for one account kind.
#[derive(Debug)]
pub struct AccountStore {
    path: PathBuf,
    accounts: BTreeMap<String, String>,
}

impl AccountStore {
    /// Opens the store for the given kind, loading any existing accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file exists but cannot be read, or
    /// contains a line without a `|` separator.
    pub fn open(data_dir: &Path, kind: AccountKind) -> Result<Self> {
        let path = data_dir.join(kind.file_name());
        let mut accounts = BTreeMap::new();

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            for (index, line) in contents.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let Some((username, password)) = line.split_once('|') else {
                    return Err(Error::Parse {
                        path: path.clone(),
                        line: index + 1,
                        message: "expected 'username|password'".to_string(),
                    });
                };
                accounts.insert(username.to_string(), password.to_string());
            }
        }

        Ok(Self { path, accounts })
    }

    /// Adds an account and persists the store.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if the username or password is empty or
    ///   contains non-alphanumeric characters.
    /// - [`Error::AccountExists`] if the username is taken.
    /// - [`Error::Io`] if persisting fails.
    pub fn add(&mut self, username: &str, password: &str) -> Result<()> {
        validate_credential("username", username)?;
        validate_credential("password", password)?;
        if self.accounts.contains_key(username) {
            return Err(Error::AccountExists {
                username: username.to_string(),
            });
        }
        self.accounts
            .insert(username.to_string(), password.to_string());
        self.persist()
    }

    /// Returns `true` if the username and password match a stored account.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.accounts.get(username).is_some_and(|p| p == password)
    }

    /// Returns `true` if the username is taken.
    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    /// Number of stored accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` if no accounts are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Rewrites the backing file from the in-memory map.
    fn persist(&self) -> Result<()> {
        let mut contents = String::new();
        for (username, password) in &self.accounts {
            contents.push_str(username);
            contents.push('|');
            contents.push_str(password);
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Credentials must be non-empty and strictly alphanumeric.
fn validate_credential(field: &str, value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::new(
            field,
            "must be non-empty and use letters and numbers only",
        )
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = AccountStore::open(dir.path(), AccountKind::Customer).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_and_verify() {
        let dir = tempdir().unwrap();
        let mut store = AccountStore::open(dir.path(), AccountKind::Customer).unwrap();

        store.add("alice", "secret1").unwrap();
        assert!(store.contains("alice"));
        assert!(store.verify("alice", "secret1"));
        assert!(!store.verify("alice", "wrong"));
        assert!(!store.verify("bob", "secret1"));
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let dir = tempdir().unwrap();
        let mut store = AccountStore::open(dir.path(), AccountKind::Customer).unwrap();

        store.add("alice", "secret1").unwrap();
        let err = store.add("alice", "other2").unwrap_err();
        assert!(matches!(err, Error::AccountExists { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_credential_validation() {
        let dir = tempdir().unwrap();
        let mut store = AccountStore::open(dir.path(), AccountKind::Customer).unwrap();

        for (username, password) in [("", "pw1"), ("user name", "pw1"), ("alice", ""), ("alice", "p w")]
        {
            let err = store.add(username, password).unwrap_err();
            assert!(err.is_validation(), "{username:?}/{password:?}");
        }
    }

    #[test]
    fn test_persists_and_reloads() {
        let dir = tempdir().unwrap();
        {
            let mut store = AccountStore::open(dir.path(), AccountKind::Receptionist).unwrap();
            store.add("rita", "frontdesk1").unwrap();
            store.add("ravi", "frontdesk2").unwrap();
        }
        let store = AccountStore::open(dir.path(), AccountKind::Receptionist).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.verify("rita", "frontdesk1"));
        assert!(store.verify("ravi", "frontdesk2"));
    }

    #[test]
    fn test_kinds_use_separate_files() {
        let dir = tempdir().unwrap();
        let mut customers = AccountStore::open(dir.path(), AccountKind::Customer).unwrap();
        customers.add("alice", "pw1").unwrap();

        let staff = AccountStore::open(dir.path(), AccountKind::Receptionist).unwrap();
        assert!(!staff.contains("alice"));
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(AccountKind::Customer.file_name()),
            "no-separator-here\n",
        )
        .unwrap();
        let err = AccountStore::open(dir.path(), AccountKind::Customer).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }
}
