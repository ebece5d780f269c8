//! Roles and the actions they are permitted to perform.
//!
//! Roles are a plain tagged enum; callers gate each operation with
//! [`Role::may`] and dispatch to the store. A customer only ever operates
//! on their own records, which [`Role::requires_ownership`] signals to the
//! calling layer.

use std::fmt;
use std::str::FromStr;

/// The acting role for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A dining customer: manages their own reservations.
    Customer,
    /// Front-desk staff: read-only access to reservations and tables.
    Receptionist,
    /// Administrator: full access, including the audit log and staff
    /// accounts.
    Admin,
}

/// An operation subject to permission checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reserve a table.
    Reserve,
    /// Update an existing reservation.
    Update,
    /// Cancel an existing reservation.
    Cancel,
    /// List one customer's reservations.
    ListOwn,
    /// List every reservation.
    ListAll,
    /// View the table availability board.
    ViewTables,
    /// View the audit log.
    ViewLogs,
    /// Create receptionist accounts.
    ManageAccounts,
}

impl Role {
    /// Returns `true` if this role may perform the action.
    #[must_use]
    pub const fn may(self, action: Action) -> bool {
        match self {
            Self::Customer => matches!(
                action,
                Action::Reserve
                    | Action::Update
                    | Action::Cancel
                    | Action::ListOwn
                    | Action::ViewTables
            ),
            Self::Receptionist => matches!(
                action,
                Action::ListAll | Action::ListOwn | Action::ViewTables
            ),
            Self::Admin => matches!(
                action,
                Action::Update
                    | Action::Cancel
                    | Action::ListAll
                    | Action::ListOwn
                    | Action::ViewTables
                    | Action::ViewLogs
                    | Action::ManageAccounts
            ),
        }
    }

    /// Returns `true` if mutating operations by this role must be
    /// restricted to the actor's own records.
    #[must_use]
    pub const fn requires_ownership(self) -> bool {
        matches!(self, Self::Customer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Customer => "Customer",
            Self::Receptionist => "Receptionist",
            Self::Admin => "Admin",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "customer" => Ok(Self::Customer),
            "receptionist" => Ok(Self::Receptionist),
            "admin" => Ok(Self::Admin),
            other => Err(format!("invalid role: {other}")),
        }
    }
}
