//! Table types: the fixed pool of dining tables and its availability board.
//!
//! The restaurant floor has exactly [`TABLE_COUNT`] tables. Internally
//! tables are addressed by zero-based [`TableIndex`]; everything shown to a
//! user (displays, error messages) is 1-based.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of tables on the floor.
pub const TABLE_COUNT: usize = 10;

/// A valid zero-based table index (0 to [`TABLE_COUNT`] - 1).
///
/// # Examples
///
/// ```
/// use tavolo::TableIndex;
///
/// let table = TableIndex::try_from(3).unwrap();
/// assert_eq!(table.value(), 3);
/// assert_eq!(table.display_number(), 4);
/// assert!(TableIndex::try_from(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableIndex(usize);

impl TableIndex {
    /// Returns the underlying zero-based index.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Returns the 1-based table number shown to users.
    #[must_use]
    pub const fn display_number(self) -> usize {
        self.0 + 1
    }

    /// Creates a table index from a 1-based table number.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is outside 1 to [`TABLE_COUNT`].
    pub fn from_display_number(number: usize) -> Result<Self, InvalidTableError> {
        if (1..=TABLE_COUNT).contains(&number) {
            Ok(Self(number - 1))
        } else {
            Err(InvalidTableError { value: number })
        }
    }
}

impl TryFrom<usize> for TableIndex {
    type Error = InvalidTableError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < TABLE_COUNT {
            Ok(Self(value))
        } else {
            Err(InvalidTableError { value })
        }
    }
}

impl fmt::Display for TableIndex {
    /// Displays the 1-based table number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_number())
    }
}

/// Error type for out-of-range table numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTableError {
    /// The rejected value.
    pub value: usize,
}

impl fmt::Display for InvalidTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid table number {}: must be between 1 and {TABLE_COUNT}",
            self.value
        )
    }
}

impl std::error::Error for InvalidTableError {}

/// Availability board for the fixed pool of tables.
///
/// Each slot is `true` when the table is available and `false` when it is
/// booked. The store maintains the invariant that a slot is booked iff
/// exactly one active reservation references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBoard {
    slots: [bool; TABLE_COUNT],
}

impl TableBoard {
    /// Creates a board with every table available.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [true; TABLE_COUNT],
        }
    }

    /// Returns `true` if the given table is available.
    #[must_use]
    pub const fn is_available(&self, table: TableIndex) -> bool {
        self.slots[table.value()]
    }

    /// Marks a table as booked.
    pub(crate) fn book(&mut self, table: TableIndex) {
        self.slots[table.value()] = false;
    }

    /// Marks a table as available again.
    pub(crate) fn release(&mut self, table: TableIndex) {
        self.slots[table.value()] = true;
    }

    /// Returns the full availability snapshot, index 0 first.
    #[must_use]
    pub const fn slots(&self) -> [bool; TABLE_COUNT] {
        self.slots
    }

    /// Number of currently booked tables.
    #[must_use]
    pub fn booked_count(&self) -> usize {
        self.slots.iter().filter(|available| !**available).count()
    }
}

impl Default for TableBoard {
    fn default() -> Self {
        Self::new()
    }
}
