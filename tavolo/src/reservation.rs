//! Reservation types: identifiers and the reservation record itself.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::table::TableIndex;
use crate::validate::{self, ValidationError};

static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ID \d+A$").expect("valid regex pattern"));

/// A reservation identifier in the canonical form `ID <n>A`.
///
/// Parsing is case-insensitive; the stored form is always uppercase, so
/// two spellings of the same identifier compare equal.
///
/// # Examples
///
/// ```
/// use tavolo::ReservationId;
///
/// let id = ReservationId::parse("id 7a").unwrap();
/// assert_eq!(id.as_str(), "ID 7A");
/// assert_eq!(id.number(), 7);
/// assert!(ReservationId::parse("7A").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    /// Parses an identifier, normalizing it to uppercase.
    ///
    /// # Errors
    ///
    /// Returns an error naming the `id` field if the input does not match
    /// `ID <number>A` (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let upper = value.trim().to_uppercase();
        if ID_RE.is_match(&upper) {
            Ok(Self(upper))
        } else {
            Err(ValidationError::new(
                "id",
                "invalid reservation ID format, use 'ID <number>A', e.g. ID 1A",
            ))
        }
    }

    /// Builds the identifier for a given counter value.
    #[must_use]
    pub fn from_number(number: u64) -> Self {
        Self(format!("ID {number}A"))
    }

    /// Returns the numeric component of the identifier.
    #[must_use]
    pub fn number(&self) -> u64 {
        // Canonical form is "ID <digits>A"; strip the prefix and suffix.
        self.0[3..self.0.len() - 1].parse().unwrap_or(0)
    }

    /// Returns the canonical uppercase form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A single table reservation.
///
/// Constructed through [`Reservation::new`], which validates the shape of
/// every field. Whether the date and time are still in the future is a
/// store-level concern: records loaded from disk may legitimately lie in
/// the past.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    customer: String,
    phone: String,
    party_size: u32,
    date: String,
    time: String,
    table: TableIndex,
}

impl Reservation {
    /// Creates a reservation, validating every field's shape.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending field: customer name
    /// empty or containing `|`, malformed phone number, party size of
    /// zero, or malformed date or time.
    pub fn new(
        id: ReservationId,
        customer: &str,
        phone: &str,
        party_size: u32,
        date: &str,
        time: &str,
        table: TableIndex,
    ) -> Result<Self, ValidationError> {
        let customer = validate::customer_name(customer)?;
        validate::phone(phone)?;
        validate::party_size(party_size)?;
        validate::date_format(date)?;
        validate::time_format(time)?;
        Ok(Self {
            id,
            customer,
            phone: phone.to_string(),
            party_size,
            date: date.to_string(),
            time: time.to_string(),
            table,
        })
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub fn id(&self) -> &ReservationId {
        &self.id
    }

    /// Returns the customer name.
    #[must_use]
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the party size.
    #[must_use]
    pub const fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Returns the reservation date in `YYYY-MM-DD` form.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the reservation time in `HH:MM` form.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the reserved table.
    #[must_use]
    pub const fn table(&self) -> TableIndex {
        self.table
    }

    // In-place mutators for the update operation. The store validates the
    // replacement values before calling these.

    pub(crate) fn set_id(&mut self, id: ReservationId) {
        self.id = id;
    }

    pub(crate) fn set_customer(&mut self, customer: String) {
        self.customer = customer;
    }

    pub(crate) fn set_phone(&mut self, phone: String) {
        self.phone = phone;
    }

    pub(crate) fn set_party_size(&mut self, party_size: u32) {
        self.party_size = party_size;
    }

    pub(crate) fn set_date(&mut self, date: String) {
        self.date = date;
    }

    pub(crate) fn set_time(&mut self, time: String) {
        self.time = time;
    }

    pub(crate) fn set_table(&mut self, table: TableIndex) {
        self.table = table;
    }
}
