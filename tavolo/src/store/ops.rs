//! Mutating store operations: reserve, update, and cancel.
//!
//! Each operation validates everything it can before touching the board or
//! the record list, so a failed operation leaves the store exactly as it
//! found it. Persistence is a full rewrite at the end of the operation.

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId};
use crate::table::TableIndex;
use crate::validate;

use super::ReservationStore;

/// Parameters for a reserve operation. All fields are required; raw string
/// fields are validated by [`ReservationStore::reserve`].
#[derive(Debug, Clone)]
pub struct ReserveRequest {
    /// Customer name.
    pub customer: String,
    /// Phone number in `NNN-NNN-NNNN` form.
    pub phone: String,
    /// Party size, at least 1.
    pub party_size: u32,
    /// Reservation date in `YYYY-MM-DD` form.
    pub date: String,
    /// Reservation time in 24-hour `HH:MM` form.
    pub time: String,
    /// The table to book.
    pub table: TableIndex,
}

/// Replacement fields for an update operation.
///
/// `None` means "keep the current value", the library-level rendition of
/// the original input convention where `0` left a field untouched.
///
/// # Examples
///
/// ```
/// use tavolo::UpdatePatch;
///
/// let patch = UpdatePatch::new()
///     .with_party_size(Some(6))
///     .with_time(Some("20:00".to_string()));
/// assert!(!patch.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UpdatePatch {
    /// Replacement reservation ID.
    pub new_id: Option<String>,
    /// Replacement customer name.
    pub customer: Option<String>,
    /// Replacement phone number.
    pub phone: Option<String>,
    /// Replacement party size.
    pub party_size: Option<u32>,
    /// Replacement date.
    pub date: Option<String>,
    /// Replacement time.
    pub time: Option<String>,
    /// Replacement table.
    pub table: Option<TableIndex>,
}

impl UpdatePatch {
    /// Creates an empty patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement reservation ID.
    #[must_use]
    pub fn with_new_id(mut self, new_id: Option<String>) -> Self {
        self.new_id = new_id;
        self
    }

    /// Sets the replacement customer name.
    #[must_use]
    pub fn with_customer(mut self, customer: Option<String>) -> Self {
        self.customer = customer;
        self
    }

    /// Sets the replacement phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the replacement party size.
    #[must_use]
    pub const fn with_party_size(mut self, party_size: Option<u32>) -> Self {
        self.party_size = party_size;
        self
    }

    /// Sets the replacement date.
    #[must_use]
    pub fn with_date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    /// Sets the replacement time.
    #[must_use]
    pub fn with_time(mut self, time: Option<String>) -> Self {
        self.time = time;
        self
    }

    /// Sets the replacement table.
    #[must_use]
    pub const fn with_table(mut self, table: Option<TableIndex>) -> Self {
        self.table = table;
        self
    }

    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.new_id.is_none()
            && self.customer.is_none()
            && self.phone.is_none()
            && self.party_size.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.table.is_none()
    }
}

impl ReservationStore {
    /// Reserves a table.
    ///
    /// Validates every field, books the table, allocates the next free ID
    /// (skipping any already in use), appends the record, and persists.
    /// Allocated IDs are monotonically non-decreasing.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] naming the offending field.
    /// - [`Error::TableConflict`] if the table is already booked.
    /// - [`Error::Io`] if persisting fails.
    pub fn reserve(&mut self, request: &ReserveRequest) -> Result<ReservationId> {
        validate::phone(&request.phone)?;
        validate::party_size(request.party_size)?;
        self.clock.validate_date(&request.date)?;
        self.clock.validate_time(&request.time, &request.date)?;
        let customer = validate::customer_name(&request.customer)?;

        if !self.board.is_available(request.table) {
            return Err(Error::TableConflict {
                table: request.table,
            });
        }

        let id = self.allocate_id();
        let reservation = Reservation::new(
            id.clone(),
            &customer,
            &request.phone,
            request.party_size,
            &request.date,
            &request.time,
            request.table,
        )?;

        self.board.book(request.table);
        self.reservations.push(reservation);
        self.persist()?;
        Ok(id)
    }

    /// Updates an existing reservation in place.
    ///
    /// With a customer filter, only that customer's record matches. All
    /// supplied fields are validated before anything changes, so a failure
    /// leaves both the record and the availability board untouched. When
    /// the patch supplies a time but no date, the time is checked against
    /// the reference date.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the ID is absent (or owned by someone else
    ///   when filtered).
    /// - [`Error::Validation`] naming the offending patch field.
    /// - [`Error::IdConflict`] if the new ID belongs to another record.
    /// - [`Error::TableConflict`] if the new table is booked by another
    ///   record.
    /// - [`Error::Io`] if persisting fails.
    pub fn update(
        &mut self,
        id: &str,
        customer_filter: Option<&str>,
        patch: &UpdatePatch,
    ) -> Result<()> {
        let id = ReservationId::parse(id)?;
        let index = self.find(&id, customer_filter)?;

        // Validate the whole patch before mutating anything.
        let new_id = match &patch.new_id {
            Some(raw) => {
                let parsed = ReservationId::parse(raw).map_err(|e| Error::Validation {
                    field: "new_id".into(),
                    message: e.message,
                })?;
                if self.id_exists(&parsed, Some(&id)) {
                    return Err(Error::IdConflict { id: parsed });
                }
                Some(parsed)
            }
            None => None,
        };
        let customer = match &patch.customer {
            Some(raw) => Some(validate::customer_name(raw)?),
            None => None,
        };
        if let Some(phone) = &patch.phone {
            validate::phone(phone)?;
        }
        if let Some(size) = patch.party_size {
            validate::party_size(size)?;
        }
        if let Some(date) = &patch.date {
            self.clock.validate_date(date)?;
        }
        if let Some(time) = &patch.time {
            let date_context = patch.date.as_deref().unwrap_or_else(|| self.clock.date());
            self.clock.validate_time(time, date_context)?;
        }

        let old_table = self.reservations[index].table();
        if let Some(new_table) = patch.table {
            if new_table != old_table && !self.board.is_available(new_table) {
                return Err(Error::TableConflict { table: new_table });
            }
        }

        // Everything validated; apply the patch.
        if let Some(new_table) = patch.table {
            if new_table != old_table {
                self.board.release(old_table);
                self.board.book(new_table);
            }
        }

        let record = &mut self.reservations[index];
        if let Some(new_id) = new_id {
            record.set_id(new_id);
        }
        if let Some(customer) = customer {
            record.set_customer(customer);
        }
        if let Some(phone) = &patch.phone {
            record.set_phone(phone.clone());
        }
        if let Some(size) = patch.party_size {
            record.set_party_size(size);
        }
        if let Some(date) = &patch.date {
            record.set_date(date.clone());
        }
        if let Some(time) = &patch.time {
            record.set_time(time.clone());
        }
        if let Some(table) = patch.table {
            record.set_table(table);
        }

        self.persist()
    }

    /// Cancels a reservation, releasing its table.
    ///
    /// Removes every record matching the ID (uniqueness makes that one in
    /// practice) and returns the first removed record so callers can report
    /// its details.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if the ID is malformed.
    /// - [`Error::NotFound`] if the ID is absent (or owned by someone else
    ///   when filtered).
    /// - [`Error::Io`] if persisting fails.
    pub fn cancel(&mut self, id: &str, customer_filter: Option<&str>) -> Result<Reservation> {
        let id = ReservationId::parse(id)?;
        let index = self.find(&id, customer_filter)?;

        self.board.release(self.reservations[index].table());
        let removed = self.reservations.remove(index);
        self.reservations.retain(|r| r.id() != &id);

        self.persist()?;
        Ok(removed)
    }

    /// Allocates the next free ID, skipping values already in use, and
    /// advances the counter past it.
    fn allocate_id(&mut self) -> ReservationId {
        let mut candidate = ReservationId::from_number(self.next_id);
        while self.id_exists(&candidate, None) {
            self.next_id += 1;
            candidate = ReservationId::from_number(self.next_id);
        }
        self.next_id += 1;
        candidate
    }
}
