//! Field validation and the reference clock.
//!
//! Every user-supplied field passes through one of the validators here
//! before it reaches the store. Shape checks (phone, date, and time
//! formats, party size, customer name) are pure; the past/future checks on
//! dates and times are relative to a [`Clock`], which is either sampled
//! from the system or pinned to a fixed instant for reproducible runs and
//! tests.
//!
//! Date ordering is plain string comparison (ISO `YYYY-MM-DD` sorts
//! chronologically); times compare as (hour, minute) pairs. Month and day
//! components are range-checked but not calendar-checked.

use std::fmt;

use chrono::{Datelike, Local, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("valid regex pattern"));

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex pattern"));

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid regex pattern"));

/// Error type for validation failures.
///
/// Carries the name of the offending field so callers can point the user
/// at exactly what to fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a phone number against the `NNN-NNN-NNNN` format.
///
/// # Errors
///
/// Returns an error naming the `phone` field if the format does not match.
pub fn phone(value: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "phone",
            "invalid phone number format, use XXX-XXX-XXXX",
        ))
    }
}

/// Validates a party size.
///
/// # Errors
///
/// Returns an error naming the `party_size` field if the size is zero.
pub fn party_size(value: u32) -> Result<(), ValidationError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ValidationError::new(
            "party_size",
            "party size must be at least 1",
        ))
    }
}

/// Validates and normalizes a customer name.
///
/// Names are trimmed; the result must be non-empty and must not contain
/// the `|` record separator used by the persisted format.
///
/// # Errors
///
/// Returns an error naming the `customer` field.
pub fn customer_name(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            "customer",
            "customer name must be non-empty",
        ));
    }
    if trimmed.contains('|') {
        return Err(ValidationError::new(
            "customer",
            "customer name must not contain '|'",
        ));
    }
    Ok(trimmed.to_string())
}

/// Validates the shape of a `YYYY-MM-DD` date.
///
/// Month must be 01-12 and day 01-31; days are not checked against the
/// month's actual length.
///
/// # Errors
///
/// Returns an error naming the `date` field.
pub fn date_format(value: &str) -> Result<(), ValidationError> {
    if !DATE_RE.is_match(value) {
        return Err(ValidationError::new(
            "date",
            "invalid date format, use YYYY-MM-DD",
        ));
    }
    let month: u32 = value[5..7].parse().unwrap_or(0);
    let day: u32 = value[8..10].parse().unwrap_or(0);
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(ValidationError::new(
            "date",
            "month must be 01-12 and day 01-31",
        ));
    }
    Ok(())
}

/// Validates the shape of a 24-hour `HH:MM` time and returns its parts.
///
/// # Errors
///
/// Returns an error naming the `time` field.
pub fn time_format(value: &str) -> Result<(u32, u32), ValidationError> {
    if !TIME_RE.is_match(value) {
        return Err(ValidationError::new(
            "time",
            "invalid time format, use HH:MM in 24-hour notation",
        ));
    }
    let hour: u32 = value[0..2].parse().unwrap_or(24);
    let minute: u32 = value[3..5].parse().unwrap_or(60);
    if hour > 23 || minute > 59 {
        return Err(ValidationError::new(
            "time",
            "hour must be 00-23 and minute 00-59",
        ));
    }
    Ok((hour, minute))
}

/// The reference instant that date and time validation compares against.
///
/// Reservations may not be made for dates before the clock's date, nor for
/// times at or before the clock's time on the clock's own date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    date: String,
    hour: u32,
    minute: u32,
}

impl Clock {
    /// Creates a clock pinned to a fixed date and time.
    ///
    /// # Errors
    ///
    /// Returns an error if the date or the time components are out of
    /// range.
    pub fn fixed(date: &str, hour: u32, minute: u32) -> Result<Self, ValidationError> {
        date_format(date)?;
        if hour > 23 || minute > 59 {
            return Err(ValidationError::new(
                "time",
                "hour must be 00-23 and minute 00-59",
            ));
        }
        Ok(Self {
            date: date.to_string(),
            hour,
            minute,
        })
    }

    /// Creates a clock from the current local date and time.
    #[must_use]
    pub fn system_now() -> Self {
        let now = Local::now();
        Self {
            date: format!("{:04}-{:02}-{:02}", now.year(), now.month(), now.day()),
            hour: now.hour(),
            minute: now.minute(),
        }
    }

    /// The reference date in `YYYY-MM-DD` form.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The reference time in `HH:MM` form.
    #[must_use]
    pub fn time_display(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Validates a reservation date: well-formed and not before the
    /// reference date.
    ///
    /// # Errors
    ///
    /// Returns an error naming the `date` field.
    pub fn validate_date(&self, date: &str) -> Result<(), ValidationError> {
        date_format(date)?;
        // ISO dates compare chronologically as strings.
        if date < self.date.as_str() {
            return Err(ValidationError::new(
                "date",
                format!("date is in the past, must be on or after {}", self.date),
            ));
        }
        Ok(())
    }

    /// Validates a reservation time: well-formed, and strictly after the
    /// reference time when `date` equals the reference date.
    ///
    /// # Errors
    ///
    /// Returns an error naming the `time` field.
    pub fn validate_time(&self, time: &str, date: &str) -> Result<(), ValidationError> {
        let (hour, minute) = time_format(time)?;
        if date == self.date && (hour, minute) <= (self.hour, self.minute) {
            return Err(ValidationError::new(
                "time",
                format!(
                    "time is in the past for today, must be after {}",
                    self.time_display()
                ),
            ));
        }
        Ok(())
    }
}
