//! Line codec for the pipe-delimited reservation record format.
//!
//! One record per line: `id|name|phone|partySize|date|time|tableIndex`.
//! The table index is persisted zero-based.

use std::path::Path;

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId};
use crate::table::TableIndex;

/// Number of pipe-delimited fields in a record line.
const FIELD_COUNT: usize = 7;

/// Encodes a reservation as a record line (no trailing newline).
pub(super) fn encode_line(reservation: &Reservation) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}|{}",
        reservation.id(),
        reservation.customer(),
        reservation.phone(),
        reservation.party_size(),
        reservation.date(),
        reservation.time(),
        reservation.table().value()
    )
}

/// Parses one record line.
///
/// `path` and `line_number` locate the record for error reporting.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the line has the wrong field count or any
/// field is malformed.
pub(super) fn parse_line(line: &str, path: &Path, line_number: usize) -> Result<Reservation> {
    let malformed = |message: String| Error::Parse {
        path: path.to_path_buf(),
        line: line_number,
        message,
    };

    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {FIELD_COUNT} fields, found {}",
            fields.len()
        )));
    }

    let id = ReservationId::parse(fields[0]).map_err(|e| malformed(e.to_string()))?;
    let party_size: u32 = fields[3]
        .parse()
        .map_err(|_| malformed(format!("invalid party size '{}'", fields[3])))?;
    let table_value: usize = fields[6]
        .parse()
        .map_err(|_| malformed(format!("invalid table index '{}'", fields[6])))?;
    let table = TableIndex::try_from(table_value).map_err(|e| malformed(e.to_string()))?;

    Reservation::new(id, fields[1], fields[2], party_size, fields[4], fields[5], table)
        .map_err(|e| malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> Reservation {
        Reservation::new(
            ReservationId::from_number(1),
            "alice",
            "123-456-7890",
            4,
            "2099-06-15",
            "19:30",
            TableIndex::try_from(3).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_encode_line() {
        assert_eq!(
            encode_line(&sample()),
            "ID 1A|alice|123-456-7890|4|2099-06-15|19:30|3"
        );
    }

    #[test]
    fn test_parse_line_round_trip() {
        let path = PathBuf::from("reservations.txt");
        let parsed = parse_line(&encode_line(&sample()), &path, 1).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        let path = PathBuf::from("reservations.txt");
        let err = parse_line("ID 1A|alice|123-456-7890", &path, 3).unwrap_err();
        match err {
            Error::Parse { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("expected 7 fields"));
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_line_bad_id() {
        let path = PathBuf::from("reservations.txt");
        let err = parse_line("1A|alice|123-456-7890|4|2099-06-15|19:30|3", &path, 1);
        assert!(matches!(err, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_line_bad_party_size() {
        let path = PathBuf::from("reservations.txt");
        let err = parse_line("ID 1A|alice|123-456-7890|four|2099-06-15|19:30|3", &path, 1);
        assert!(matches!(err, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_line_table_out_of_range() {
        let path = PathBuf::from("reservations.txt");
        let err = parse_line("ID 1A|alice|123-456-7890|4|2099-06-15|19:30|10", &path, 1);
        assert!(matches!(err, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_line_normalizes_id_case() {
        let path = PathBuf::from("reservations.txt");
        let parsed = parse_line("id 2a|bob|555-000-1111|2|2099-01-01|12:00|0", &path, 1).unwrap();
        assert_eq!(parsed.id().as_str(), "ID 2A");
    }
}
