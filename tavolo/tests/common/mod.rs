//! Shared helpers for library integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use tavolo::{Clock, ReservationStore, ReserveRequest, TableIndex};
use tempfile::TempDir;

/// An isolated store rooted in a temporary directory, pinned to the fixed
/// reference instant 2025-05-22 22:19.
pub struct TestStore {
    // Held so the directory outlives the store.
    #[allow(dead_code)]
    pub dir: TempDir,
    pub store: ReservationStore,
}

pub fn fixed_clock() -> Clock {
    Clock::fixed("2025-05-22", 22, 19).unwrap()
}

pub fn open_store() -> TestStore {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = ReservationStore::open(dir.path(), fixed_clock()).expect("failed to open store");
    TestStore { dir, store }
}

/// A well-formed reserve request for the given customer and table index.
pub fn request(customer: &str, table: usize) -> ReserveRequest {
    ReserveRequest {
        customer: customer.to_string(),
        phone: "123-456-7890".to_string(),
        party_size: 4,
        date: "2025-06-01".to_string(),
        time: "19:00".to_string(),
        table: TableIndex::try_from(table).expect("table index in range"),
    }
}
