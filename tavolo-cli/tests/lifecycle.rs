//! Integration tests for the reservation lifecycle across commands:
//! update, cancel, list, and the ownership rules between roles.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn update_changes_fields_in_place() {
    let env = TestEnv::new();
    let id = env.reserve("alice", 2);

    // A new time with no new date is checked against the reference date,
    // so it must land after the 22:19 reference clock.
    env.command()
        .args(["--role", "admin", "update", &id])
        .args(["--party-size", "6", "--time", "23:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated ID 1A"));

    let listing = env.list_as("admin", "root");
    assert!(listing.contains("\t6\t"));
    assert!(listing.contains("23:00"));
}

#[test]
fn update_sentinel_zero_keeps_current_values() {
    let env = TestEnv::new();
    let id = env.reserve("alice", 2);

    env.command()
        .args(["--role", "admin", "update", &id])
        .args(["--name", "0", "--phone", "0", "--party-size", "0"])
        .args(["--date", "0", "--time", "0", "--table", "0"])
        .assert()
        .success();

    let listing = env.list_as("admin", "root");
    assert!(listing.contains("alice"));
    assert!(listing.contains("123-456-7890"));
    assert!(listing.contains("2025-06-01"));
    assert!(listing.contains("19:00"));
}

#[test]
fn update_moves_the_booking_between_tables() {
    let env = TestEnv::new();
    let id = env.reserve("alice", 2);

    env.command()
        .args(["--role", "admin", "update", &id, "--table", "9"])
        .assert()
        .success();

    let board = env.tables();
    assert!(board.contains("Table 2 is AVAILABLE"));
    assert!(board.contains("Table 9 is BOOKED"));
}

#[test]
fn update_to_a_booked_table_fails_atomically() {
    let env = TestEnv::new();
    let alice = env.reserve("alice", 2);
    env.reserve("bob", 7);

    env.command()
        .args(["--role", "admin", "update", &alice, "--table", "7"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already booked"));

    let board = env.tables();
    assert!(board.contains("Table 2 is BOOKED"));
    assert!(board.contains("Table 7 is BOOKED"));
}

#[test]
fn update_can_rename_the_id() {
    let env = TestEnv::new();
    let id = env.reserve("alice", 1);

    env.command()
        .args(["--role", "admin", "update", &id, "--new-id", "ID 9A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated ID 9A"));

    // The old ID no longer resolves; the new one cancels fine.
    env.command()
        .args(["--role", "admin", "cancel", &id])
        .assert()
        .failure()
        .code(1);
    env.command()
        .args(["--role", "admin", "cancel", "ID 9A"])
        .assert()
        .success();
}

#[test]
fn renaming_onto_an_existing_id_is_a_conflict() {
    let env = TestEnv::new();
    let alice = env.reserve("alice", 1);
    env.reserve("bob", 2);

    env.command()
        .args(["--role", "admin", "update", &alice, "--new-id", "ID 2A"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn cancel_frees_the_table() {
    let env = TestEnv::new();
    let id = env.reserve("alice", 3);
    assert!(env.tables().contains("Table 3 is BOOKED"));

    env.command()
        .args(["--role", "admin", "cancel", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled ID 1A"));

    assert!(env.tables().contains("Table 3 is AVAILABLE"));
    assert!(env.list_as("admin", "root").contains("No reservations found."));
}

#[test]
fn cancel_accepts_lowercase_ids() {
    let env = TestEnv::new();
    env.reserve("alice", 3);

    env.command()
        .args(["--role", "admin", "cancel", "id 1a"])
        .assert()
        .success();
}

#[test]
fn cancel_unknown_id_is_not_found() {
    let env = TestEnv::new();
    env.command()
        .args(["--role", "admin", "cancel", "ID 41A"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn customers_only_touch_their_own_reservations() {
    let env = TestEnv::new();
    let id = env.reserve("alice", 1);

    // Bob cannot cancel or update Alice's booking.
    env.command()
        .args(["--role", "customer", "--user", "bob", "cancel", &id])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
    env.command()
        .args(["--role", "customer", "--user", "bob", "update", &id, "--party-size", "2"])
        .assert()
        .failure()
        .code(1);

    // Alice can.
    env.command()
        .args(["--role", "customer", "--user", "alice", "update", &id, "--party-size", "2"])
        .assert()
        .success();
    env.command()
        .args(["--role", "customer", "--user", "alice", "cancel", &id])
        .assert()
        .success();
}

#[test]
fn customer_list_is_scoped_to_the_user() {
    let env = TestEnv::new();
    env.reserve("alice", 1);
    env.reserve("bob", 2);

    let alice_view = env.list_as("customer", "alice");
    assert!(alice_view.contains("alice"));
    assert!(!alice_view.contains("bob"));

    let all = env.list_as("receptionist", "rita");
    assert!(all.contains("alice"));
    assert!(all.contains("bob"));
}

#[test]
fn list_table_format_has_headers_and_one_based_tables() {
    let env = TestEnv::new();
    env.reserve("alice", 4);

    let listing = env.list_as("admin", "root");
    let mut lines = listing.lines();
    assert_eq!(
        lines.next().unwrap(),
        "ID\tCustomer\tParty\tDate\tTime\tContact\tTable"
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("ID 1A\talice\t4\t2025-06-01\t19:00\t123-456-7890\t5"));
}

#[test]
fn list_json_round_trips() {
    let env = TestEnv::new();
    env.reserve("alice", 4);

    let output = env
        .command()
        .args(["--role", "admin", "list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list --format json must emit valid JSON");
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "ID 1A");
    assert_eq!(rows[0]["customer"], "alice");
    // JSON carries the zero-based index, as persisted.
    assert_eq!(rows[0]["table"], 3);
}

#[test]
fn list_csv_has_header_row() {
    let env = TestEnv::new();
    env.reserve("alice", 4);

    let output = env
        .command()
        .args(["--role", "admin", "list", "--format", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), "id,customer,party_size,date,time,phone,table");
    assert_eq!(lines.next().unwrap(), "ID 1A,alice,4,2025-06-01,19:00,123-456-7890,3");
}

#[test]
fn state_survives_across_invocations() {
    let env = TestEnv::new();
    env.reserve("alice", 1);
    env.reserve("bob", 2);

    // Every command run is a fresh process over the same data directory.
    let listing = env.list_as("admin", "root");
    assert_eq!(listing.lines().count(), 3); // header + two rows

    let board = env.tables();
    assert!(board.contains("Table 1 is BOOKED"));
    assert!(board.contains("Table 2 is BOOKED"));
    assert!(board.contains("Table 3 is AVAILABLE"));
}
