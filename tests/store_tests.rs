// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use tallybook::models::{Direction, Transaction};
use tallybook::store;
use tallybook::workspace::Workspace;

fn txn(date: &str, amount: u64, tags: &[&str]) -> Transaction {
    Transaction {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        account_name: "ACME".to_string(),
        description: "NEFT/1/2/ACME, order".to_string(),
        amount,
        direction: Direction::Expense,
        spending_type: "Uncategorized".to_string(),
        payment_method: "Bank Transfer".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn missing_store_is_lazily_created_with_header() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::at(dir.path());
    let txns = store::read_all(&ws, "alice").unwrap();
    assert!(txns.is_empty());
    let content = std::fs::read_to_string(ws.transactions_file("alice")).unwrap();
    assert_eq!(
        content.lines().next().unwrap(),
        "date,Account Name,description,amount,category,type,payment_method,tags"
    );
}

#[test]
fn round_trip_preserves_date_amount_and_tags() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::at(dir.path());
    let original = txn("2024-03-09", 1234, &["food", "swiggy"]);
    store::append(&ws, "alice", &[original.clone()]).unwrap();

    let read = store::read_all(&ws, "alice").unwrap();
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].date, original.date);
    assert_eq!(read[0].amount, original.amount);
    assert_eq!(read[0].tags, original.tags);
    assert_eq!(read[0].description, original.description);
    assert_eq!(read[0].direction, Direction::Expense);
}

#[test]
fn appends_are_not_deduplicated() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::at(dir.path());
    let t = txn("2024-03-09", 100, &[]);
    store::append(&ws, "alice", &[t.clone()]).unwrap();
    store::append(&ws, "alice", &[t]).unwrap();
    assert_eq!(store::read_all(&ws, "alice").unwrap().len(), 2);
}

#[test]
fn stores_are_scoped_per_user() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::at(dir.path());
    store::append(&ws, "alice", &[txn("2024-03-09", 100, &[])]).unwrap();
    assert_eq!(store::read_all(&ws, "alice").unwrap().len(), 1);
    assert!(store::read_all(&ws, "bob").unwrap().is_empty());
}

#[test]
fn split_tags_normalizes_to_lowercase() {
    assert_eq!(
        store::split_tags(" Food, TRAVEL ,,  "),
        vec!["food".to_string(), "travel".to_string()]
    );
    assert!(store::split_tags("").is_empty());
}
