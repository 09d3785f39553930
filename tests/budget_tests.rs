// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tallybook::budget;
use tallybook::error::LedgerError;
use tallybook::models::{BudgetStatus, Period};
use tallybook::workspace::Workspace;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn past_periods_are_locked() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::at(dir.path());
    let today = d(2024, 6, 15);
    let err = budget::set_limit(
        &ws,
        "alice",
        Period { year: 2024, month: 5 },
        "Dining",
        Decimal::from(500),
        today,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::PeriodLocked { year: 2024, month: 5 }
    ));
    // future periods are just as locked as past ones
    let err = budget::set_limit(
        &ws,
        "alice",
        Period { year: 2024, month: 7 },
        "Dining",
        Decimal::from(500),
        today,
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::PeriodLocked { .. }));
}

#[test]
fn current_period_limit_is_set_and_retrievable() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::at(dir.path());
    let period = Period { year: 2024, month: 6 };
    let today = d(2024, 6, 15);
    budget::set_limit(&ws, "alice", period, "Dining", Decimal::from(500), today).unwrap();
    budget::set_limit(&ws, "alice", period, "Travel", Decimal::from(1200), today).unwrap();

    let limits = budget::load_limits(&ws, "alice", period).unwrap();
    assert_eq!(limits["Dining"], Decimal::from(500));
    assert_eq!(limits["Travel"], Decimal::from(1200));

    // overwriting one category keeps the others
    budget::set_limit(&ws, "alice", period, "Dining", Decimal::from(600), today).unwrap();
    let limits = budget::load_limits(&ws, "alice", period).unwrap();
    assert_eq!(limits.len(), 2);
    assert_eq!(limits["Dining"], Decimal::from(600));
}

#[test]
fn missing_budget_file_means_no_limits() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::at(dir.path());
    let limits = budget::load_limits(&ws, "alice", Period { year: 2024, month: 6 }).unwrap();
    assert!(limits.is_empty());
}

#[test]
fn overview_reports_status_per_category() {
    let mut limits = BTreeMap::new();
    limits.insert("Dining".to_string(), Decimal::from(500));
    limits.insert("Travel".to_string(), Decimal::from(100));
    let mut spent = BTreeMap::new();
    spent.insert("Dining".to_string(), 300u64);
    spent.insert("Travel".to_string(), 250u64);

    let lines = budget::overview(&limits, &spent);
    assert_eq!(lines.len(), 2);
    let dining = lines.iter().find(|l| l.category == "Dining").unwrap();
    assert_eq!(dining.remaining, Decimal::from(200));
    assert_eq!(dining.status, BudgetStatus::WithinBudget);
    let travel = lines.iter().find(|l| l.category == "Travel").unwrap();
    assert_eq!(travel.remaining, Decimal::from(-150));
    assert_eq!(travel.status, BudgetStatus::ExceedingBudget);
}

#[test]
fn unset_limit_is_distinct_from_explicit_zero() {
    let mut limits = BTreeMap::new();
    limits.insert("Travel".to_string(), Decimal::ZERO);
    let mut spent = BTreeMap::new();
    spent.insert("Dining".to_string(), 300u64);
    spent.insert("Travel".to_string(), 100u64);

    let lines = budget::overview(&limits, &spent);
    let dining = lines.iter().find(|l| l.category == "Dining").unwrap();
    assert_eq!(dining.limit, None);
    assert_eq!(dining.status, BudgetStatus::ExceedingBudget);
    let travel = lines.iter().find(|l| l.category == "Travel").unwrap();
    assert_eq!(travel.limit, Some(Decimal::ZERO));
    assert_eq!(travel.status, BudgetStatus::ExceedingBudget);
}

#[test]
fn budget_file_round_trips_through_its_period_path() {
    let dir = tempfile::tempdir().unwrap();
    let ws = Workspace::at(dir.path());
    let period = Period { year: 2024, month: 6 };
    budget::set_limit(&ws, "alice", period, "Dining", Decimal::new(12550, 2), d(2024, 6, 1))
        .unwrap();
    let path = ws.budget_file("alice", period);
    assert!(path.ends_with("alice/2024_June_budget.csv"));
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.starts_with("Category,Budget"));
    assert!(content.contains("Dining,125.50"));
}
