// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use tallybook::aggregate::{self, ReportFilter};
use tallybook::models::{Direction, Transaction};
use tallybook::tags::TagCatalog;

fn catalog(rows: &[(&str, &str)]) -> TagCatalog {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tag_mapping.csv");
    let mut content = String::from("tag,category\n");
    for (tag, category) in rows {
        content.push_str(&format!("{},{}\n", tag, category));
    }
    std::fs::write(&path, content).unwrap();
    TagCatalog::load(&path).unwrap()
}

fn txn(date: &str, amount: u64, direction: Direction, tags: &[&str]) -> Transaction {
    Transaction {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        account_name: "ACME".to_string(),
        description: String::new(),
        amount,
        direction,
        spending_type: "Uncategorized".to_string(),
        payment_method: "Bank Transfer".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn multi_tag_transactions_contribute_full_amount_to_each_category() {
    let cat = catalog(&[("food", "Dining"), ("travel", "Travel")]);
    let txns = vec![txn("2024-01-05", 100, Direction::Expense, &["food", "travel"])];
    let totals = aggregate::aggregate(&txns, &cat, &ReportFilter::default());
    // full amount lands in both categories; category totals may exceed
    // total expense by design
    assert_eq!(totals.by_category["Dining"], 100);
    assert_eq!(totals.by_category["Travel"], 100);
    assert_eq!(totals.total_expense, 100);
    assert_eq!(
        totals.by_category.values().sum::<u64>(),
        200
    );
}

#[test]
fn tagless_transactions_land_in_uncategorized() {
    let cat = catalog(&[("food", "Dining")]);
    let txns = vec![txn("2024-01-05", 80, Direction::Expense, &[])];
    let totals = aggregate::aggregate(&txns, &cat, &ReportFilter::default());
    assert_eq!(totals.by_category["Uncategorized"], 80);
    assert_eq!(totals.total_expense, 80);
}

#[test]
fn savings_is_income_minus_expense_exactly() {
    let cat = catalog(&[("salary", "Income"), ("food", "Dining")]);
    let txns = vec![
        txn("2024-01-01", 5000, Direction::Income, &["salary"]),
        txn("2024-01-10", 1200, Direction::Expense, &["food"]),
        txn("2024-01-12", 300, Direction::Expense, &[]),
    ];
    let totals = aggregate::aggregate(&txns, &cat, &ReportFilter::default());
    assert_eq!(totals.total_income, 5000);
    assert_eq!(totals.total_expense, 1500);
    assert_eq!(totals.savings(), 3500);
}

#[test]
fn savings_goes_negative_without_income() {
    let cat = catalog(&[("food", "Dining")]);
    let txns = vec![txn("2024-01-10", 400, Direction::Expense, &["food"])];
    let totals = aggregate::aggregate(&txns, &cat, &ReportFilter::default());
    assert_eq!(totals.total_income, 0);
    assert_eq!(totals.savings(), -400);
}

#[test]
fn expense_mapped_only_to_income_category_is_not_counted_as_spending() {
    let cat = catalog(&[("salary", "Income")]);
    // a reversal tagged with an Income-mapped tag
    let txns = vec![txn("2024-01-10", 500, Direction::Expense, &["salary"])];
    let totals = aggregate::aggregate(&txns, &cat, &ReportFilter::default());
    assert_eq!(totals.total_expense, 0);
    assert_eq!(totals.by_category["Income"], 500);
}

#[test]
fn spending_by_category_excludes_the_income_category() {
    let cat = catalog(&[("salary", "Income"), ("food", "Dining")]);
    let txns = vec![
        txn("2024-01-01", 5000, Direction::Income, &["salary"]),
        txn("2024-01-10", 700, Direction::Expense, &["food"]),
    ];
    let spent = aggregate::spending_by_category(&txns, &cat, &ReportFilter::default());
    assert_eq!(spent.len(), 1);
    assert_eq!(spent["Dining"], 700);
}

#[test]
fn filter_scopes_by_year_and_month() {
    let cat = catalog(&[("food", "Dining")]);
    let txns = vec![
        txn("2023-12-31", 100, Direction::Expense, &["food"]),
        txn("2024-01-10", 200, Direction::Expense, &["food"]),
        txn("2024-02-01", 400, Direction::Expense, &["food"]),
    ];
    let jan = aggregate::aggregate(
        &txns,
        &cat,
        &ReportFilter {
            year: Some(2024),
            month: Some(1),
        },
    );
    assert_eq!(jan.total_expense, 200);
    let y2024 = aggregate::aggregate(&txns, &cat, &ReportFilter::year(2024));
    assert_eq!(y2024.total_expense, 600);
}

#[test]
fn monthly_totals_are_ordered_by_calendar_month() {
    // inserted out of order on purpose
    let txns = vec![
        txn("2024-11-05", 30, Direction::Expense, &[]),
        txn("2024-01-15", 10, Direction::Expense, &[]),
        txn("2024-01-20", 5, Direction::Income, &[]),
        txn("2023-06-01", 99, Direction::Expense, &[]),
    ];
    let monthly = aggregate::monthly_totals(&txns, 2024);
    assert_eq!(monthly.len(), 12);
    assert_eq!(monthly[0], ("January", 15));
    assert_eq!(monthly[10], ("November", 30));
    assert_eq!(monthly[5], ("June", 0));
}

#[test]
fn monthly_savings_trend_is_chronological() {
    let cat = catalog(&[("salary", "Income")]);
    let txns = vec![
        txn("2024-02-10", 100, Direction::Expense, &[]),
        txn("2024-01-01", 1000, Direction::Income, &["salary"]),
        txn("2024-01-10", 400, Direction::Expense, &[]),
    ];
    let trend = aggregate::monthly_savings(&txns, &cat);
    assert_eq!(trend.len(), 2);
    assert_eq!((trend[0].0.year, trend[0].0.month), (2024, 1));
    assert_eq!(trend[0].1, 600);
    assert_eq!(trend[1].1, -100);
}

#[test]
fn years_are_distinct_and_ascending() {
    let txns = vec![
        txn("2024-02-10", 1, Direction::Expense, &[]),
        txn("2022-02-10", 1, Direction::Expense, &[]),
        txn("2024-03-10", 1, Direction::Expense, &[]),
    ];
    assert_eq!(aggregate::years(&txns), vec![2022, 2024]);
}
