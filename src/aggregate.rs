// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Direction, Period, Transaction};
use crate::tags::{TagCatalog, INCOME_CATEGORY, UNCATEGORIZED};
use crate::utils::MONTH_NAMES;
use chrono::Datelike;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Optional year/month scope for a reporting view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl ReportFilter {
    pub fn year(year: i32) -> ReportFilter {
        ReportFilter {
            year: Some(year),
            month: None,
        }
    }

    pub fn period(period: Period) -> ReportFilter {
        ReportFilter {
            year: Some(period.year),
            month: Some(period.month),
        }
    }

    pub fn matches(&self, date: chrono::NaiveDate) -> bool {
        self.year.is_none_or(|y| date.year() == y) && self.month.is_none_or(|m| date.month() == m)
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct CategoryTotals {
    /// Per-category sums over exploded rows. A transaction with N tags
    /// contributes its full amount to each of the N mapped categories, so
    /// the sum of these values may exceed `total_expense`. This
    /// double-counting is deliberate and matches the numbers users see.
    pub by_category: BTreeMap<String, u64>,
    pub total_income: u64,
    pub total_expense: u64,
}

impl CategoryTotals {
    pub fn savings(&self) -> i64 {
        self.total_income as i64 - self.total_expense as i64
    }
}

/// Explode each transaction into one row per tag (a tagless transaction
/// yields a single `Uncategorized` row), map tags to categories, and sum.
///
/// Income/expense totals are counted once per transaction, not once per
/// exploded row: `total_income` sums Income-direction transactions, and
/// `total_expense` sums Expense-direction transactions whose mapped
/// categories are not all `Income`.
pub fn aggregate(
    txns: &[Transaction],
    catalog: &TagCatalog,
    filter: &ReportFilter,
) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for t in txns.iter().filter(|t| filter.matches(t.date)) {
        let categories: Vec<&str> = if t.tags.is_empty() {
            vec![UNCATEGORIZED]
        } else {
            t.tags.iter().map(|tag| catalog.category_for(tag)).collect()
        };
        for c in &categories {
            *totals.by_category.entry((*c).to_string()).or_default() += t.amount;
        }
        match t.direction {
            Direction::Income => totals.total_income += t.amount,
            Direction::Expense if categories.iter().any(|c| *c != INCOME_CATEGORY) => {
                totals.total_expense += t.amount
            }
            Direction::Expense => {}
        }
    }
    totals
}

/// Category totals with the `Income` category removed; feeds the budget
/// overview and spending reports.
pub fn spending_by_category(
    txns: &[Transaction],
    catalog: &TagCatalog,
    filter: &ReportFilter,
) -> BTreeMap<String, u64> {
    let mut by_category = aggregate(txns, catalog, filter).by_category;
    by_category.remove(INCOME_CATEGORY);
    by_category
}

/// Per-calendar-month amount sums for one year, always ordered
/// January..December regardless of insertion order.
pub fn monthly_totals(txns: &[Transaction], year: i32) -> Vec<(&'static str, u64)> {
    let mut sums = [0u64; 12];
    for t in txns {
        if t.date.year() == year {
            sums[t.date.month0() as usize] += t.amount;
        }
    }
    MONTH_NAMES.iter().zip(sums).map(|(n, s)| (*n, s)).collect()
}

/// Income minus spending per (year, month), chronological.
pub fn monthly_savings(txns: &[Transaction], catalog: &TagCatalog) -> Vec<(Period, i64)> {
    let periods: BTreeSet<Period> = txns.iter().map(|t| Period::of(t.date)).collect();
    periods
        .into_iter()
        .map(|p| {
            let totals = aggregate(txns, catalog, &ReportFilter::period(p));
            (p, totals.savings())
        })
        .collect()
}

/// Distinct years present in the ledger, ascending. Reports default to the
/// latest one.
pub fn years(txns: &[Transaction]) -> Vec<i32> {
    let set: BTreeSet<i32> = txns.iter().map(|t| t.date.year()).collect();
    set.into_iter().collect()
}

/// Plain sum of amounts in scope, without tag explosion.
pub fn total_amount(txns: &[Transaction], filter: &ReportFilter) -> u64 {
    txns.iter()
        .filter(|t| filter.matches(t.date))
        .map(|t| t.amount)
        .sum()
}
