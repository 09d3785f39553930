// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether money moved in or out. Stored in the `category` column of the
/// user file; distinct from the tag-mapped spending category in `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Income => "Income",
            Direction::Expense => "Expense",
        }
    }

    pub fn parse(s: &str) -> Result<Direction, LedgerError> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("income") => Ok(Direction::Income),
            v if v.eq_ignore_ascii_case("expense") => Ok(Direction::Expense),
            other => Err(LedgerError::Validation {
                field: "category",
                reason: format!("'{}' is not Income or Expense", other),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One append-only ledger record. Never updated or deleted once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub account_name: String,
    pub description: String,
    /// Whole currency units; fractional paise are truncated on import.
    pub amount: u64,
    pub direction: Direction,
    /// Tag-mapped spending category, `Uncategorized` until a tag resolves.
    pub spending_type: String,
    pub payment_method: String,
    /// Lowercase-normalized tag set; may be empty.
    pub tags: Vec<String>,
}

/// A (year, month) pair scoping budget records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn of(date: NaiveDate) -> Period {
        Period {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn month_name(&self) -> &'static str {
        crate::utils::month_name(self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    WithinBudget,
    ExceedingBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetStatus::WithinBudget => f.write_str("Within Budget"),
            BudgetStatus::ExceedingBudget => f.write_str("Exceeding Budget"),
        }
    }
}

/// One row of the budget overview. `limit: None` means no budget was set for
/// the category, which is distinct from an explicit limit of zero.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetLine {
    pub category: String,
    pub spent: u64,
    pub limit: Option<Decimal>,
    pub remaining: Decimal,
    pub status: BudgetStatus,
}
