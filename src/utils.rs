// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::models::Period;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| LedgerError::Validation {
        field: "date",
        reason: format!("'{}' is not a YYYY-MM-DD date", s.trim()),
    })
}

pub fn parse_period(s: &str) -> Result<Period> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation {
            field: "month",
            reason: format!("'{}' is not a YYYY-MM month", s.trim()),
        }
    })?;
    Ok(Period::of(date))
}

/// Transaction amounts are whole non-negative currency units.
pub fn parse_amount(s: &str) -> Result<u64> {
    s.trim()
        .parse::<u64>()
        .map_err(|_| LedgerError::Validation {
            field: "amount",
            reason: format!("'{}' is not a non-negative whole number", s.trim()),
        })
}

/// Budget limits allow fractional values; zero is a valid explicit limit.
pub fn parse_limit(s: &str) -> Result<Decimal> {
    let d = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_| LedgerError::Validation {
            field: "amount",
            reason: format!("'{}' is not a number", s.trim()),
        })?;
    if d < Decimal::ZERO {
        return Err(LedgerError::Validation {
            field: "amount",
            reason: "budget limit cannot be negative".into(),
        });
    }
    Ok(d)
}

/// Indian digit grouping: last three digits, then groups of two.
pub fn fmt_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    groups.push(&head[..i]);
    let mut out = String::from("₹");
    for g in groups.iter().rev() {
        out.push_str(g);
        out.push(',');
    }
    out.push_str(tail);
    out
}

pub fn fmt_inr_signed(amount: i64) -> String {
    if amount < 0 {
        format!("-{}", fmt_inr(amount.unsigned_abs()))
    } else {
        fmt_inr(amount as u64)
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> anyhow::Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
