// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::models::{Direction, Transaction};
use crate::tags::{TagCatalog, UNCATEGORIZED};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;
use std::path::Path;

/// Fixed column labels assigned after the marker row, truncated to however
/// many columns the sheet actually has.
pub const STATEMENT_COLUMNS: [&str; 7] = [
    "Txn Date",
    "Value Date",
    "Description",
    "Ref No./Cheque No.",
    "Debit",
    "Credit",
    "Balance",
];

const HEADER_MARKER: &str = "txn date";

const COL_DATE: usize = 0;
const COL_DESCRIPTION: usize = 2;
const COL_DEBIT: usize = 4;
const COL_CREDIT: usize = 5;

/// Parse a bank statement workbook (.xls or .xlsx) into normalized
/// transactions. The whole import fails on a malformed layout or an
/// unparseable date; nothing is emitted partially.
pub fn parse_workbook(path: &Path, catalog: &TagCatalog) -> Result<Vec<Transaction>> {
    if !path.exists() {
        return Err(LedgerError::MissingFile(path.to_path_buf()));
    }
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LedgerError::Format("workbook has no sheets".into()))??;
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect())
        .collect();
    parse_rows(rows, catalog)
}

/// Core of the parser, a pure function over extracted cell text so the
/// heuristics are testable without workbook fixtures.
pub fn parse_rows(rows: Vec<Vec<String>>, catalog: &TagCatalog) -> Result<Vec<Transaction>> {
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .filter(|r| r.iter().any(|c| !c.trim().is_empty()))
        .collect();

    // Data starts on the row after the first first-column cell that
    // mentions the marker, case-insensitively.
    let start = rows
        .iter()
        .position(|r| {
            r.first()
                .is_some_and(|c| c.to_lowercase().contains(HEADER_MARKER))
        })
        .ok_or_else(|| {
            LedgerError::Format(format!(
                "no '{}' header row found in statement",
                STATEMENT_COLUMNS[COL_DATE]
            ))
        })?
        + 1;

    let mut out = Vec::new();
    for row in &rows[start..] {
        let cell = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");
        let date_raw = cell(COL_DATE);
        let description = cell(COL_DESCRIPTION);
        let debit = cell(COL_DEBIT);
        let credit = cell(COL_CREDIT);

        // Rows still missing a required field are dropped, not fatal.
        if date_raw.is_empty() || description.is_empty() {
            continue;
        }
        let (amount_raw, direction) = if !debit.is_empty() {
            (debit, Direction::Expense)
        } else if !credit.is_empty() {
            (credit, Direction::Income)
        } else {
            continue;
        };

        let date = parse_statement_date(date_raw)?;
        let amount = parse_statement_amount(amount_raw)?;
        let tags = catalog.match_tags(description);

        out.push(Transaction {
            date,
            account_name: counterparty(description),
            description: description.to_string(),
            amount,
            direction,
            spending_type: UNCATEGORIZED.to_string(),
            payment_method: "Bank Transfer".to_string(),
            tags,
        });
    }
    Ok(out)
}

/// Counterparty heuristic: card keywords win over slash-splitting, and a
/// description without either yields `Unknown`.
pub fn counterparty(description: &str) -> String {
    let upper = description.to_uppercase();
    if upper.contains("DEBIT CARD") {
        return "Debit Card".to_string();
    }
    if upper.contains("CREDIT CARD") {
        return "Credit Card".to_string();
    }
    let parts: Vec<&str> = description.split('/').collect();
    if parts.len() > 3 {
        parts[3].trim().to_string()
    } else {
        "Unknown".to_string()
    }
}

fn parse_statement_date(raw: &str) -> Result<NaiveDate> {
    // Banks are not consistent here; serial cells arrive pre-normalized
    // from cell_to_string, string cells come in a handful of layouts.
    const FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d %b %Y"];
    let head = raw.split_whitespace().next().unwrap_or(raw);
    for fmt in FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Ok(d);
        }
        if let Ok(d) = NaiveDate::parse_from_str(head, fmt) {
            return Ok(d);
        }
    }
    Err(LedgerError::Format(format!(
        "unparseable transaction date '{}'",
        raw
    )))
}

fn parse_statement_amount(raw: &str) -> Result<u64> {
    let cleaned = raw.replace(',', "");
    let value = cleaned
        .parse::<f64>()
        .map_err(|_| LedgerError::Format(format!("unparseable amount '{}'", raw)))?;
    if value < 0.0 {
        return Err(LedgerError::Format(format!(
            "negative amount '{}' in statement",
            raw
        )));
    }
    // fractional currency is truncated, not rounded
    Ok(value.trunc() as u64)
}

/// Excel serial date, epoch 1899-12-30 (accounting for the 1900 leap year bug).
pub fn excel_serial_to_date(serial: f64) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    base + chrono::Duration::days(serial as i64)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64())
            .format("%Y-%m-%d")
            .to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}
