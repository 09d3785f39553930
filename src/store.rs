// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::models::{Direction, Transaction};
use crate::workspace::Workspace;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// Fixed schema of the per-user store file.
pub const STORE_HEADER: [&str; 8] = [
    "date",
    "Account Name",
    "description",
    "amount",
    "category",
    "type",
    "payment_method",
    "tags",
];

/// Create the user's directory and store file with the schema header if they
/// do not exist yet. Returns the store path either way.
pub fn ensure(ws: &Workspace, user: &str) -> Result<PathBuf> {
    ws.ensure_user_dir(user)?;
    let path = ws.transactions_file(user);
    if !path.exists() {
        let mut wtr = csv::Writer::from_path(&path)?;
        wtr.write_record(STORE_HEADER)?;
        wtr.flush()?;
    }
    Ok(path)
}

/// Append transactions to the user's store. Append-only: there is no update
/// or delete path, and repeated imports are not deduplicated. Two sessions
/// appending to the same user's store can interleave; single-user operation
/// is assumed.
pub fn append(ws: &Workspace, user: &str, txns: &[Transaction]) -> Result<()> {
    let path = ensure(ws, user)?;
    let file = fs::OpenOptions::new().append(true).open(&path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    for t in txns {
        wtr.write_record([
            t.date.format("%Y-%m-%d").to_string(),
            t.account_name.clone(),
            t.description.clone(),
            t.amount.to_string(),
            t.direction.to_string(),
            t.spending_type.clone(),
            t.payment_method.clone(),
            t.tags.join(", "),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read the user's full ledger, lazily creating an empty store on first
/// access.
pub fn read_all(ws: &Workspace, user: &str) -> Result<Vec<Transaction>> {
    let path = ensure(ws, user)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let get = |i: usize| rec.get(i).map(str::trim).unwrap_or("");
        if get(0).is_empty() {
            continue;
        }
        let date = NaiveDate::parse_from_str(get(0), "%Y-%m-%d").map_err(|_| {
            LedgerError::Format(format!("bad date '{}' in {}", get(0), path.display()))
        })?;
        let amount: u64 = get(3).parse().map_err(|_| {
            LedgerError::Format(format!("bad amount '{}' in {}", get(3), path.display()))
        })?;
        let direction = Direction::parse(get(4)).map_err(|_| {
            LedgerError::Format(format!("bad category '{}' in {}", get(4), path.display()))
        })?;
        out.push(Transaction {
            date,
            account_name: get(1).to_string(),
            description: get(2).to_string(),
            amount,
            direction,
            spending_type: get(5).to_string(),
            payment_method: get(6).to_string(),
            tags: split_tags(get(7)),
        });
    }
    Ok(out)
}

/// Split a comma-separated tag field, lowercase-normalizing each tag and
/// dropping empties.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
