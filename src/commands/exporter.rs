// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{self, STORE_HEADER};
use crate::workspace::Workspace;
use anyhow::Result;
use chrono::Datelike;
use serde_json::json;

pub fn handle(ws: &Workspace, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ws, user, sub),
        _ => Ok(()),
    }
}

fn export_transactions(ws: &Workspace, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut txns = store::read_all(ws, user)?;
    if let Some(&year) = sub.get_one::<i32>("year") {
        txns.retain(|t| t.date.year() == year);
    }
    if let Some(&month) = sub.get_one::<u32>("month") {
        txns.retain(|t| t.date.month() == month);
    }

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(STORE_HEADER)?;
            for t in &txns {
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
        }
        "json" => {
            let items: Vec<_> = txns
                .iter()
                .map(|t| {
                    json!({
                        "date": t.date.format("%Y-%m-%d").to_string(),
                        "account_name": t.account_name,
                        "description": t.description,
                        "amount": t.amount,
                        "category": t.direction.to_string(),
                        "type": t.spending_type,
                        "payment_method": t.payment_method,
                        "tags": t.tags,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => unreachable!("clap restricts format values"),
    }
    println!("Exported {} transactions to {}", txns.len(), out);
    Ok(())
}
