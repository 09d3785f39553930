// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Direction, Transaction};
use crate::store;
use crate::tags::{TagCatalog, UNCATEGORIZED};
use crate::utils::{fmt_inr, maybe_print_json, parse_amount, parse_date, pretty_table};
use crate::workspace::Workspace;
use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;

pub fn handle(ws: &Workspace, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ws, user, sub),
        Some(("list", sub)) => list(ws, user, sub),
        _ => Ok(()),
    }
}

fn add(ws: &Workspace, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let account_name = sub.get_one::<String>("account").unwrap().trim().to_string();
    let description = sub
        .get_one::<String>("description")
        .unwrap()
        .trim()
        .to_string();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let direction = Direction::parse(sub.get_one::<String>("direction").unwrap())?;
    let payment_method = sub
        .get_one::<String>("payment-method")
        .unwrap()
        .trim()
        .to_string();
    let tags = store::split_tags(sub.get_one::<String>("tags").unwrap());

    // The spending type follows the first tag's category; the mapping table
    // is required for that, same as every categorizing operation.
    let catalog = TagCatalog::load(&ws.tag_mapping_file())?;
    let spending_type = tags
        .first()
        .map(|t| catalog.category_for(t).to_string())
        .unwrap_or_else(|| UNCATEGORIZED.to_string());

    let txn = Transaction {
        date,
        account_name: account_name.clone(),
        description,
        amount,
        direction,
        spending_type,
        payment_method,
        tags,
    };
    store::append(ws, user, &[txn])?;
    println!(
        "Recorded {} {} on {} at '{}'",
        direction,
        fmt_inr(amount),
        date,
        account_name
    );
    Ok(())
}

fn list(ws: &Workspace, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ws, user, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.account_name.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.r#type.clone(),
                    r.payment_method.clone(),
                    r.tags.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "Date",
                    "Account Name",
                    "Description",
                    "Amount",
                    "Category",
                    "Type",
                    "Payment Method",
                    "Tags"
                ],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub account_name: String,
    pub description: String,
    pub amount: String,
    pub category: String,
    pub r#type: String,
    pub payment_method: String,
    pub tags: String,
}

pub fn query_rows(
    ws: &Workspace,
    user: &str,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let mut txns = store::read_all(ws, user)?;

    if let Some(&year) = sub.get_one::<i32>("year") {
        txns.retain(|t| t.date.year() == year);
    }
    if let Some(&month) = sub.get_one::<u32>("month") {
        txns.retain(|t| t.date.month() == month);
    }
    if let Some(account) = sub.get_one::<String>("account") {
        txns.retain(|t| t.account_name == *account);
    }
    if sub.get_flag("untagged") {
        txns.retain(|t| t.tags.is_empty());
    }

    // newest first; store order breaks ties
    txns.reverse();
    txns.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(&limit) = sub.get_one::<usize>("limit") {
        txns.truncate(limit);
    }

    Ok(txns
        .into_iter()
        .map(|t| TransactionRow {
            date: t.date.format("%Y-%m-%d").to_string(),
            account_name: t.account_name,
            description: t.description,
            amount: t.amount.to_string(),
            category: t.direction.to_string(),
            r#type: t.spending_type,
            payment_method: t.payment_method,
            tags: t.tags.join(", "),
        })
        .collect())
}
