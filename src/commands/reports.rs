// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{self, ReportFilter};
use crate::store;
use crate::tags::TagCatalog;
use crate::utils::{fmt_inr, fmt_inr_signed, maybe_print_json, pretty_table};
use crate::workspace::Workspace;
use anyhow::Result;
use serde_json::json;

pub fn handle(ws: &Workspace, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(ws, user, sub),
        Some(("portfolio", sub)) => portfolio(ws, user, sub),
        Some(("spend-by-category", sub)) => spend_by_category(ws, user, sub),
        _ => Ok(()),
    }
}

fn summary(ws: &Workspace, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let catalog = TagCatalog::load(&ws.tag_mapping_file())?;
    let txns = store::read_all(ws, user)?;

    let year = match sub.get_one::<i32>("year").copied() {
        Some(y) => y,
        None => match aggregate::years(&txns).last().copied() {
            Some(y) => y,
            None => {
                println!("No data available");
                return Ok(());
            }
        },
    };

    let monthly = aggregate::monthly_totals(&txns, year);
    let totals = aggregate::aggregate(&txns, &catalog, &ReportFilter::year(year));
    let year_total = aggregate::total_amount(&txns, &ReportFilter::year(year));

    if sub.get_flag("json") || sub.get_flag("jsonl") {
        let v = json!({
            "year": year,
            "monthly_totals": monthly.iter().map(|(m, a)| json!({"month": m, "amount": a})).collect::<Vec<_>>(),
            "by_category": totals.by_category,
            "year_total": year_total,
        });
        maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &v)?;
        return Ok(());
    }

    println!("Monthly transactions - {}", year);
    let rows = monthly
        .iter()
        .map(|(m, a)| vec![m.to_string(), fmt_inr(*a)])
        .collect();
    println!("{}", pretty_table(&["Month", "Amount"], rows));

    println!("Spending by tags");
    let rows = totals
        .by_category
        .iter()
        .map(|(c, a)| vec![c.clone(), fmt_inr(*a)])
        .collect();
    println!("{}", pretty_table(&["Category", "Amount"], rows));
    println!("Total amount in {}: {}", year, fmt_inr(year_total));
    Ok(())
}

fn portfolio(ws: &Workspace, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let catalog = TagCatalog::load(&ws.tag_mapping_file())?;
    let txns = store::read_all(ws, user)?;
    if txns.is_empty() {
        println!("No transactions available for this user");
        return Ok(());
    }

    let totals = aggregate::aggregate(&txns, &catalog, &ReportFilter::default());
    let trend = aggregate::monthly_savings(&txns, &catalog);

    if sub.get_flag("json") || sub.get_flag("jsonl") {
        let v = json!({
            "total_income": totals.total_income,
            "total_expense": totals.total_expense,
            "savings": totals.savings(),
            "monthly_savings": trend
                .iter()
                .map(|(p, s)| json!({"period": p.to_string(), "savings": s}))
                .collect::<Vec<_>>(),
        });
        maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &v)?;
        return Ok(());
    }

    println!("Total income:  {}", fmt_inr(totals.total_income));
    println!("Total spent:   {}", fmt_inr(totals.total_expense));
    println!("Savings:       {}", fmt_inr_signed(totals.savings()));

    println!("Monthly savings trend");
    let rows = trend
        .iter()
        .map(|(p, s)| {
            vec![
                format!("{} {}", p.month_name(), p.year),
                fmt_inr_signed(*s),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Savings"], rows));
    Ok(())
}

fn spend_by_category(ws: &Workspace, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let catalog = TagCatalog::load(&ws.tag_mapping_file())?;
    let txns = store::read_all(ws, user)?;
    let filter = ReportFilter {
        year: sub.get_one::<i32>("year").copied(),
        month: sub.get_one::<u32>("month").copied(),
    };
    let spent = aggregate::spending_by_category(&txns, &catalog, &filter);

    let mut items: Vec<(String, u64)> = spent.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
        let rows = items
            .into_iter()
            .map(|(c, a)| vec![c, fmt_inr(a)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}
