// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{self, ReportFilter};
use crate::budget;
use crate::store;
use crate::tags::TagCatalog;
use crate::utils::{fmt_inr, maybe_print_json, parse_limit, parse_period, pretty_table};
use crate::workspace::Workspace;
use anyhow::Result;

pub fn handle(ws: &Workspace, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(ws, user, sub),
        Some(("overview", sub)) => overview(ws, user, sub),
        _ => Ok(()),
    }
}

fn set(ws: &Workspace, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let period = parse_period(sub.get_one::<String>("month").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();
    let limit = parse_limit(sub.get_one::<String>("amount").unwrap())?;
    let today = chrono::Local::now().date_naive();
    budget::set_limit(ws, user, period, category, limit, today)?;
    println!(
        "Budget set for {} {} / {} = {}",
        period.month_name(),
        period.year,
        category,
        limit
    );
    Ok(())
}

fn overview(ws: &Workspace, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let period = parse_period(sub.get_one::<String>("month").unwrap())?;
    let catalog = TagCatalog::load(&ws.tag_mapping_file())?;
    let txns = store::read_all(ws, user)?;
    let spent = aggregate::spending_by_category(&txns, &catalog, &ReportFilter::period(period));
    let limits = budget::load_limits(ws, user, period)?;
    let lines = budget::overview(&limits, &spent);

    if lines.is_empty() {
        println!(
            "No spending recorded for {} {}",
            period.month_name(),
            period.year
        );
        return Ok(());
    }
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &lines)? {
        let rows: Vec<Vec<String>> = lines
            .iter()
            .map(|l| {
                vec![
                    l.category.clone(),
                    fmt_inr(l.spent),
                    l.limit
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "Budget is not set".to_string()),
                    l.remaining.to_string(),
                    l.status.to_string(),
                ]
            })
            .collect();
        println!(
            "Budget overview for {} {}",
            period.month_name(),
            period.year
        );
        println!(
            "{}",
            pretty_table(
                &["Category", "Spent", "Budget", "Remaining", "Status"],
                rows
            )
        );
    }
    Ok(())
}
