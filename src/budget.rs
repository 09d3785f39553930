// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::models::{BudgetLine, BudgetStatus, Period};
use crate::workspace::Workspace;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

const BUDGET_HEADER: [&str; 2] = ["Category", "Budget"];

/// Set one category limit for a period. Budget records are mutable only
/// while their period is the current one; `today` is injected so callers
/// (and tests) decide what "current" means.
pub fn set_limit(
    ws: &Workspace,
    user: &str,
    period: Period,
    category: &str,
    limit: Decimal,
    today: NaiveDate,
) -> Result<()> {
    if Period::of(today) != period {
        return Err(LedgerError::PeriodLocked {
            year: period.year,
            month: period.month,
        });
    }
    let mut limits = load_limits(ws, user, period)?;
    limits.insert(category.trim().to_string(), limit);
    write_limits(ws, user, period, &limits)
}

/// Limits recorded for a period. A missing budget file just means nothing
/// was set yet.
pub fn load_limits(ws: &Workspace, user: &str, period: Period) -> Result<BTreeMap<String, Decimal>> {
    let path = ws.budget_file(user, period);
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&path)?;
    let mut limits = BTreeMap::new();
    for rec in rdr.records() {
        let rec = rec?;
        let category = rec.get(0).map(str::trim).unwrap_or("");
        if category.is_empty() {
            continue;
        }
        let raw = rec.get(1).map(str::trim).unwrap_or("");
        let limit = raw.parse::<Decimal>().map_err(|_| {
            LedgerError::Format(format!("bad budget '{}' in {}", raw, path.display()))
        })?;
        limits.insert(category.to_string(), limit);
    }
    Ok(limits)
}

fn write_limits(
    ws: &Workspace,
    user: &str,
    period: Period,
    limits: &BTreeMap<String, Decimal>,
) -> Result<()> {
    ws.ensure_user_dir(user)?;
    let mut wtr = csv::Writer::from_path(ws.budget_file(user, period))?;
    wtr.write_record(BUDGET_HEADER)?;
    for (category, limit) in limits {
        wtr.write_record([category.as_str(), &limit.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Compare recorded limits against spending. An unset limit is reported as
/// such (`limit: None`), not as zero — zero is a valid explicit limit. For
/// the remaining/status math an unset limit counts as nothing to spend.
pub fn overview(
    limits: &BTreeMap<String, Decimal>,
    spent_by_category: &BTreeMap<String, u64>,
) -> Vec<BudgetLine> {
    spent_by_category
        .iter()
        .map(|(category, &spent)| {
            let limit = limits.get(category).copied();
            let remaining = limit.unwrap_or(Decimal::ZERO) - Decimal::from(spent);
            let status = if remaining >= Decimal::ZERO {
                BudgetStatus::WithinBudget
            } else {
                BudgetStatus::ExceedingBudget
            };
            BudgetLine {
                category: category.clone(),
                spent,
                limit,
                remaining,
                status,
            }
        })
        .collect()
}
