// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::statement;
use crate::store;
use crate::tags::TagCatalog;
use crate::workspace::Workspace;
use anyhow::Result;
use std::path::Path;

pub fn handle(ws: &Workspace, user: &str, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("statement", sub)) => import_statement(ws, user, sub),
        _ => Ok(()),
    }
}

fn import_statement(ws: &Workspace, user: &str, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let catalog = TagCatalog::load(&ws.tag_mapping_file())?;

    // Parse the whole statement before touching the store: a format error
    // anywhere aborts the import with no partial writes.
    let txns = statement::parse_workbook(Path::new(path), &catalog)?;
    if txns.is_empty() {
        println!("No transactions found in {}", path);
        return Ok(());
    }
    store::append(ws, user, &txns)?;

    let tagged = txns.iter().filter(|t| !t.tags.is_empty()).count();
    println!(
        "Imported {} transactions from {} ({} matched at least one tag)",
        txns.len(),
        path,
        tagged
    );
    Ok(())
}
