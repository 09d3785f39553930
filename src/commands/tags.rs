// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::tags::TagCatalog;
use crate::utils::{maybe_print_json, pretty_table};
use crate::workspace::Workspace;
use anyhow::Result;
use std::collections::BTreeMap;

pub fn handle(ws: &Workspace, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let catalog = TagCatalog::load(&ws.tag_mapping_file())?;
            let data: Vec<BTreeMap<&str, &str>> = catalog
                .iter()
                .map(|(tag, category)| BTreeMap::from([("tag", tag), ("category", category)]))
                .collect();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = catalog
                    .iter()
                    .map(|(t, c)| vec![t.to_string(), c.to_string()])
                    .collect();
                println!("{}", pretty_table(&["Tag", "Category"], rows));
            }
        }
        Some(("set", sub)) => {
            let tag = sub.get_one::<String>("tag").unwrap();
            let category = sub.get_one::<String>("category").unwrap();
            TagCatalog::upsert(&ws.tag_mapping_file(), tag, category)?;
            println!("Mapped tag '{}' -> {}", tag.trim().to_lowercase(), category);
        }
        Some(("categories", _)) => {
            let catalog = TagCatalog::load(&ws.tag_mapping_file())?;
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for (_, category) in catalog.iter() {
                *counts.entry(category).or_default() += 1;
            }
            let rows = counts
                .into_iter()
                .map(|(c, n)| vec![c.to_string(), n.to_string()])
                .collect();
            println!("{}", pretty_table(&["Category", "Tags"], rows));
        }
        _ => {}
    }
    Ok(())
}
