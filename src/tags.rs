// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Fallback category for unknown or absent tags.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Category name reserved for money coming in; reports treat it separately
/// from spending categories.
pub const INCOME_CATEGORY: &str = "Income";

/// The global tag→category mapping. Tags are lowercase and unique; lookups
/// are case-insensitive. Catalog order is file order, which keeps tag
/// matching during import deterministic.
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl TagCatalog {
    /// Load the mapping table. A missing table is fatal for any operation
    /// that depends on categorization, so the caller gets a typed error to
    /// surface rather than an empty catalog.
    pub fn load(path: &Path) -> Result<TagCatalog> {
        if !path.exists() {
            return Err(LedgerError::MissingFile(path.to_path_buf()));
        }
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        let mut catalog = TagCatalog::default();
        for rec in rdr.records() {
            let rec = rec?;
            let tag = rec.get(0).unwrap_or("").trim().to_lowercase();
            if tag.is_empty() {
                continue;
            }
            let category = rec.get(1).map(str::trim).unwrap_or("");
            let category = if category.is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                category.to_string()
            };
            // duplicate tags in the file resolve last-write-wins
            catalog.insert(tag, category);
        }
        Ok(catalog)
    }

    fn insert(&mut self, tag: String, category: String) {
        match self.index.get(&tag) {
            Some(&i) => self.entries[i].1 = category,
            None => {
                self.index.insert(tag.clone(), self.entries.len());
                self.entries.push((tag, category));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), c.as_str()))
    }

    pub fn category_for(&self, tag: &str) -> &str {
        self.index
            .get(&tag.trim().to_lowercase())
            .map(|&i| self.entries[i].1.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    pub fn categorize<'a, I>(&self, tags: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter()
            .map(|t| self.category_for(t).to_string())
            .collect()
    }

    /// Every known tag whose text occurs as a substring of the lowercased
    /// description, in catalog order. A description may match zero, one or
    /// many tags; all are retained.
    pub fn match_tags(&self, description: &str) -> Vec<String> {
        let hay = description.to_lowercase();
        self.entries
            .iter()
            .filter(|(tag, _)| hay.contains(tag.as_str()))
            .map(|(tag, _)| tag.clone())
            .collect()
    }

    /// Insert or replace one mapping and rewrite the table. Last write wins:
    /// re-mapping an existing tag replaces its category instead of appending
    /// a duplicate row. Creates the table if it does not exist yet.
    pub fn upsert(path: &Path, tag: &str, category: &str) -> Result<()> {
        let mut catalog = if path.exists() {
            TagCatalog::load(path)?
        } else {
            TagCatalog::default()
        };
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            return Err(LedgerError::Validation {
                field: "tag",
                reason: "tag cannot be empty".into(),
            });
        }
        catalog.insert(tag, category.trim().to_string());
        catalog.save(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(["tag", "category"])?;
        for (tag, category) in self.iter() {
            wtr.write_record([tag, category])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
