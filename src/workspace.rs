// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::models::Period;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.tallybook", "Tallybook", "tallybook"));

/// On-disk layout of all ledger data. User identity is always passed in
/// explicitly; there is no ambient "current user" anywhere in the crate.
///
/// ```text
/// <root>/tag_mapping.csv
/// <root>/<user>/<user>_data.csv
/// <root>/<user>/<year>_<Month>_budget.csv
/// ```
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn at(root: impl Into<PathBuf>) -> Workspace {
        Workspace { root: root.into() }
    }

    /// Platform data directory, created on first use.
    pub fn default_location() -> Result<Workspace> {
        let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
            std::io::Error::other("could not determine platform-specific data dir")
        })?;
        let data_dir = proj.data_dir();
        fs::create_dir_all(data_dir)?;
        Ok(Workspace::at(data_dir))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Global tag→category mapping table, shared by all users.
    pub fn tag_mapping_file(&self) -> PathBuf {
        self.root.join("tag_mapping.csv")
    }

    pub fn user_dir(&self, user: &str) -> PathBuf {
        self.root.join(user)
    }

    pub fn transactions_file(&self, user: &str) -> PathBuf {
        self.user_dir(user).join(format!("{}_data.csv", user))
    }

    pub fn budget_file(&self, user: &str, period: Period) -> PathBuf {
        self.user_dir(user)
            .join(format!("{}_{}_budget.csv", period.year, period.month_name()))
    }

    pub fn ensure_user_dir(&self, user: &str) -> Result<PathBuf> {
        let dir = self.user_dir(user);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
