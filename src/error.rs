// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for core operations. Every failure is terminal for the
/// current operation; the CLI layer decides presentation and never crashes
/// the process on any of these.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Statement layout missing the expected marker row, or a date/amount
    /// field that cannot be parsed. Aborts the import with no partial writes.
    #[error("bad statement format: {0}")]
    Format(String),

    /// Tag mapping or another required file absent when an operation needs it.
    #[error("required file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// Budget records are mutable only while their period is the current one.
    #[error("budget period {year}-{month:02} is locked; only the current period can be changed")]
    PeriodLocked { year: i32, month: u32 },

    /// Malformed user input on manual entry, reported per field.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("could not read workbook: {0}")]
    Workbook(#[from] calamine::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
