// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tallybook::{cli, commands, store, workspace::Workspace};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let ws = match matches.get_one::<String>("data-dir") {
        Some(dir) => Workspace::at(dir),
        None => Workspace::default_location()?,
    };
    let user = matches.get_one::<String>("user").unwrap().as_str();

    match matches.subcommand() {
        Some(("init", _)) => {
            let path = store::ensure(&ws, user)?;
            println!("Ledger for '{}' initialized at {}", user, path.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&ws, user, sub)?,
        Some(("import", sub)) => commands::importer::handle(&ws, user, sub)?,
        Some(("tags", sub)) => commands::tags::handle(&ws, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&ws, user, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ws, user, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ws, user, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
