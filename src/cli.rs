// Copyright (c) 2025 Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .about("Personal-finance ledger: statement import, tag categorization, budgets, reports")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("user")
                .long("user")
                .global(true)
                .default_value("default")
                .help("User whose ledger to operate on"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_name("DIR")
                .help("Override the platform data directory"),
        )
        .subcommand(Command::new("init").about("Create the data directory and the user's store"))
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a manual transaction")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Non-negative whole currency units"),
                        )
                        .arg(
                            Arg::new("direction")
                                .long("direction")
                                .required(true)
                                .help("Income or Expense"),
                        )
                        .arg(
                            Arg::new("payment-method")
                                .long("payment-method")
                                .default_value("Cash"),
                        )
                        .arg(
                            Arg::new("tags")
                                .long("tags")
                                .default_value("")
                                .help("Comma-separated tags"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_parser(value_parser!(u32).range(1..=12)),
                        )
                        .arg(Arg::new("account").long("account"))
                        .arg(
                            Arg::new("untagged")
                                .long("untagged")
                                .action(ArgAction::SetTrue)
                                .help("Only transactions awaiting a tag review"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("import")
                .about("Import bank statements")
                .subcommand(
                    Command::new("statement")
                        .about("Parse an .xls/.xlsx bank statement and append its transactions")
                        .arg(Arg::new("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("tags")
                .about("Inspect and edit the tag-to-category mapping")
                .subcommand(json_flags(Command::new("list").about("List all tag mappings")))
                .subcommand(
                    Command::new("set")
                        .about("Map a tag to a category (replaces any existing mapping)")
                        .arg(Arg::new("tag").required(true))
                        .arg(Arg::new("category").required(true)),
                )
                .subcommand(
                    Command::new("categories").about("List distinct categories with tag counts"),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Set and review per-period category budgets")
                .subcommand(
                    Command::new("set")
                        .about("Set one category limit for the current period")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .required(true)
                                .help("YYYY-MM; must be the current period"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("overview")
                        .about("Compare category spending against recorded limits")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .required(true)
                                .help("YYYY-MM"),
                        ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Reporting views over the ledger")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Monthly totals and spending by category for one year")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(value_parser!(i32))
                                .help("Defaults to the latest year in the ledger"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("portfolio")
                        .about("Income, spending, savings and the monthly savings trend"),
                ))
                .subcommand(json_flags(
                    Command::new("spend-by-category")
                        .about("Spending per category, largest first")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_parser(value_parser!(u32).range(1..=12)),
                        ),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export a filtered transaction view")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .value_parser(["csv", "json"]),
                        )
                        .arg(Arg::new("out").long("out").required(true))
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_parser(value_parser!(u32).range(1..=12)),
                        ),
                ),
        )
}
