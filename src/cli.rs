// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::analytics::{DEFAULT_TREND_WINDOW, LEGEND_SIZE};
use crate::db::DB_ENV;

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .version(clap::crate_version!())
        .about("Personal income/expense tracker with category budgets")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env(DB_ENV)
                .value_name("PATH")
                .help("Database file (defaults to the platform data dir)"),
        )
        .subcommand(
            Command::new("init")
                .about("Create the database if missing")
                .arg(
                    Arg::new("reset")
                        .long("reset")
                        .action(ArgAction::SetTrue)
                        .help("Discard stored data and start again from the sample data"),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in (local mock, no credential check)")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(
            Command::new("signup")
                .about("Create a local profile and sign in")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true)),
        )
        .subcommand(Command::new("logout").about("Sign out"))
        .subcommand(Command::new("whoami").about("Show the signed-in profile"))
        .subcommand(
            Command::new("tx")
                .about("Income and expense records")
                .subcommand(
                    Command::new("add")
                        .about("Add a record")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .default_value("expense")
                                .help("income|expense"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .default_value("once")
                                .help("once|weekly|monthly|yearly"),
                        ),
                )
                .subcommand(json_args(
                    Command::new("list")
                        .about("List records, newest first")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Match description or category, case-insensitive"),
                        )
                        .arg(Arg::new("kind").long("kind").help("income|expense"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a record by id")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Per-category spending limits")
                .subcommand(
                    Command::new("set")
                        .about("Set or replace the limit for a category")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("limit").long("limit").required(true)),
                )
                .subcommand(json_args(
                    Command::new("list").about("Budgets with spending progress"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove the budget for a category")
                        .arg(Arg::new("category").long("category").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views")
                .subcommand(json_args(
                    Command::new("summary").about("Income, expense and balance"),
                ))
                .subcommand(json_args(
                    Command::new("categories")
                        .about("Expense distribution by category")
                        .arg(
                            Arg::new("top")
                                .long("top")
                                .value_parser(value_parser!(usize))
                                .help(format!("Only the largest N (legend uses {})", LEGEND_SIZE)),
                        ),
                ))
                .subcommand(json_args(
                    Command::new("trend")
                        .about("Income and expense by month over recent records")
                        .arg(
                            Arg::new("window")
                                .long("window")
                                .value_parser(value_parser!(usize))
                                .help(format!("Records in the window (default {})", DEFAULT_TREND_WINDOW)),
                        ),
                ))
                .subcommand(json_args(
                    Command::new("budgets").about("Budget consumption"),
                ))
                .subcommand(json_args(
                    Command::new("dashboard").about("All views at once"),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Category lists")
                .subcommand(
                    Command::new("list")
                        .arg(Arg::new("kind").long("kind").help("income|expense")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("records")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
}
