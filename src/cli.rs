// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command, value_parser};

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
            .help("Print as JSON Lines"),
    )
}

pub fn build_cli() -> Command {
    command!()
        .about("ExpenseBook: expenses/incomes ledger with daily and monthly reports")
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Summary stats, 7-day and 12-month series, month-wise tables")
                .arg(
                    Arg::new("months")
                        .long("months")
                        .value_parser(value_parser!(usize))
                        .help("Months to keep in the month-wise tables (default 6)"),
                ),
        ))
        .subcommand(
            Command::new("expenses")
                .about("List and manage expenses")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses (today's when no filter is given)")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive match on source"),
                        )
                        .arg(Arg::new("on").long("on").help("Only this day (YYYY-MM-DD)"))
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .help("Full history, newest first"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Keep at most N rows"),
                        ),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(Arg::new("source").long("source").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD (default today)")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Change the source and/or amount of an expense")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("source").long("source"))
                        .arg(Arg::new("amount").long("amount")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("incomes")
                .about("List and manage incomes")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List incomes (the newest five when no filter is given)")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive match on source"),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("Only this month (YYYY-MM)"),
                        )
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .help("Full history, newest first"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Keep at most N rows"),
                        ),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Record an income")
                        .arg(Arg::new("source").long("source").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD (default today)")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Change the source and/or amount of an income")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("source").long("source"))
                        .arg(Arg::new("amount").long("amount")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an income")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("users")
                .about("User administration")
                .subcommand(json_flags(
                    Command::new("list").about("List all users (admin only)"),
                )),
        )
        .subcommand(
            Command::new("epaper")
                .about("Browse the e-paper catalogue")
                .subcommand(json_flags(Command::new("list").about("List e-papers")))
                .subcommand(json_flags(
                    Command::new("show")
                        .about("Show one e-paper and its hotspots")
                        .arg(Arg::new("id").required(true)),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export the ledger to a file")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .value_parser(["expenses", "incomes"])
                        .default_value("expenses"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("doctor").about("Check configuration and data quality"))
        .subcommand(
            Command::new("config")
                .about("Connection and display settings")
                .subcommand(Command::new("show").about("Print current settings"))
                .subcommand(
                    Command::new("set")
                        .about("Set one setting")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                ),
        )
}
