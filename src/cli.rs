// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn filter_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("search")
            .long("search")
            .short('s')
            .help("Case-insensitive substring of the description"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .short('c')
            .help("Exact category name"),
    )
    .arg(
        Arg::new("month")
            .long("month")
            .short('m')
            .help("Month to show (YYYY-MM)"),
    )
}

fn entry_fields(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("date")
            .long("date")
            .required(required)
            .help("YYYY-MM-DD"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .short('d')
            .required(required),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(required)
            .allow_hyphen_values(true)
            .help("Positive for income, negative for expense"),
    )
    .arg(Arg::new("category").long("category").short('c'))
}

pub fn build_cli() -> Command {
    Command::new("ledgerlens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Personal income/expense ledger with filtered analytics")
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(
            Command::new("entry")
                .about("Ledger entries")
                .subcommand(
                    entry_fields(Command::new("add"), true)
                        .about("Record an entry")
                        .arg(Arg::new("id").long("id").help("Use this id instead of a new UUID")),
                )
                .subcommand(
                    entry_fields(Command::new("edit"), false)
                        .about("Change fields of an existing entry")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(filter_flags(
                    Command::new("rm")
                        .about("Delete entries by id, or the whole filtered view with --filtered")
                        .arg(Arg::new("ids").num_args(1..).required_unless_present("filtered"))
                        .arg(
                            Arg::new("filtered")
                                .long("filtered")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("ids"),
                        ),
                ))
                .subcommand(json_flags(filter_flags(
                    Command::new("list").about("List entries, newest first").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize)),
                    ),
                ))),
        )
        .subcommand(
            Command::new("report")
                .about("Figures derived from the filtered view")
                .subcommand(json_flags(filter_flags(
                    Command::new("summary").about("Balance, income, expense and count"),
                )))
                .subcommand(json_flags(filter_flags(
                    Command::new("trend").about("Running balance per day within the view"),
                )))
                .subcommand(json_flags(filter_flags(
                    Command::new("categories")
                        .about("Largest expense categories")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .default_value("5"),
                        ),
                )))
                .subcommand(json_flags(filter_flags(
                    Command::new("chart")
                        .about("Cash-flow line and area geometry as SVG attributes")
                        .arg(
                            Arg::new("width")
                                .long("width")
                                .value_parser(value_parser!(f64))
                                .default_value("600"),
                        )
                        .arg(
                            Arg::new("height")
                                .long("height")
                                .value_parser(value_parser!(f64))
                                .default_value("150"),
                        )
                        .arg(
                            Arg::new("padding")
                                .long("padding")
                                .value_parser(value_parser!(f64))
                                .default_value("20"),
                        ),
                ))),
        )
        .subcommand(filter_flags(
            Command::new("export")
                .about("Write the filtered view to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Defaults to ledger_export_<today>.<format>"),
                ),
        ))
        .subcommand(
            Command::new("config")
                .about("Storage and display settings")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("mode").long("mode").help("demo|live"))
                        .arg(Arg::new("url").long("url").help("Remote endpoint URL"))
                        .arg(Arg::new("token").long("token").help("Shared secret"))
                        .arg(Arg::new("currency").long("currency"))
                        .arg(Arg::new("locale").long("locale")),
                ),
        )
}
