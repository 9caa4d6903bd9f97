// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print the dashboard as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per transaction row"),
    )
}

pub fn build_cli() -> Command {
    Command::new("moneyboard")
        .version(crate_version!())
        .about("Terminal dashboard for a remote personal-finance transactions API")
        .arg(
            Arg::new("api")
                .long("api")
                .global(true)
                .value_name("URL")
                .help("API base URL (overrides the stored setting)"),
        )
        .subcommand(json_args(
            Command::new("show").about("Load transactions and balance and render the dashboard"),
        ))
        .subcommand(json_args(
            Command::new("rm")
                .about("Delete a transaction by id")
                .arg(Arg::new("id").required(true).value_name("ID")),
        ))
        .subcommand(json_args(
            Command::new("add")
                .about("Create a transaction and refresh the dashboard")
                .arg(Arg::new("title").long("title").required(true))
                .arg(
                    Arg::new("value")
                        .long("value")
                        .required(true)
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .required(true)
                        .value_parser(["income", "outcome"]),
                )
                .arg(Arg::new("category").long("category").required(true)),
        ))
        .subcommand(
            Command::new("export")
                .about("Write the formatted transaction rows to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true).value_name("PATH")),
        )
        .subcommand(
            Command::new("config")
                .about("Manage persisted settings")
                .subcommand(
                    Command::new("set-api")
                        .about("Store the API base URL")
                        .arg(Arg::new("url").required(true).value_name("URL")),
                )
                .subcommand(Command::new("show").about("Show current settings")),
        )
}
