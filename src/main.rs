// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use moneyboard::{cli, commands, db};

fn main() -> Result<()> {
    // stdout carries the tables, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moneyboard=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("show", sub)) => commands::show::handle(&conn, sub)?,
        Some(("rm", sub)) => commands::transactions::handle_rm(&conn, sub)?,
        Some(("add", sub)) => commands::transactions::handle_add(&conn, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        Some(("config", sub)) => commands::config::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
