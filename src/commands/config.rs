// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{get_api_url, pretty_table, set_api_url};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-api", sub)) => {
            let url = set_api_url(conn, sub.get_one::<String>("url").unwrap())?;
            println!("API URL set to {}", url);
        }
        Some(("show", _)) => {
            let rows = vec![vec!["api_url".to_string(), get_api_url(conn)?]];
            println!("{}", pretty_table(&["Key", "Value"], rows));
        }
        _ => {
            println!("{}", help_text());
        }
    }
    Ok(())
}

pub fn help_text() -> String {
    let mut cli = crate::cli::build_cli();
    match cli.find_subcommand_mut("config") {
        Some(cmd) => cmd.render_help().to_string(),
        None => String::new(),
    }
}
