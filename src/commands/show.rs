// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::TransactionsApi;
use crate::dashboard::Dashboard;
use crate::utils::maybe_write_json;
use crate::view::{project, render, DashboardView};
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::io::Write;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut dash = super::connect(conn, sub)?;
    let view = load_view(&mut dash)?;
    print_view(&view, sub)
}

pub fn load_view<A: TransactionsApi>(dash: &mut Dashboard<A>) -> Result<DashboardView> {
    dash.sync().context("Could not load transactions")?;
    Ok(project(dash.state()))
}

pub fn print_view(view: &DashboardView, sub: &clap::ArgMatches) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_view(&mut out, view, sub.get_flag("json"), sub.get_flag("jsonl"))
}

/// JSON prints the whole view, JSONL streams only the rows.
pub fn write_view<W: Write>(
    out: &mut W,
    view: &DashboardView,
    json_flag: bool,
    jsonl_flag: bool,
) -> Result<()> {
    let printed = if jsonl_flag {
        maybe_write_json(out, false, true, &view.rows)?
    } else {
        maybe_write_json(out, json_flag, false, view)?
    };
    if !printed {
        writeln!(out, "{}", render(view))?;
    }
    Ok(())
}
