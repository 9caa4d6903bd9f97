// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::show::load_view;
use crate::view::Row;
use anyhow::{anyhow, Context, Result};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim().to_string();
    // Fail before touching the network on a bad format
    check_format(&fmt)?;

    let mut dash = super::connect(conn, sub)?;
    let view = load_view(&mut dash)?;
    export_rows(&view.rows, &fmt, &out)?;
    println!("Exported {} transactions to {}", view.rows.len(), out);
    Ok(())
}

fn check_format(fmt: &str) -> Result<()> {
    match fmt {
        "csv" | "json" => Ok(()),
        other => Err(anyhow!("Unknown format: {} (use csv|json)", other)),
    }
}

pub fn export_rows(rows: &[Row], fmt: &str, out: &str) -> Result<()> {
    check_format(fmt)?;
    match fmt {
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Open {} for writing", out))?;
            wtr.write_record(["id", "title", "price", "type", "category", "date"])?;
            for r in rows {
                wtr.write_record([
                    r.id.as_str(),
                    r.title.as_str(),
                    r.price.as_str(),
                    r.kind.as_str(),
                    r.category.as_str(),
                    r.date.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            let items: Vec<_> = rows
                .iter()
                .map(|r| {
                    json!({
                        "id": r.id, "title": r.title, "price": r.price,
                        "type": r.kind.as_str(), "category": r.category, "date": r.date
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write {}", out))?;
        }
    }
    Ok(())
}
