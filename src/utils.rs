// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use std::io::Write;

const UA: &str = concat!(
    "moneyboard/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/moneyboard)"
);

pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Separator between the currency symbol and the amount, as pt-BR output uses.
pub const NBSP: char = '\u{a0}';

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Format an amount as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn fmt_brl(d: &Decimal) -> String {
    // Grouped from the Decimal's own digits; going through f64 would lose cents.
    let rounded = d.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}R${NBSP}{grouped},{frac_part}")
}

/// Day/month/year in UTC, e.g. `05/01/2023`.
pub fn fmt_date_br(ts: &DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y").to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_write_json<W: Write, T: serde::Serialize>(
    out: &mut W,
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        writeln!(out, "{}", serde_json::to_string_pretty(v)?)?;
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                writeln!(out, "{}", serde_json::to_string(item)?)?;
            }
        } else {
            writeln!(out, "{}", serde_json::to_string(&val)?)?;
        }
        return Ok(true);
    }
    Ok(false)
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn normalize_api_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let parsed = reqwest::Url::parse(trimmed)
        .with_context(|| format!("Invalid API URL '{}'", url.trim()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(anyhow::anyhow!(
            "Invalid API URL '{}', expected http:// or https://",
            trimmed
        ));
    }
    Ok(trimmed.to_string())
}

pub fn get_api_url(conn: &Connection) -> Result<String> {
    Ok(get_setting(conn, "api_url")?.unwrap_or_else(|| DEFAULT_API_URL.to_string()))
}

pub fn set_api_url(conn: &Connection, url: &str) -> Result<String> {
    let url = normalize_api_url(url)?;
    set_setting(conn, "api_url", &url)?;
    Ok(url)
}

/// The `--api` flag wins over the stored setting.
pub fn resolve_api_url(conn: &Connection, flag: Option<&str>) -> Result<String> {
    match flag {
        Some(u) => normalize_api_url(u),
        None => get_api_url(conn),
    }
}
