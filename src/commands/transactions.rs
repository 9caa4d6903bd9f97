// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::TransactionsApi;
use crate::commands::show::print_view;
use crate::dashboard::Dashboard;
use crate::models::{NewTransaction, TransactionKind};
use crate::utils::parse_decimal;
use crate::view::{project, DashboardView};
use anyhow::{anyhow, Context, Result};
use rusqlite::Connection;

pub fn handle_rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut dash = super::connect(conn, sub)?;
    let id = sub.get_one::<String>("id").unwrap().trim().to_string();
    let view = remove(&mut dash, &id)?;
    print_view(&view, sub)
}

pub fn handle_add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut dash = super::connect(conn, sub)?;
    let tx = new_transaction(sub)?;
    let view = add(&mut dash, &tx)?;
    print_view(&view, sub)
}

/// Load, delete `id`, and project the locally updated list. No refetch
/// happens after the delete.
pub fn remove<A: TransactionsApi>(dash: &mut Dashboard<A>, id: &str) -> Result<DashboardView> {
    dash.sync().context("Could not load transactions")?;
    if !dash.state().transactions().iter().any(|t| t.id == id) {
        tracing::warn!(id, "transaction not in the loaded list, deleting anyway");
    }
    if !dash
        .remove(id)
        .with_context(|| format!("Could not delete transaction {}", id))?
    {
        return Err(anyhow!("Delete of {} is already in progress", id));
    }
    // stdout is reserved for the view
    eprintln!("Removed transaction {}", id);
    Ok(project(dash.state()))
}

/// A failed reload after a successful create is not an error here; it shows
/// up as the view's error banner.
pub fn add<A: TransactionsApi>(dash: &mut Dashboard<A>, tx: &NewTransaction) -> Result<DashboardView> {
    dash.create(tx)
        .with_context(|| format!("Could not create transaction '{}'", tx.title))?;
    eprintln!(
        "Recorded {} '{}' of {} ({})",
        tx.kind.as_str(),
        tx.title,
        tx.value,
        tx.category
    );
    Ok(project(dash.state()))
}

pub fn new_transaction(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let title = sub.get_one::<String>("title").unwrap().trim().to_string();
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let value = parse_decimal(sub.get_one::<String>("value").unwrap().trim())?;
    let kind: TransactionKind = sub
        .get_one::<String>("type")
        .unwrap()
        .parse()
        .map_err(|e: String| anyhow!(e))?;

    if title.is_empty() {
        return Err(anyhow!("Title must not be empty"));
    }
    if category.is_empty() {
        return Err(anyhow!("Category must not be empty"));
    }
    if value.is_sign_negative() || value.is_zero() {
        return Err(anyhow!(
            "Value must be positive, use --type outcome for expenses (got {})",
            value
        ));
    }

    Ok(NewTransaction {
        title,
        value,
        kind,
        category,
    })
}
