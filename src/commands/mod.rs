// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod show;
pub mod transactions;
pub mod exporter;
pub mod config;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::api::HttpApi;
use crate::dashboard::Dashboard;
use crate::utils::{http_client, resolve_api_url};

pub fn connect(conn: &Connection, sub: &clap::ArgMatches) -> Result<Dashboard<HttpApi>> {
    let flag = sub.get_one::<String>("api").map(|s| s.as_str());
    let url = resolve_api_url(conn, flag)?;
    tracing::debug!(%url, "using API");
    let api = HttpApi::new(http_client()?, &url)
        .with_context(|| format!("Could not set up API client for {}", url))?;
    Ok(Dashboard::new(api))
}
