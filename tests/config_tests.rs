// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneyboard::{cli, commands::config, db, utils};
use tempfile::tempdir;

#[test]
fn api_url_defaults_and_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("moneyboard.sqlite");

    let conn = db::open_at(&path).unwrap();
    assert_eq!(utils::get_api_url(&conn).unwrap(), utils::DEFAULT_API_URL);

    let stored = utils::set_api_url(&conn, " https://finance.example.com/api/ ").unwrap();
    assert_eq!(stored, "https://finance.example.com/api");
    drop(conn);

    let reopened = db::open_at(&path).unwrap();
    assert_eq!(
        utils::get_api_url(&reopened).unwrap(),
        "https://finance.example.com/api"
    );
}

#[test]
fn invalid_api_url_is_not_stored() {
    let dir = tempdir().unwrap();
    let conn = db::open_at(&dir.path().join("m.sqlite")).unwrap();
    assert!(utils::set_api_url(&conn, "ftp://example.com").is_err());
    assert!(utils::set_api_url(&conn, "localhost 3333").is_err());
    assert_eq!(utils::get_api_url(&conn).unwrap(), utils::DEFAULT_API_URL);
}

#[test]
fn flag_overrides_stored_url() {
    let dir = tempdir().unwrap();
    let conn = db::open_at(&dir.path().join("m.sqlite")).unwrap();
    utils::set_api_url(&conn, "http://stored:3333").unwrap();

    assert_eq!(
        utils::resolve_api_url(&conn, Some("http://flag:4000/")).unwrap(),
        "http://flag:4000"
    );
    assert_eq!(
        utils::resolve_api_url(&conn, None).unwrap(),
        "http://stored:3333"
    );
}

#[test]
fn config_set_api_command_stores_url() {
    let dir = tempdir().unwrap();
    let conn = db::open_at(&dir.path().join("m.sqlite")).unwrap();

    let matches = cli::build_cli().get_matches_from([
        "moneyboard",
        "config",
        "set-api",
        "http://127.0.0.1:3333/",
    ]);
    if let Some(("config", config_m)) = matches.subcommand() {
        config::handle(&conn, config_m).unwrap();
    } else {
        panic!("no config subcommand");
    }
    assert_eq!(utils::get_api_url(&conn).unwrap(), "http://127.0.0.1:3333");
}

#[test]
fn bare_config_command_prints_help() {
    let dir = tempdir().unwrap();
    let conn = db::open_at(&dir.path().join("m.sqlite")).unwrap();

    let matches = cli::build_cli().get_matches_from(["moneyboard", "config"]);
    if let Some(("config", config_m)) = matches.subcommand() {
        config::handle(&conn, config_m).unwrap();
    } else {
        panic!("no config subcommand");
    }
    let help = config::help_text();
    assert!(help.contains("set-api"));
    assert!(help.contains("show"));
}
