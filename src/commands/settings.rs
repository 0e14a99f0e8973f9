// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{AppConfig, ConfigUpdate};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(conn, sub)?,
        Some(("set", sub)) => set(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn mask(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    let tail: String = token
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{}", tail)
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut cfg = AppConfig::load(conn)?;
    cfg.api_token = mask(&cfg.api_token);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cfg)? {
        let data = vec![
            vec!["mode".into(), cfg.mode.to_string()],
            vec!["remote_url".into(), cfg.remote_url],
            vec!["api_token".into(), cfg.api_token],
            vec!["currency".into(), cfg.currency],
            vec!["locale".into(), cfg.locale],
        ];
        println!("{}", pretty_table(&["Setting", "Value"], data));
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut cfg = AppConfig::load(conn)?;
    let update = ConfigUpdate {
        mode: sub
            .get_one::<String>("mode")
            .map(|s| s.parse())
            .transpose()?,
        remote_url: sub.get_one::<String>("url").cloned(),
        api_token: sub.get_one::<String>("token").cloned(),
        currency: sub.get_one::<String>("currency").cloned(),
        locale: sub.get_one::<String>("locale").cloned(),
    };
    cfg.apply(update)?;
    cfg.save(conn)?;
    println!("Settings saved (mode: {}, currency: {})", cfg.mode, cfg.currency);
    Ok(())
}
