// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use ledgerlens::{cli, commands, config::AppConfig, db, store, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;
    let cfg = AppConfig::load(&conn)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("config", sub)) => commands::settings::handle(&conn, sub)?,
        Some(("entry", sub)) => {
            let store = store::open(&conn, &cfg)?;
            commands::entries::handle(store.as_ref(), &cfg, sub)?
        }
        Some(("report", sub)) => {
            let store = store::open(&conn, &cfg)?;
            commands::reports::handle(store.as_ref(), &cfg, sub)?
        }
        Some(("export", sub)) => {
            let store = store::open(&conn, &cfg)?;
            commands::exporter::handle(store.as_ref(), sub)?
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
