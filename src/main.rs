// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use fintrack::auth::MockIdentityProvider;
use fintrack::commands::session::require_user;
use fintrack::db::BlobStore;
use fintrack::store::{STATE_KEY, Store};
use fintrack::{cli, commands, db, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = match matches.get_one::<String>("db") {
        Some(p) => PathBuf::from(p),
        None => db::db_path()?,
    };
    tracing::debug!(path = %path.display(), "opening database");
    let conn = db::open_at(&path)?;
    let reset = matches
        .subcommand_matches("init")
        .is_some_and(|sub| sub.get_flag("reset"));
    // Cleared before loading so a corrupt blob can still be reset
    if reset {
        conn.remove_blob(STATE_KEY)?;
    }
    let mut store = Store::open(conn)?;
    let provider = MockIdentityProvider;

    match matches.subcommand() {
        Some(("init", sub)) => {
            if sub.get_flag("reset") {
                println!("Stored data cleared");
            }
            println!("Database initialized at {}", path.display());
        }
        Some(("login", sub)) => commands::session::login(&mut store, &provider, sub)?,
        Some(("signup", sub)) => commands::session::signup(&mut store, &provider, sub)?,
        Some(("logout", _)) => commands::session::logout(&mut store)?,
        Some(("whoami", _)) => commands::session::whoami(store.state())?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("tx", sub)) => {
            require_user(store.state())?;
            commands::transactions::handle(&mut store, sub)?
        }
        Some(("budget", sub)) => {
            require_user(store.state())?;
            commands::budgets::handle(&mut store, sub)?
        }
        Some(("report", sub)) => {
            require_user(store.state())?;
            commands::reports::handle(store.state(), sub)?
        }
        Some(("export", sub)) => {
            require_user(store.state())?;
            commands::exporter::handle(store.state(), sub)?
        }
        Some(("doctor", _)) => commands::doctor::handle(store.state())?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
