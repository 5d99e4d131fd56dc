// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::{IdentityProvider, first_name};
use crate::db::BlobStore;
use crate::models::{AppState, UserProfile};
use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::{Result, bail};

pub fn login<B: BlobStore, P: IdentityProvider>(
    store: &mut Store<B>,
    provider: &P,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let user = provider.sign_in(email, password)?;
    welcome(store, user)
}

pub fn signup<B: BlobStore, P: IdentityProvider>(
    store: &mut Store<B>,
    provider: &P,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let user = provider.sign_up(name, email, password)?;
    welcome(store, user)
}

fn welcome<B: BlobStore>(store: &mut Store<B>, user: UserProfile) -> Result<()> {
    store.set_user(user)?;
    if let Some(u) = &store.refresh()?.user {
        println!("Welcome, {}!", first_name(u));
    }
    Ok(())
}

pub fn logout<B: BlobStore>(store: &mut Store<B>) -> Result<()> {
    store.clear_user()?;
    store.refresh()?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(state: &AppState) -> Result<()> {
    let user = require_user(state)?;
    println!(
        "{}",
        pretty_table(
            &["Name", "Email", "Id"],
            vec![vec![user.name.clone(), user.email.clone(), user.id.clone()]],
        )
    );
    Ok(())
}

/// The signed-in profile, or an error telling the caller how to sign in.
pub fn require_user(state: &AppState) -> Result<&UserProfile> {
    match &state.user {
        Some(u) => Ok(u),
        None => bail!("Not signed in; run `fintrack login --email <EMAIL> --password <PASSWORD>`"),
    }
}
