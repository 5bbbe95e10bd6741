// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::client::Client;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(client: &Client, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(client, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(client: &Client, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    // Client-side convenience check only; the backend enforces the rule.
    let me = client.current_user()?;
    let allowed = me.as_ref().map(|u| u.role.is_admin()).unwrap_or(false);
    if !allowed {
        println!("users list is admin-only; the configured user is not an admin");
        return Ok(());
    }

    let users = client.fetch_users()?;
    if !maybe_print_json(json_flag, jsonl_flag, &users)? {
        let rows: Vec<Vec<String>> = users
            .iter()
            .map(|u| {
                vec![
                    u.email.clone(),
                    u.role.as_str().to_string(),
                    u.created_at.clone(),
                    u.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Email", "Role", "Created", "Id"], rows)
        );
    }
    Ok(())
}
