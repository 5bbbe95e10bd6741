// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config;
use crate::utils::pretty_table;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show()?,
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").unwrap();
            let value = sub.get_one::<String>("value").unwrap();
            let mut settings = config::load()?;
            settings.set(key, value)?;
            config::save(&settings)?;
            println!("Set {}", key);
        }
        _ => {}
    }
    Ok(())
}

fn show() -> Result<()> {
    let settings = config::load()?;
    let rows = vec![
        vec!["endpoint".to_string(), settings.endpoint.clone()],
        vec!["api-key".to_string(), mask(&settings.api_key)],
        vec!["access-token".to_string(), mask(&settings.access_token)],
        vec!["user-id".to_string(), settings.user_id.clone()],
        vec!["currency".to_string(), settings.currency.clone()],
    ];
    println!("{}", pretty_table(&["Key", "Value"], rows));
    println!("Config file: {}", config::config_path()?.display());
    Ok(())
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return "(unset)".to_string();
    }
    let head: String = secret.chars().take(6).collect();
    format!("{}…", head)
}
