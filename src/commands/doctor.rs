// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::client::Client;
use crate::config::Settings;
use crate::models::TransactionKind;
use crate::store::Snapshot;
use crate::utils::pretty_table;

/// Connection settings the client needs before any backend call can
/// succeed, in the order `config show` lists them.
pub fn missing_config(settings: &Settings) -> Vec<&'static str> {
    let mut missing = Vec::new();
    for (key, value) in [
        ("endpoint", &settings.endpoint),
        ("api-key", &settings.api_key),
        ("access-token", &settings.access_token),
        ("user-id", &settings.user_id),
    ] {
        if value.is_empty() {
            missing.push(key);
        }
    }
    missing
}

pub fn handle(client: &Client, settings: &Settings) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Config completeness
    let missing = missing_config(settings);
    for key in &missing {
        rows.push(vec!["missing_config".to_string(), key.to_string()]);
    }

    // 2) Records the backend returned that aggregation had to drop. Only
    //    attempted with a complete config; a failed fetch is itself a
    //    finding, never an abort of the report.
    if missing.is_empty() {
        for kind in [TransactionKind::Expense, TransactionKind::Income] {
            match client.fetch_entries(kind) {
                Ok(raw) => {
                    let snap = Snapshot::from_raw(kind, raw);
                    for r in snap.rejected() {
                        rows.push(vec![
                            format!("bad_{}_record", kind.as_str()),
                            format!("{}: {}", r.id, r.reason),
                        ]);
                    }
                }
                Err(err) => {
                    rows.push(vec!["backend_unreachable".to_string(), err.to_string()]);
                    break;
                }
            }
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
