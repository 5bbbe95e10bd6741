// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::client::Client;
use crate::models::TransactionKind;
use crate::store::Snapshot;

pub fn handle(client: &Client, m: &clap::ArgMatches) -> Result<()> {
    let kind = match m.get_one::<String>("kind").unwrap().as_str() {
        "incomes" => TransactionKind::Income,
        _ => TransactionKind::Expense,
    };
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();

    let snap = Snapshot::from_raw(kind, client.fetch_entries(kind)?);
    let mut entries = snap.entries().to_vec();
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "source", "amount"])?;
            for e in &entries {
                wtr.write_record([
                    e.date.to_string(),
                    e.source.clone(),
                    format!("{:.2}", e.amount),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for e in &entries {
                items.push(json!({
                    "date": e.date.to_string(),
                    "source": e.source,
                    "amount": e.amount,
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} {}s to {}", entries.len(), kind.as_str(), out);
    Ok(())
}
