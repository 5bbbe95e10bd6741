// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;

use crate::client::Client;
use crate::filter::{ListFilter, visible_rows};
use crate::models::{Entry, NewEntry, TransactionKind, check_amount, check_source};
use crate::store::Snapshot;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};

const KIND: TransactionKind = TransactionKind::Expense;

pub fn handle(client: &Client, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(client, sub)?,
        Some(("add", sub)) => add(client, sub)?,
        Some(("edit", sub)) => edit(client, sub)?,
        Some(("rm", sub)) => rm(client, sub)?,
        _ => {}
    }
    Ok(())
}

/// Filter state for one invocation, read from the list flags.
pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<ListFilter> {
    let day = match sub.get_one::<String>("on") {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    Ok(ListFilter {
        query: sub.get_one::<String>("search").map(|s| s.to_string()),
        day,
        month: None,
    })
}

/// Rows the list shows. Active filters AND-compose over the full history;
/// `--all` lists everything newest first; otherwise the default view
/// (today's expenses) applies.
pub fn select_rows(
    entries: &[Entry],
    filter: &ListFilter,
    all: bool,
    limit: Option<usize>,
    today: NaiveDate,
) -> Vec<Entry> {
    let mut rows = if filter.is_active() {
        let mut filtered = filter.apply(entries);
        filtered.sort_by(|a, b| b.date.cmp(&a.date));
        filtered
    } else if all {
        let mut everything = entries.to_vec();
        everything.sort_by(|a, b| b.date.cmp(&a.date));
        everything
    } else {
        visible_rows(entries, KIND, filter, today)
    };
    if let Some(n) = limit {
        rows.truncate(n);
    }
    rows
}

fn list(client: &Client, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let all = sub.get_flag("all");
    let limit = sub.get_one::<usize>("limit").copied();
    let filter = filter_from_matches(sub)?;
    let today = chrono::Local::now().date_naive();

    let snap = Snapshot::from_raw(KIND, client.fetch_entries(KIND)?);
    let rows = select_rows(snap.entries(), &filter, all, limit, today);
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let table_rows: Vec<Vec<String>> = rows
            .iter()
            .map(|e| {
                vec![
                    e.date.to_string(),
                    e.source.clone(),
                    format!("{:.2}", e.amount),
                    e.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Source", "Amount", "Id"], table_rows)
        );
    }
    Ok(())
}

fn add(client: &Client, sub: &clap::ArgMatches) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let source = sub.get_one::<String>("source").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = sub
        .get_one::<String>("date")
        .map(|s| s.to_string())
        .unwrap_or_else(|| today.to_string());

    let entry = NewEntry::parse(source, amount, &date, today)?;
    let rec = client.insert_entry(KIND, &entry)?;
    println!(
        "Recorded expense {} on {} for '{}' (id: {})",
        entry.amount, entry.date, entry.source, rec.id
    );
    Ok(())
}

fn edit(client: &Client, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let new_source = sub.get_one::<String>("source");
    let new_amount = match sub.get_one::<String>("amount") {
        Some(s) => Some(parse_decimal(s)?),
        None => None,
    };
    if new_source.is_none() && new_amount.is_none() {
        println!("Nothing to change; pass --source and/or --amount");
        return Ok(());
    }

    let snap = Snapshot::from_raw(KIND, client.fetch_entries(KIND)?);
    let current = snap
        .entries()
        .iter()
        .find(|e| e.id == *id)
        .ok_or_else(|| anyhow::anyhow!("No expense with id '{}'", id))?;
    let source = new_source.map(|s| s.as_str()).unwrap_or(&current.source);
    let amount = new_amount.unwrap_or(current.amount);
    check_source(source)?;
    check_amount(amount)?;

    let rec = client.update_entry(KIND, id, source, amount)?;
    println!("Updated expense {} ('{}', {})", rec.id, source, amount);
    Ok(())
}

fn rm(client: &Client, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if client.delete_entry(KIND, id)? {
        println!("Removed expense {}", id);
    } else {
        println!("No expense with id '{}'", id);
    }
    Ok(())
}
