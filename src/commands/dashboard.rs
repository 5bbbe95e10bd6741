// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::client::Client;
use crate::config::Settings;
use crate::filter;
use crate::models::{Entry, TransactionKind};
use crate::report::{self, DayBucket, MonthBucket, MonthGroup, SummaryStats};
use crate::store::Snapshot;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub const DAILY_WINDOW: usize = 7;
pub const MONTHLY_WINDOW: usize = 12;

/// Everything the dashboard renders, computed in one pass from the
/// current snapshots.
#[derive(Debug, Serialize)]
pub struct Overview {
    pub summary: SummaryStats,
    pub daily_expenses: Vec<DayBucket>,
    pub monthly_expenses: Vec<MonthBucket>,
    pub todays_expenses: Vec<Entry>,
    pub recent_incomes: Vec<Entry>,
    pub expense_months: Vec<MonthGroup>,
    pub income_months: Vec<MonthGroup>,
}

pub fn build_overview(
    expenses: &[Entry],
    incomes: &[Entry],
    today: NaiveDate,
    months: usize,
) -> Overview {
    Overview {
        summary: report::summary(expenses, incomes, today),
        daily_expenses: report::daily_series(expenses, today, DAILY_WINDOW),
        monthly_expenses: report::monthly_series(expenses, today, MONTHLY_WINDOW),
        todays_expenses: filter::default_view(expenses, TransactionKind::Expense, today),
        recent_incomes: filter::default_view(incomes, TransactionKind::Income, today),
        expense_months: report::month_rollup(expenses, Some(months)),
        income_months: report::month_rollup(incomes, Some(months)),
    }
}

pub fn handle(client: &Client, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let months: usize = *m.get_one::<usize>("months").unwrap_or(&6);
    let today = chrono::Local::now().date_naive();

    let expenses = Snapshot::from_raw(
        TransactionKind::Expense,
        client.fetch_entries(TransactionKind::Expense)?,
    );
    let incomes = Snapshot::from_raw(
        TransactionKind::Income,
        client.fetch_entries(TransactionKind::Income)?,
    );
    let overview = build_overview(expenses.entries(), incomes.entries(), today, months);

    if maybe_print_json(json_flag, jsonl_flag, &overview)? {
        return Ok(());
    }

    let ccy = settings.currency.as_str();
    println!(
        "Available balance: {}",
        fmt_money(&overview.summary.available, ccy)
    );
    println!(
        "Spent today:       {}",
        fmt_money(&overview.summary.today_expense, ccy)
    );
    println!(
        "Spent this month:  {}",
        fmt_money(&overview.summary.month_expense, ccy)
    );
    println!();

    println!("Last {} days:", DAILY_WINDOW);
    let daily_rows: Vec<Vec<String>> = overview
        .daily_expenses
        .iter()
        .map(|b| vec![b.label.clone(), b.key(), format!("{:.2}", b.total)])
        .collect();
    println!("{}", pretty_table(&["Day", "Date", "Spent"], daily_rows));

    println!("Last {} months:", MONTHLY_WINDOW);
    let monthly_rows: Vec<Vec<String>> = overview
        .monthly_expenses
        .iter()
        .map(|b| vec![b.label.clone(), format!("{:.2}", b.total)])
        .collect();
    println!("{}", pretty_table(&["Month", "Spent"], monthly_rows));

    if !overview.todays_expenses.is_empty() {
        println!("Today's expenses:");
        println!("{}", entries_table(&overview.todays_expenses));
    }
    if !overview.recent_incomes.is_empty() {
        println!("Recent incomes:");
        println!("{}", entries_table(&overview.recent_incomes));
    }

    println!("Expenses by month:");
    let exp_rows: Vec<Vec<String>> = overview
        .expense_months
        .iter()
        .map(|g| {
            vec![
                g.label.clone(),
                format!("{:.2}", g.total),
                g.entries.len().to_string(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Spent", "Txns"], exp_rows));

    println!("Incomes by month:");
    let inc_rows: Vec<Vec<String>> = overview
        .income_months
        .iter()
        .map(|g| {
            vec![
                g.label.clone(),
                format!("{:.2}", g.total),
                g.entries.len().to_string(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Received", "Txns"], inc_rows));

    Ok(())
}

fn entries_table(entries: &[Entry]) -> comfy_table::Table {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.date.to_string(),
                e.source.clone(),
                format!("{:.2}", e.amount),
            ]
        })
        .collect();
    pretty_table(&["Date", "Source", "Amount"], rows)
}
