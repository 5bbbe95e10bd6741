// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use expensebook::commands::dashboard::{build_overview, DAILY_WINDOW, MONTHLY_WINDOW};
use expensebook::models::Entry;
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn entry(id: &str, date: &str, amount: &str, source: &str) -> Entry {
    Entry {
        id: id.to_string(),
        source: source.to_string(),
        amount: dec(amount),
        date: d(date),
        user_id: "u1".to_string(),
    }
}

#[test]
fn overview_combines_summary_series_and_defaults() {
    let expenses = vec![
        entry("e1", "2025-06-15", "10", "Chai"),
        entry("e2", "2025-06-15", "40", "Groceries"),
        entry("e3", "2025-06-10", "300", "Electricity"),
        entry("e4", "2025-04-01", "25", "Books"),
    ];
    let incomes = vec![
        entry("i1", "2025-06-01", "1000", "Salary"),
        entry("i2", "2025-05-01", "1000", "Salary"),
    ];
    let today = d("2025-06-15");
    let overview = build_overview(&expenses, &incomes, today, 6);

    assert_eq!(overview.summary.today_expense, dec("50"));
    assert_eq!(overview.summary.month_expense, dec("350"));
    assert_eq!(overview.summary.available, dec("1625"));

    assert_eq!(overview.daily_expenses.len(), DAILY_WINDOW);
    assert_eq!(overview.daily_expenses[0].total, dec("50"));
    assert_eq!(overview.monthly_expenses.len(), MONTHLY_WINDOW);
    assert_eq!(overview.monthly_expenses[0].total, dec("350"));
    assert_eq!(overview.monthly_expenses[2].total, dec("25"));

    assert_eq!(overview.todays_expenses.len(), 2);
    assert_eq!(overview.recent_incomes.len(), 2);
    assert_eq!(overview.recent_incomes[0].id, "i1");

    assert_eq!(overview.expense_months.len(), 2);
    assert_eq!(overview.expense_months[0].key(), "2025-06");
    assert_eq!(overview.income_months.len(), 2);
}

#[test]
fn overview_months_limit_truncates_the_rollups() {
    let expenses = vec![
        entry("e1", "2025-06-15", "10", "Chai"),
        entry("e2", "2025-05-15", "10", "Chai"),
        entry("e3", "2025-04-15", "10", "Chai"),
    ];
    let overview = build_overview(&expenses, &[], d("2025-06-15"), 2);
    assert_eq!(overview.expense_months.len(), 2);
    assert_eq!(overview.expense_months[0].key(), "2025-06");
    assert_eq!(overview.expense_months[1].key(), "2025-05");
}

#[test]
fn overview_of_an_empty_ledger_keeps_its_shape() {
    let overview = build_overview(&[], &[], d("2025-06-15"), 6);
    assert_eq!(overview.summary.available, Decimal::ZERO);
    assert_eq!(overview.daily_expenses.len(), DAILY_WINDOW);
    assert_eq!(overview.monthly_expenses.len(), MONTHLY_WINDOW);
    assert!(overview.todays_expenses.is_empty());
    assert!(overview.recent_incomes.is_empty());
    assert!(overview.expense_months.is_empty());
}
