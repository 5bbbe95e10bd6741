// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::Entry;
use crate::utils::{month_key, month_label};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Weekday abbreviation ("Sun"), for chart-style axes.
    pub label: String,
    pub total: Decimal,
}

impl DayBucket {
    pub fn key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub total: Decimal,
}

impl MonthBucket {
    pub fn key(&self) -> String {
        month_key(self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Expenses dated exactly the reference day.
    pub today_expense: Decimal,
    /// Expenses within the reference day's calendar month.
    pub month_expense: Decimal,
    /// Lifetime incomes minus lifetime expenses; never window-limited.
    pub available: Decimal,
}

/// Totals per day for the last `window_days` calendar days ending at
/// `reference`, inclusive. Most recent day first. Buckets are seeded for
/// the whole window, so an empty list still yields `window_days` rows.
///
/// An entry joins the bucket whose full calendar date equals its own.
/// Matching on the weekday label instead would merge same-named days from
/// different weeks into one bucket and inflate its total.
pub fn daily_series(entries: &[Entry], reference: NaiveDate, window_days: usize) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = (0..window_days)
        .filter_map(|i| reference.checked_sub_days(Days::new(i as u64)))
        .map(|date| DayBucket {
            date,
            label: date.format("%a").to_string(),
            total: Decimal::ZERO,
        })
        .collect();
    for e in entries {
        if let Some(b) = buckets.iter_mut().find(|b| b.date == e.date) {
            b.total += e.amount;
        }
    }
    buckets
}

/// Totals per month for the last `window_months` calendar months ending at
/// `reference`'s month, inclusive. Most recent month first; buckets seeded
/// for the whole window.
pub fn monthly_series(
    entries: &[Entry],
    reference: NaiveDate,
    window_months: usize,
) -> Vec<MonthBucket> {
    let mut buckets = Vec::with_capacity(window_months);
    let (mut y, mut m) = (reference.year(), reference.month());
    for _ in 0..window_months {
        buckets.push(MonthBucket {
            year: y,
            month: m,
            label: month_label(y, m),
            total: Decimal::ZERO,
        });
        if m == 1 {
            y -= 1;
            m = 12;
        } else {
            m -= 1;
        }
    }
    for e in entries {
        if let Some(b) = buckets
            .iter_mut()
            .find(|b| b.year == e.date.year() && b.month == e.date.month())
        {
            b.total += e.amount;
        }
    }
    buckets
}

/// Dashboard headline figures. Today and this-month totals cover expenses
/// only; the available balance nets lifetime incomes against lifetime
/// expenses. Date comparison is exact calendar-day equality, never a
/// string-prefix match.
pub fn summary(expenses: &[Entry], incomes: &[Entry], reference: NaiveDate) -> SummaryStats {
    let today_expense = expenses
        .iter()
        .filter(|e| e.date == reference)
        .map(|e| e.amount)
        .sum();
    let month_expense = expenses
        .iter()
        .filter(|e| e.date.year() == reference.year() && e.date.month() == reference.month())
        .map(|e| e.amount)
        .sum();
    let spent: Decimal = expenses.iter().map(|e| e.amount).sum();
    let earned: Decimal = incomes.iter().map(|e| e.amount).sum();
    SummaryStats {
        today_expense,
        month_expense,
        available: earned - spent,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub total: Decimal,
    /// The month's entries, newest first.
    pub entries: Vec<Entry>,
}

impl MonthGroup {
    pub fn key(&self) -> String {
        month_key(self.year, self.month)
    }
}

/// Group entries by their calendar month, newest month first. Unlike the
/// series functions this lists observed months only; months without data
/// do not appear. `limit_months` truncates after sorting.
pub fn month_rollup(entries: &[Entry], limit_months: Option<usize>) -> Vec<MonthGroup> {
    let mut map: BTreeMap<(i32, u32), Vec<Entry>> = BTreeMap::new();
    for e in entries {
        map.entry((e.date.year(), e.date.month()))
            .or_default()
            .push(e.clone());
    }
    let mut groups: Vec<MonthGroup> = map
        .into_iter()
        .rev()
        .map(|((year, month), mut list)| {
            list.sort_by(|a, b| b.date.cmp(&a.date));
            let total = list.iter().map(|e| e.amount).sum();
            MonthGroup {
                year,
                month,
                label: month_label(year, month),
                total,
                entries: list,
            }
        })
        .collect();
    if let Some(n) = limit_months {
        groups.truncate(n);
    }
    groups
}
