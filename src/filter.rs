// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};

use crate::models::{Entry, TransactionKind};

/// How many incomes the no-filter income view shows.
pub const RECENT_INCOMES: usize = 5;

pub fn by_search(entries: &[Entry], query: &str) -> Vec<Entry> {
    if query.is_empty() {
        return entries.to_vec();
    }
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| e.source.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn by_exact_day(entries: &[Entry], day: NaiveDate) -> Vec<Entry> {
    entries.iter().filter(|e| e.date == day).cloned().collect()
}

pub fn by_month(entries: &[Entry], year: i32, month: u32) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .cloned()
        .collect()
}

/// The `n` newest entries by date. Stable on ties, so entries sharing a
/// date keep their snapshot order.
pub fn recent(entries: &[Entry], n: usize) -> Vec<Entry> {
    let mut list = entries.to_vec();
    list.sort_by(|a, b| b.date.cmp(&a.date));
    list.truncate(n);
    list
}

/// The rows a list shows when no search or date filter is active:
/// today's transactions for expenses, the newest five for incomes.
pub fn default_view(entries: &[Entry], kind: TransactionKind, reference: NaiveDate) -> Vec<Entry> {
    match kind {
        TransactionKind::Expense => by_exact_day(entries, reference),
        TransactionKind::Income => recent(entries, RECENT_INCOMES),
    }
}

/// One screen visit's filter state. Built fresh from the invocation's
/// flags and discarded afterwards; nothing carries over between visits.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub query: Option<String>,
    pub day: Option<NaiveDate>,
    pub month: Option<(i32, u32)>,
}

impl ListFilter {
    /// An empty search string does not count as an active filter.
    pub fn is_active(&self) -> bool {
        self.query.as_deref().is_some_and(|q| !q.is_empty())
            || self.day.is_some()
            || self.month.is_some()
    }

    /// Applies the active filters in AND fashion: a row must satisfy the
    /// search and every active date constraint.
    pub fn apply(&self, entries: &[Entry]) -> Vec<Entry> {
        let mut rows = match self.query.as_deref() {
            Some(q) => by_search(entries, q),
            None => entries.to_vec(),
        };
        if let Some(day) = self.day {
            rows = by_exact_day(&rows, day);
        }
        if let Some((year, month)) = self.month {
            rows = by_month(&rows, year, month);
        }
        rows
    }
}

/// What a list renders: the filtered rows while any filter is active,
/// otherwise that list's default view.
pub fn visible_rows(
    entries: &[Entry],
    kind: TransactionKind,
    filter: &ListFilter,
    reference: NaiveDate,
) -> Vec<Entry> {
    if filter.is_active() {
        filter.apply(entries)
    } else {
        default_view(entries, kind, reference)
    }
}
