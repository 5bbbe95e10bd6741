// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Entry, TransactionKind};

/// A transaction row as the backend returns it, before validation.
/// `amount` arrives as a JSON number or a numeric string depending on the
/// column type; `date` arrives as `YYYY-MM-DD` or a full ISO datetime.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub amount: serde_json::Value,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Rejected {
    pub id: String,
    pub reason: String,
}

/// Immutable in-memory snapshot of one user's expense or income list, as
/// last fetched from the backend. Rows that fail validation are dropped
/// here and logged, so aggregation never sees a malformed record; the
/// dropped rows stay available for the doctor report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    entries: Vec<Entry>,
    rejected: Vec<Rejected>,
}

impl Snapshot {
    pub fn from_raw(kind: TransactionKind, raw: Vec<RawRecord>) -> Snapshot {
        let mut entries = Vec::with_capacity(raw.len());
        let mut rejected = Vec::new();
        for rec in raw {
            match validate(&rec) {
                Ok(entry) => entries.push(entry),
                Err(reason) => {
                    log::warn!(
                        "skipping {} record '{}': {}",
                        kind.as_str(),
                        rec.id,
                        reason
                    );
                    rejected.push(Rejected { id: rec.id, reason });
                }
            }
        }
        log::debug!(
            "{} snapshot: {} rows kept, {} dropped",
            kind.as_str(),
            entries.len(),
            rejected.len()
        );
        Snapshot { entries, rejected }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn rejected(&self) -> &[Rejected] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(rec: &RawRecord) -> Result<Entry, String> {
    let date = parse_record_date(&rec.date)
        .ok_or_else(|| format!("malformed date '{}'", rec.date))?;
    let amount = parse_record_amount(&rec.amount)
        .ok_or_else(|| format!("unreadable amount '{}'", rec.amount))?;
    if amount <= Decimal::ZERO {
        return Err(format!("non-positive amount '{}'", amount));
    }
    if rec.source.trim().is_empty() {
        return Err("blank source".to_string());
    }
    Ok(Entry {
        id: rec.id.clone(),
        source: rec.source.clone(),
        amount,
        date,
        user_id: rec.user_id.clone(),
    })
}

/// Take the calendar date a record was stored with. A trailing time
/// component is ignored rather than converted through a timezone, so a
/// record never shifts into an adjacent day.
pub fn parse_record_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.len() > 10 {
        let head = s.get(..10)?;
        let sep = s.as_bytes()[10];
        if sep != b'T' && sep != b' ' {
            return None;
        }
        return NaiveDate::parse_from_str(head, "%Y-%m-%d").ok();
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_record_amount(v: &serde_json::Value) -> Option<Decimal> {
    match v {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                Decimal::try_from(n.as_f64()?).ok()
            }
        }
        serde_json::Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    }
}
