// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use expensebook::models::TransactionKind;
use expensebook::store::{parse_record_amount, parse_record_date, RawRecord, Snapshot};
use rust_decimal::Decimal;
use serde_json::json;

fn raw(id: &str, source: &str, amount: serde_json::Value, date: &str) -> RawRecord {
    RawRecord {
        id: id.to_string(),
        source: source.to_string(),
        amount,
        date: date.to_string(),
        user_id: "u1".to_string(),
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn accepts_number_and_string_amounts() {
    let snap = Snapshot::from_raw(
        TransactionKind::Expense,
        vec![
            raw("e1", "Chai", json!(12.5), "2025-06-15"),
            raw("e2", "Bus", json!("34.20"), "2025-06-15"),
            raw("e3", "Rent", json!(9000), "2025-06-01"),
        ],
    );
    assert_eq!(snap.len(), 3);
    assert!(snap.rejected().is_empty());
    assert_eq!(snap.entries()[0].amount, dec("12.5"));
    assert_eq!(snap.entries()[1].amount, dec("34.20"));
    assert_eq!(snap.entries()[2].amount, dec("9000"));
}

#[test]
fn datetime_dates_keep_their_calendar_day() {
    let snap = Snapshot::from_raw(
        TransactionKind::Expense,
        vec![
            raw("e1", "Chai", json!(10), "2025-06-15T23:45:00+06:00"),
            raw("e2", "Bus", json!(5), "2025-06-15 08:00:00"),
        ],
    );
    assert_eq!(snap.len(), 2);
    let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    assert!(snap.entries().iter().all(|e| e.date == day));
}

#[test]
fn malformed_date_is_dropped_and_reported() {
    let snap = Snapshot::from_raw(
        TransactionKind::Expense,
        vec![
            raw("e1", "Chai", json!(10), "15/06/2025"),
            raw("e2", "Bus", json!(5), "2025-06-15"),
        ],
    );
    assert_eq!(snap.len(), 1);
    assert_eq!(snap.entries()[0].id, "e2");
    assert_eq!(snap.rejected().len(), 1);
    assert_eq!(snap.rejected()[0].id, "e1");
    assert!(snap.rejected()[0].reason.contains("malformed date"));
}

#[test]
fn unreadable_amount_is_dropped() {
    let snap = Snapshot::from_raw(
        TransactionKind::Income,
        vec![
            raw("i1", "Salary", json!("lots"), "2025-06-01"),
            raw("i2", "Salary", json!(null), "2025-06-01"),
        ],
    );
    assert!(snap.is_empty());
    assert_eq!(snap.rejected().len(), 2);
    assert!(snap.rejected()[0].reason.contains("unreadable amount"));
}

#[test]
fn non_positive_amount_is_dropped() {
    let snap = Snapshot::from_raw(
        TransactionKind::Expense,
        vec![
            raw("e1", "Chai", json!(0), "2025-06-15"),
            raw("e2", "Refund gone wrong", json!(-25), "2025-06-15"),
        ],
    );
    assert!(snap.is_empty());
    assert!(snap.rejected()[0].reason.contains("non-positive"));
    assert!(snap.rejected()[1].reason.contains("non-positive"));
}

#[test]
fn blank_source_is_dropped() {
    let snap = Snapshot::from_raw(
        TransactionKind::Expense,
        vec![raw("e1", "   ", json!(10), "2025-06-15")],
    );
    assert!(snap.is_empty());
    assert_eq!(snap.rejected()[0].reason, "blank source");
}

#[test]
fn snapshot_preserves_backend_order() {
    let snap = Snapshot::from_raw(
        TransactionKind::Expense,
        vec![
            raw("e3", "Chai", json!(10), "2025-06-15"),
            raw("e1", "Bus", json!(5), "2025-06-13"),
            raw("e2", "Books", json!(50), "2025-06-14"),
        ],
    );
    let ids: Vec<&str> = snap.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["e3", "e1", "e2"]);
}

#[test]
fn record_date_accepts_plain_and_datetime_forms() {
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert_eq!(parse_record_date("2024-01-15"), Some(day));
    assert_eq!(parse_record_date("  2024-01-15  "), Some(day));
    assert_eq!(parse_record_date("2024-01-15T10:30:00Z"), Some(day));
    assert_eq!(parse_record_date("2024-01-15 10:30:00"), Some(day));
    assert_eq!(parse_record_date("2024-01-15x10:30"), None);
    assert_eq!(parse_record_date("15/01/2024"), None);
    assert_eq!(parse_record_date(""), None);
}

#[test]
fn record_amount_accepts_numbers_and_numeric_strings() {
    assert_eq!(parse_record_amount(&json!(42)), Some(dec("42")));
    assert_eq!(parse_record_amount(&json!(10.25)), Some(dec("10.25")));
    assert_eq!(parse_record_amount(&json!(" 7.5 ")), Some(dec("7.5")));
    assert_eq!(parse_record_amount(&json!("abc")), None);
    assert_eq!(parse_record_amount(&json!(true)), None);
    assert_eq!(parse_record_amount(&json!(null)), None);
}
