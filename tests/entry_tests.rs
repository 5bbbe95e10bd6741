// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use expensebook::models::{check_amount, check_source, NewEntry, ValidationError};
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn accepts_a_valid_entry_and_trims_the_source() {
    let entry = NewEntry::parse("  Chai  ", dec("12.50"), "2025-06-14", d("2025-06-15")).unwrap();
    assert_eq!(entry.source, "Chai");
    assert_eq!(entry.amount, dec("12.50"));
    assert_eq!(entry.date, d("2025-06-14"));
}

#[test]
fn accepts_today_as_the_entry_date() {
    let entry = NewEntry::parse("Chai", dec("12"), "2025-06-15", d("2025-06-15")).unwrap();
    assert_eq!(entry.date, d("2025-06-15"));
}

#[test]
fn rejects_an_empty_source() {
    let err = NewEntry::parse("   ", dec("12"), "2025-06-15", d("2025-06-15")).unwrap_err();
    assert_eq!(err, ValidationError::EmptySource);
    assert_eq!(check_source(""), Err(ValidationError::EmptySource));
    assert!(check_source("Chai").is_ok());
}

#[test]
fn rejects_zero_and_negative_amounts() {
    let err = NewEntry::parse("Chai", Decimal::ZERO, "2025-06-15", d("2025-06-15")).unwrap_err();
    assert_eq!(err, ValidationError::NonPositiveAmount);
    let err = NewEntry::parse("Chai", dec("-5"), "2025-06-15", d("2025-06-15")).unwrap_err();
    assert_eq!(err, ValidationError::NonPositiveAmount);
    assert_eq!(
        check_amount(dec("-0.01")),
        Err(ValidationError::NonPositiveAmount)
    );
    assert!(check_amount(dec("0.01")).is_ok());
}

#[test]
fn rejects_a_malformed_date() {
    let err = NewEntry::parse("Chai", dec("12"), "15/06/2025", d("2025-06-15")).unwrap_err();
    assert_eq!(err, ValidationError::InvalidDate("15/06/2025".to_string()));
}

#[test]
fn rejects_a_future_date() {
    let err = NewEntry::parse("Chai", dec("12"), "2025-06-16", d("2025-06-15")).unwrap_err();
    assert_eq!(err, ValidationError::FutureDate(d("2025-06-16")));
}

#[test]
fn validation_errors_read_like_user_messages() {
    assert_eq!(ValidationError::EmptySource.to_string(), "source is required");
    assert_eq!(
        ValidationError::NonPositiveAmount.to_string(),
        "amount must be greater than zero"
    );
    assert!(ValidationError::InvalidDate("oops".to_string())
        .to_string()
        .contains("oops"));
}
