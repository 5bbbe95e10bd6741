// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shared shape of the Expense and Income tables: a dated, user-owned
/// amount with a free-text source label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub source: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: String,
}

/// Stored as uppercase literals on the backend; anything unrecognized is
/// treated as a regular user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[serde(other)]
    User,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EPaper {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub created_at: String,
}

/// A tappable region on an e-paper page. Geometry is in fractional page
/// coordinates as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub id: String,
    #[serde(default)]
    pub e_paper_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("source is required")]
    EmptySource,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("date {0} is in the future")]
    FutureDate(NaiveDate),
}

pub fn check_source(source: &str) -> Result<(), ValidationError> {
    if source.trim().is_empty() {
        return Err(ValidationError::EmptySource);
    }
    Ok(())
}

pub fn check_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(())
}

/// A not-yet-submitted expense or income. Built from user input and
/// validated against `today` before any mutation is attempted.
#[derive(Debug, Clone, Serialize)]
pub struct NewEntry {
    pub source: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl NewEntry {
    pub fn parse(
        source: &str,
        amount: Decimal,
        date: &str,
        today: NaiveDate,
    ) -> Result<NewEntry, ValidationError> {
        check_source(source)?;
        check_amount(amount)?;
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
        if date > today {
            return Err(ValidationError::FutureDate(date));
        }
        Ok(NewEntry {
            source: source.trim().to_string(),
            amount,
            date,
        })
    }
}
