// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use expensebook::client::{decode_collection, decode_records, ClientError};
use expensebook::models::{EPaper, Role, User};
use expensebook::store::RawRecord;
use serde_json::json;

#[test]
fn decodes_a_transaction_collection() {
    let data = json!({
        "expenseCollection": {
            "edges": [
                { "node": { "id": "e1", "source": "Chai", "amount": 12.5, "date": "2025-06-15", "userId": "u1" } },
                { "node": { "id": "e2", "source": "Bus", "amount": "34.20", "date": "2025-06-15T08:00:00Z", "userId": "u1" } },
            ]
        }
    });
    let rows: Vec<RawRecord> = decode_collection(&data, "expenseCollection").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "e1");
    assert_eq!(rows[0].user_id, "u1");
    assert_eq!(rows[1].amount, json!("34.20"));
    assert_eq!(rows[1].date, "2025-06-15T08:00:00Z");
}

#[test]
fn decodes_an_empty_collection() {
    let data = json!({ "incomeCollection": { "edges": [] } });
    let rows: Vec<RawRecord> = decode_collection(&data, "incomeCollection").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn missing_collection_field_is_an_error() {
    let data = json!({ "somethingElse": {} });
    let err = decode_collection::<RawRecord>(&data, "expenseCollection").unwrap_err();
    match err {
        ClientError::MissingField(field) => assert_eq!(field, "expenseCollection"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn decodes_mutation_records() {
    let data = json!({
        "insertIntoExpenseCollection": {
            "records": [
                { "id": "e9", "source": "Chai", "amount": 12, "date": "2025-06-15", "userId": "u1" }
            ]
        }
    });
    let rows: Vec<RawRecord> = decode_records(&data, "insertIntoExpenseCollection").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "e9");
}

// The backend stores roles as "ADMIN" / "USER".
#[test]
fn decodes_uppercase_roles_with_fallback() {
    let data = json!({
        "userCollection": {
            "edges": [
                { "node": { "id": "u1", "email": "a@example.com", "role": "ADMIN", "createdAt": "2025-01-01" } },
                { "node": { "id": "u2", "email": "b@example.com", "role": "USER", "createdAt": "2025-01-02" } },
                { "node": { "id": "u3", "email": "c@example.com", "role": "MODERATOR", "createdAt": "2025-01-03" } },
            ]
        }
    });
    let users: Vec<User> = decode_collection(&data, "userCollection").unwrap();
    assert!(users[0].role.is_admin());
    assert_eq!(users[0].role.as_str(), "ADMIN");
    assert_eq!(users[1].role, Role::User);
    assert!(!users[1].role.is_admin());
    assert_eq!(users[1].role.as_str(), "USER");
    // Unknown roles degrade to the least-privileged one.
    assert_eq!(users[2].role, Role::User);
}

#[test]
fn decodes_epapers_with_camel_case_fields() {
    let data = json!({
        "ePaperCollection": {
            "edges": [
                { "node": { "id": "p1", "title": "Morning edition", "imageUrl": "https://cdn/img.png", "createdAt": "2025-06-15" } }
            ]
        }
    });
    let papers: Vec<EPaper> = decode_collection(&data, "ePaperCollection").unwrap();
    assert_eq!(papers[0].image_url, "https://cdn/img.png");
    assert_eq!(papers[0].created_at, "2025-06-15");
}
