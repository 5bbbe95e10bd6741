// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

use crate::config::Settings;
use crate::models::{EPaper, Hotspot, NewEntry, TransactionKind, User};
use crate::store::RawRecord;
use crate::utils::http_client;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no GraphQL endpoint configured; set it with 'expensebook config set endpoint <url>'")]
    NoEndpoint,
    #[error("no user id configured; set it with 'expensebook config set user-id <id>'")]
    NoUser,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend rejected the operation: {0}")]
    Graphql(String),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response missing field '{0}'")]
    MissingField(String),
    #[error("response contained no data")]
    EmptyResponse,
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Blocking client for the hosted GraphQL CRUD backend. One request per
/// call, no retries; a failed call leaves nothing half-applied locally.
pub struct Client {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    access_token: String,
    user_id: String,
}

const GET_EXPENSES: &str = r#"query GetExpenses($filter: ExpenseFilter, $orderBy: [ExpenseOrderBy!]) {
  expenseCollection(filter: $filter, orderBy: $orderBy) {
    edges { node { id source amount date userId } }
  }
}"#;

const GET_INCOMES: &str = r#"query GetIncomes($filter: IncomeFilter, $orderBy: [IncomeOrderBy!]) {
  incomeCollection(filter: $filter, orderBy: $orderBy) {
    edges { node { id source amount date userId } }
  }
}"#;

const ADD_EXPENSE: &str = r#"mutation AddExpense($object: ExpenseInsertInput!) {
  insertIntoExpenseCollection(objects: [$object]) {
    records { id source amount date userId }
  }
}"#;

const ADD_INCOME: &str = r#"mutation AddIncome($object: IncomeInsertInput!) {
  insertIntoIncomeCollection(objects: [$object]) {
    records { id source amount date userId }
  }
}"#;

const EDIT_EXPENSE: &str = r#"mutation EditExpense($id: UUID!, $set: ExpenseUpdateInput!) {
  updateExpenseCollection(filter: {id: {eq: $id}}, set: $set) {
    records { id source amount date userId }
  }
}"#;

const EDIT_INCOME: &str = r#"mutation EditIncome($id: UUID!, $set: IncomeUpdateInput!) {
  updateIncomeCollection(filter: {id: {eq: $id}}, set: $set) {
    records { id source amount date userId }
  }
}"#;

const DELETE_EXPENSE: &str = r#"mutation DeleteExpense($id: UUID!) {
  deleteFromExpenseCollection(filter: {id: {eq: $id}}) {
    records { id }
  }
}"#;

const DELETE_INCOME: &str = r#"mutation DeleteIncome($id: UUID!) {
  deleteFromIncomeCollection(filter: {id: {eq: $id}}) {
    records { id }
  }
}"#;

const GET_USERS: &str = r#"query GetUsers {
  userCollection {
    edges { node { id email role createdAt } }
  }
}"#;

const GET_PROFILE: &str = r#"query GetProfile($id: UUID!) {
  userCollection(filter: {id: {eq: $id}}) {
    edges { node { id email role createdAt } }
  }
}"#;

const GET_EPAPERS: &str = r#"query GetEPapers {
  ePaperCollection(orderBy: [{createdAt: DescNullsFirst}]) {
    edges { node { id title imageUrl createdAt } }
  }
}"#;

const GET_EPAPER_BY_ID: &str = r#"query GetEPaperById($id: UUID!) {
  ePaperCollection(filter: {id: {eq: $id}}) {
    edges {
      node {
        id title imageUrl createdAt
        hotspotCollection {
          edges { node { id x y width height title content } }
        }
      }
    }
  }
}"#;

impl Client {
    pub fn new(settings: &Settings) -> Result<Client> {
        Ok(Client {
            http: http_client()?,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            access_token: settings.access_token.clone(),
            user_id: settings.user_id.clone(),
        })
    }

    fn execute(&self, query: &str, variables: Value) -> ClientResult<Value> {
        if self.endpoint.is_empty() {
            return Err(ClientError::NoEndpoint);
        }
        let resp = self
            .http
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.access_token)
            .json(&GqlRequest { query, variables })
            .send()?
            .error_for_status()?;
        let body: GqlResponse = resp.json()?;
        if let Some(err) = body.errors.first() {
            return Err(ClientError::Graphql(err.message.clone()));
        }
        body.data.ok_or(ClientError::EmptyResponse)
    }

    fn require_user(&self) -> ClientResult<&str> {
        if self.user_id.is_empty() {
            return Err(ClientError::NoUser);
        }
        Ok(&self.user_id)
    }

    /// Current expense or income list of the configured user, newest first
    /// per the backend's ordering. Rows come back raw; `Snapshot::from_raw`
    /// does the validation.
    pub fn fetch_entries(&self, kind: TransactionKind) -> ClientResult<Vec<RawRecord>> {
        let user_id = self.require_user()?;
        let (query, field) = match kind {
            TransactionKind::Expense => (GET_EXPENSES, "expenseCollection"),
            TransactionKind::Income => (GET_INCOMES, "incomeCollection"),
        };
        let vars = json!({
            "filter": { "userId": { "eq": user_id } },
            "orderBy": [{ "date": "DescNullsLast" }],
        });
        let data = self.execute(query, vars)?;
        decode_collection(&data, field)
    }

    pub fn insert_entry(&self, kind: TransactionKind, entry: &NewEntry) -> ClientResult<RawRecord> {
        let user_id = self.require_user()?;
        let (query, field) = match kind {
            TransactionKind::Expense => (ADD_EXPENSE, "insertIntoExpenseCollection"),
            TransactionKind::Income => (ADD_INCOME, "insertIntoIncomeCollection"),
        };
        let vars = json!({
            "object": {
                "source": entry.source,
                "amount": amount_value(entry.amount),
                "date": entry.date.format("%Y-%m-%d").to_string(),
                "userId": user_id,
            }
        });
        let data = self.execute(query, vars)?;
        let records: Vec<RawRecord> = decode_records(&data, field)?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::Graphql("insert returned no record".to_string()))
    }

    pub fn update_entry(
        &self,
        kind: TransactionKind,
        id: &str,
        source: &str,
        amount: Decimal,
    ) -> ClientResult<RawRecord> {
        let (query, field) = match kind {
            TransactionKind::Expense => (EDIT_EXPENSE, "updateExpenseCollection"),
            TransactionKind::Income => (EDIT_INCOME, "updateIncomeCollection"),
        };
        let vars = json!({
            "id": id,
            "set": { "source": source, "amount": amount_value(amount) },
        });
        let data = self.execute(query, vars)?;
        let records: Vec<RawRecord> = decode_records(&data, field)?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::Graphql(format!("no {} updated for id '{}'", kind.as_str(), id)))
    }

    /// True when the backend confirms a deleted record.
    pub fn delete_entry(&self, kind: TransactionKind, id: &str) -> ClientResult<bool> {
        let (query, field) = match kind {
            TransactionKind::Expense => (DELETE_EXPENSE, "deleteFromExpenseCollection"),
            TransactionKind::Income => (DELETE_INCOME, "deleteFromIncomeCollection"),
        };
        let data = self.execute(query, json!({ "id": id }))?;
        let records: Vec<IdOnly> = decode_records(&data, field)?;
        Ok(!records.is_empty())
    }

    pub fn fetch_users(&self) -> ClientResult<Vec<User>> {
        let data = self.execute(GET_USERS, json!({}))?;
        decode_collection(&data, "userCollection")
    }

    /// Profile of the configured user, if the backend knows the id.
    pub fn current_user(&self) -> ClientResult<Option<User>> {
        let user_id = self.require_user()?;
        let data = self.execute(GET_PROFILE, json!({ "id": user_id }))?;
        let users: Vec<User> = decode_collection(&data, "userCollection")?;
        Ok(users.into_iter().next())
    }

    pub fn fetch_epapers(&self) -> ClientResult<Vec<EPaper>> {
        let data = self.execute(GET_EPAPERS, json!({}))?;
        decode_collection(&data, "ePaperCollection")
    }

    pub fn fetch_epaper(&self, id: &str) -> ClientResult<Option<(EPaper, Vec<Hotspot>)>> {
        let data = self.execute(GET_EPAPER_BY_ID, json!({ "id": id }))?;
        let nodes: Vec<EPaperNode> = decode_collection(&data, "ePaperCollection")?;
        Ok(nodes.into_iter().next().map(|n| {
            let hotspots = n
                .hotspot_collection
                .map(|h| h.edges.into_iter().map(|e| e.node).collect())
                .unwrap_or_default();
            (n.paper, hotspots)
        }))
    }
}

#[derive(serde::Serialize)]
struct GqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GqlError>,
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Debug, Deserialize)]
struct Edges<T> {
    edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
struct Records<T> {
    records: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct IdOnly {
    #[serde(rename = "id")]
    _id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EPaperNode {
    #[serde(flatten)]
    paper: EPaper,
    #[serde(default)]
    hotspot_collection: Option<Edges<Hotspot>>,
}

/// Pull the edges/node rows of one collection out of a response `data`
/// object, e.g. `expenseCollection`.
pub fn decode_collection<T: DeserializeOwned>(data: &Value, field: &str) -> ClientResult<Vec<T>> {
    let coll = data
        .get(field)
        .cloned()
        .ok_or_else(|| ClientError::MissingField(field.to_string()))?;
    let parsed: Edges<T> = serde_json::from_value(coll)?;
    Ok(parsed.edges.into_iter().map(|e| e.node).collect())
}

/// Pull the records list out of a mutation's response `data` object.
pub fn decode_records<T: DeserializeOwned>(data: &Value, field: &str) -> ClientResult<Vec<T>> {
    let coll = data
        .get(field)
        .cloned()
        .ok_or_else(|| ClientError::MissingField(field.to_string()))?;
    let parsed: Records<T> = serde_json::from_value(coll)?;
    Ok(parsed.records)
}

/// Amounts go over the wire as JSON numbers, matching the backend's
/// numeric columns. `to_f64` is total for `Decimal` values, so the string
/// arm only keeps the function infallible.
fn amount_value(amount: Decimal) -> Value {
    amount
        .to_f64()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(amount.to_string()))
}
