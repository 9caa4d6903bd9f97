// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::{fmt_brl, fmt_date_br};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Outcome,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Outcome => "outcome",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "outcome" => Ok(TransactionKind::Outcome),
            other => Err(format!("Invalid type '{}', expected income|outcome", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
}

/// A transaction exactly as the API sends it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTransaction {
    pub id: String,
    pub title: String,
    pub value: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiBalance {
    pub income: Decimal,
    pub outcome: Decimal,
    pub total: Decimal,
}

/// Body of `GET /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<ApiTransaction>,
    pub balance: ApiBalance,
}

/// Body of `POST /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub title: String,
    pub value: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
}

/// A transaction ready for display. The formatted fields are recomputed on
/// every load and never sent back to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub value: Decimal,
    pub formatted_value: String,
    pub formatted_date: String,
    pub kind: TransactionKind,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl From<ApiTransaction> for Transaction {
    fn from(t: ApiTransaction) -> Self {
        Transaction {
            formatted_value: fmt_brl(&t.value),
            formatted_date: fmt_date_br(&t.created_at),
            id: t.id,
            title: t.title,
            value: t.value,
            kind: t.kind,
            category: t.category,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

impl From<&ApiBalance> for Balance {
    fn from(b: &ApiBalance) -> Self {
        Balance {
            income: fmt_brl(&b.income),
            outcome: fmt_brl(&b.outcome),
            total: fmt_brl(&b.total),
        }
    }
}
