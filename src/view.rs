// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use comfy_table::Table;
use serde::Serialize;

use crate::dashboard::DashboardState;
use crate::models::TransactionKind;
use crate::utils::pretty_table;

pub const TABLE_HEADERS: [&str; 5] = ["Título", "Preço", "Categoria", "Data", "Ação"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub label: &'static str,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: String,
    pub title: String,
    pub price: String,
    pub kind: TransactionKind,
    pub category: String,
    pub date: String,
}

impl Row {
    pub fn action(&self) -> String {
        format!("rm {}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub cards: Option<[Card; 3]>,
    pub rows: Vec<Row>,
}

/// Project the current state. Rows keep server order.
pub fn project(state: &DashboardState) -> DashboardView {
    let cards = state.balance().map(|b| {
        [
            Card {
                label: "Entradas",
                amount: b.income.clone(),
            },
            Card {
                label: "Saídas",
                amount: b.outcome.clone(),
            },
            Card {
                label: "Total",
                amount: b.total.clone(),
            },
        ]
    });

    let rows = state
        .transactions()
        .iter()
        .map(|t| Row {
            id: t.id.clone(),
            title: t.title.clone(),
            price: match t.kind {
                TransactionKind::Outcome => format!("- {}", t.formatted_value),
                TransactionKind::Income => t.formatted_value.clone(),
            },
            kind: t.kind,
            category: t.category.title.clone(),
            date: t.formatted_date.clone(),
        })
        .collect();

    DashboardView {
        error: state.last_error().map(str::to_string),
        cards,
        rows,
    }
}

pub fn cards_table(cards: &[Card; 3]) -> Table {
    pretty_table(
        &cards.iter().map(|c| c.label).collect::<Vec<_>>(),
        vec![cards.iter().map(|c| c.amount.clone()).collect()],
    )
}

pub fn transactions_table(rows: &[Row]) -> Table {
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.title.clone(),
                r.price.clone(),
                r.category.clone(),
                r.date.clone(),
                r.action(),
            ]
        })
        .collect();
    pretty_table(&TABLE_HEADERS, data)
}

pub fn render(view: &DashboardView) -> String {
    let mut out = String::new();
    if let Some(err) = &view.error {
        out.push_str(&format!("Erro: {}\n", err));
    }
    if let Some(cards) = &view.cards {
        out.push_str(&cards_table(cards).to_string());
        out.push('\n');
    }
    out.push_str(&transactions_table(&view.rows).to_string());
    out
}
