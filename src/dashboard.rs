// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard view state and the controller that drives it.
//!
//! [`DashboardState`] is a reducer over load and delete completions. Every
//! load is issued with a sequence number and a response is only applied if
//! it is newer than the snapshot already shown. A delete that completes
//! while loads are in flight leaves a tombstone, so a snapshot taken before
//! the delete cannot bring the row back.

use std::collections::{HashMap, HashSet};

use crate::api::{ApiError, TransactionsApi};
use crate::models::{Balance, NewTransaction, Transaction, TransactionsResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    revision: u64,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTicket {
    id: String,
}

impl DeleteTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Stale,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    transactions: Vec<Transaction>,
    balance: Option<Balance>,
    issued_seq: u64,
    applied_seq: u64,
    revision: u64,
    loaded_revision: Option<u64>,
    // id -> newest load seq issued when the delete completed
    tombstones: HashMap<String, u64>,
    pending_deletes: HashSet<String>,
    last_error: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// `None` until the first load is applied.
    pub fn balance(&self) -> Option<&Balance> {
        self.balance.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.applied_seq > 0
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True before the first load and after every refresh signal that no
    /// applied load has caught up with yet.
    pub fn needs_reload(&self) -> bool {
        self.loaded_revision != Some(self.revision)
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.pending_deletes.contains(id)
    }

    /// Explicit refresh signal, e.g. after a transaction was created.
    pub fn request_refresh(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_seq += 1;
        LoadTicket {
            seq: self.issued_seq,
            revision: self.revision,
        }
    }

    pub fn apply_load(&mut self, ticket: LoadTicket, resp: TransactionsResponse) -> LoadOutcome {
        if ticket.seq <= self.applied_seq {
            tracing::warn!(
                seq = ticket.seq,
                applied = self.applied_seq,
                "discarding stale load"
            );
            return LoadOutcome::Stale;
        }

        let tombstones = &self.tombstones;
        let transactions: Vec<Transaction> = resp
            .transactions
            .into_iter()
            .filter(|t| match tombstones.get(&t.id) {
                Some(&deleted_at) => ticket.seq > deleted_at,
                None => true,
            })
            .map(Transaction::from)
            .collect();

        self.transactions = transactions;
        self.balance = Some(Balance::from(&resp.balance));
        self.applied_seq = ticket.seq;
        self.loaded_revision = Some(ticket.revision);
        self.last_error = None;
        // Any load that could still see these rows is stale from now on.
        self.tombstones.retain(|_, deleted_at| *deleted_at >= ticket.seq);

        tracing::debug!(
            seq = ticket.seq,
            rows = self.transactions.len(),
            "applied load"
        );
        LoadOutcome::Applied
    }

    pub fn fail_load(&mut self, ticket: LoadTicket, err: &ApiError) -> LoadOutcome {
        if ticket.seq <= self.applied_seq {
            return LoadOutcome::Stale;
        }
        tracing::warn!(seq = ticket.seq, error = %err, "load failed");
        self.last_error = Some(format!("Failed to load transactions: {}", err));
        LoadOutcome::Applied
    }

    /// Returns `None` while a delete for the same id is still in flight.
    pub fn begin_delete(&mut self, id: &str) -> Option<DeleteTicket> {
        if !self.pending_deletes.insert(id.to_string()) {
            tracing::debug!(id, "delete already in flight");
            return None;
        }
        Some(DeleteTicket { id: id.to_string() })
    }

    pub fn finish_delete(&mut self, ticket: DeleteTicket, result: Result<(), &ApiError>) {
        self.pending_deletes.remove(&ticket.id);
        match result {
            Ok(()) => {
                self.transactions.retain(|t| t.id != ticket.id);
                self.tombstones.insert(ticket.id.clone(), self.issued_seq);
                self.last_error = None;
                tracing::info!(id = %ticket.id, "transaction removed");
            }
            Err(err) => {
                tracing::warn!(id = %ticket.id, error = %err, "delete failed");
                self.last_error = Some(format!(
                    "Failed to delete transaction {}: {}",
                    ticket.id, err
                ));
            }
        }
    }

    pub fn fail(&mut self, message: String) {
        self.last_error = Some(message);
    }
}

/// Drives a [`DashboardState`] against a [`TransactionsApi`].
pub struct Dashboard<A> {
    api: A,
    state: DashboardState,
}

impl<A: TransactionsApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Dashboard {
            api,
            state: DashboardState::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn refresh(&mut self) -> Result<LoadOutcome, ApiError> {
        let ticket = self.state.begin_load();
        match self.api.list() {
            Ok(resp) => Ok(self.state.apply_load(ticket, resp)),
            Err(e) => {
                self.state.fail_load(ticket, &e);
                Err(e)
            }
        }
    }

    /// Loads only when the state has never been loaded or a refresh was
    /// requested since the last applied load.
    pub fn sync(&mut self) -> Result<Option<LoadOutcome>, ApiError> {
        if !self.state.needs_reload() {
            return Ok(None);
        }
        self.refresh().map(Some)
    }

    /// Deletes remotely, then drops the row locally without refetching.
    /// Returns `Ok(false)` when a delete for `id` is already in flight.
    pub fn remove(&mut self, id: &str) -> Result<bool, ApiError> {
        let Some(ticket) = self.state.begin_delete(id) else {
            return Ok(false);
        };
        match self.api.delete(id) {
            Ok(()) => {
                self.state.finish_delete(ticket, Ok(()));
                Ok(true)
            }
            Err(e) => {
                self.state.finish_delete(ticket, Err(&e));
                Err(e)
            }
        }
    }

    /// Errors only when the POST itself fails.
    pub fn create(&mut self, tx: &NewTransaction) -> Result<(), ApiError> {
        if let Err(e) = self.api.create(tx) {
            tracing::warn!(title = %tx.title, error = %e, "create failed");
            self.state
                .fail(format!("Failed to create transaction '{}': {}", tx.title, e));
            return Err(e);
        }
        tracing::info!(title = %tx.title, "transaction created");
        self.state.request_refresh();
        // The row exists remotely now; a failed reload only lands in last_error.
        if let Err(e) = self.sync() {
            tracing::warn!(title = %tx.title, error = %e, "reload after create failed");
        }
        Ok(())
    }
}
