// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client for the remote finance API.

use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::models::{NewTransaction, TransactionsResponse};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API URL '{0}': {1}")]
    InvalidUrl(String, String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: StatusCode,
    },

    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("transaction id must not be empty")]
    EmptyId,
}

/// The three calls the dashboard makes against the finance API.
pub trait TransactionsApi {
    /// `GET /transactions`
    fn list(&self) -> Result<TransactionsResponse, ApiError>;

    /// `DELETE /transactions/:id`
    fn delete(&self, id: &str) -> Result<(), ApiError>;

    /// `POST /transactions`
    fn create(&self, tx: &NewTransaction) -> Result<(), ApiError>;
}

pub struct HttpApi {
    client: reqwest::blocking::Client,
    base: Url,
}

impl HttpApi {
    pub fn new(client: reqwest::blocking::Client, base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(base_url.to_string(), e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(
                base_url.to_string(),
                "cannot be used as a base".into(),
            ));
        }
        Ok(HttpApi { client, base })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn send(
        &self,
        method: &'static str,
        req: reqwest::blocking::RequestBuilder,
        url: &Url,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        tracing::debug!(%url, method, "sending request");
        let resp = req.send().map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status,
            });
        }
        Ok(resp)
    }
}

impl TransactionsApi for HttpApi {
    fn list(&self) -> Result<TransactionsResponse, ApiError> {
        let url = self.endpoint(&["transactions"]);
        let resp = self.send("GET", self.client.get(url.clone()), &url)?;
        let body = resp.text().map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    fn delete(&self, id: &str) -> Result<(), ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::EmptyId);
        }
        let url = self.endpoint(&["transactions", id]);
        self.send("DELETE", self.client.delete(url.clone()), &url)?;
        Ok(())
    }

    fn create(&self, tx: &NewTransaction) -> Result<(), ApiError> {
        let url = self.endpoint(&["transactions"]);
        self.send("POST", self.client.post(url.clone()).json(tx), &url)?;
        Ok(())
    }
}
