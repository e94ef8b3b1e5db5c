// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for model-registry-client integration tests
//!
//! `MockAdapter` records every request it is handed and answers from a
//! queue of canned replies, so tests can check both what a builder sent and
//! how many times the adapter was invoked.

// Allow unused code - not every test file uses every helper
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use model_registry_client::{ApiClient, ApiError, Error, ModelArtifactsRequestBuilder};
use request_adapter::{ErrorMappings, RequestAdapter, RequestInformation};

pub const BASE_URL: &str = "http://registry.local:8080";
pub const COLLECTION_URL: &str =
    "http://registry.local:8080/api/model_registry/v1alpha3/model_artifacts";

/// A canned adapter response
#[derive(Debug, Clone)]
pub enum Reply {
    Body(Bytes),
    Empty,
    Status(StatusCode, String),
}

#[derive(Debug)]
pub struct MockAdapter {
    base_url: String,
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RequestInformation>>,
}

impl MockAdapter {
    pub fn new() -> Arc<Self> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Arc<Self> {
        Arc::new(Self {
            base_url: base_url.to_string(),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn reply(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn reply_json(&self, value: serde_json::Value) {
        self.reply(Reply::Body(Bytes::from(value.to_string())));
    }

    pub fn reply_status(&self, status: StatusCode, body: &str) {
        self.reply(Reply::Status(status, body.to_string()));
    }

    /// Number of times `send_raw` was called
    pub fn invocations(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RequestInformation> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestAdapter for MockAdapter {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_raw(
        &self,
        request: RequestInformation,
        error_mappings: Option<&ErrorMappings>,
    ) -> Result<Option<Bytes>, Error> {
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front().unwrap_or(Reply::Empty);
        match reply {
            Reply::Body(body) => Ok(Some(body)),
            Reply::Empty => Ok(None),
            Reply::Status(status, body) => {
                let structured = error_mappings.is_some_and(|m| m.matches(status));
                Err(ApiError::from_response(status, body.as_bytes(), structured).into())
            }
        }
    }
}

/// A client over `mock`, plus the adapter handle that keeps it alive
pub fn client(mock: &Arc<MockAdapter>) -> (Arc<dyn RequestAdapter>, ApiClient) {
    let adapter: Arc<dyn RequestAdapter> = mock.clone();
    let client = ApiClient::new(&adapter);
    (adapter, client)
}

pub fn model_artifacts(client: &ApiClient) -> ModelArtifactsRequestBuilder {
    client.api().model_registry().v1alpha3().model_artifacts()
}
