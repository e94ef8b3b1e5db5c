// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! The request adapter contract

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::information::RequestInformation;

/// Performs the I/O for request builders.
///
/// One call to [`send_raw`](RequestAdapter::send_raw) is one HTTP exchange.
/// Implementations own transport, authentication, timeouts and cancellation;
/// builders only describe requests.
#[async_trait]
pub trait RequestAdapter: Send + Sync {
    /// Base URL that client roots substitute for `{+baseurl}`
    fn base_url(&self) -> &str;

    /// Send a request and return the response body.
    ///
    /// Returns `Ok(None)` for a successful response with an empty body. A
    /// non-2xx status is returned as [`Error::Api`]; if the status matches
    /// one of `error_mappings` the body is decoded as a structured error.
    async fn send_raw(
        &self,
        request: RequestInformation,
        error_mappings: Option<&ErrorMappings>,
    ) -> Result<Option<Bytes>, Error>;
}

/// Typed sending, available on every adapter.
#[async_trait]
pub trait RequestAdapterExt: RequestAdapter {
    /// Send a request and decode the response body into `T`.
    async fn send<T>(
        &self,
        request: RequestInformation,
        error_mappings: Option<&ErrorMappings>,
    ) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned + Send + 'static,
    {
        match self.send_raw(request, error_mappings).await? {
            Some(body) => serde_json::from_slice(&body)
                .map(Some)
                .map_err(Error::Deserialization),
            None => Ok(None),
        }
    }
}

impl<A: RequestAdapter + ?Sized> RequestAdapterExt for A {}

/// A status code pattern in an error mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPattern {
    /// One specific status, e.g. `404`
    Exact(u16),
    /// `4XX`
    ClientError,
    /// `5XX`
    ServerError,
    /// `XXX`, any non-2xx status
    Any,
}

impl StatusPattern {
    pub fn matches(&self, status: StatusCode) -> bool {
        match self {
            Self::Exact(code) => status.as_u16() == *code,
            Self::ClientError => status.is_client_error(),
            Self::ServerError => status.is_server_error(),
            Self::Any => !status.is_success(),
        }
    }
}

/// Statuses whose response body is the API's structured error payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMappings(Vec<StatusPattern>);

impl ErrorMappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, pattern: StatusPattern) -> Self {
        self.0.push(pattern);
        self
    }

    pub fn matches(&self, status: StatusCode) -> bool {
        self.0.iter().any(|p| p.matches(status))
    }
}
