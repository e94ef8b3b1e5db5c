// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Per-call request configuration

use http::{HeaderMap, HeaderName, HeaderValue};

/// Extra headers and typed query parameters for a single verb call.
///
/// `Q` is the query parameter type of the endpoint. Endpoints without query
/// parameters use `()`. Query values are serialized with serde; fields that
/// serialize to `null` are left out of the URL.
#[derive(Debug, Clone, Default)]
pub struct RequestConfiguration<Q = ()> {
    pub headers: HeaderMap,
    pub query_parameters: Q,
}

impl<Q: Default> RequestConfiguration<Q> {
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
            query_parameters: Q::default(),
        }
    }
}

impl<Q> RequestConfiguration<Q> {
    /// Append a header. Repeated names keep every value.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_query(mut self, query_parameters: Q) -> Self {
        self.query_parameters = query_parameters;
        self
    }
}
