// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Builders for paths under `/api`

pub mod model_registry;

use request_adapter::{BaseRequestBuilder, Error, RequestAdapter, RequestTarget};
use std::sync::Weak;

use model_registry::ModelRegistryRequestBuilder;

pub(crate) const URL_TEMPLATE: &str = "{+baseurl}/api";

/// Builds requests for operations under `/api`
#[derive(Debug, Clone)]
pub struct ApiRequestBuilder {
    base: BaseRequestBuilder,
}

impl ApiRequestBuilder {
    pub fn new(adapter: Weak<dyn RequestAdapter>, target: impl Into<RequestTarget>) -> Self {
        Self {
            base: BaseRequestBuilder::new(adapter, URL_TEMPLATE, target),
        }
    }

    pub(crate) fn from_parent(parent: &BaseRequestBuilder) -> Self {
        Self {
            base: parent.child(URL_TEMPLATE),
        }
    }

    /// The `/api/model_registry` segment
    pub fn model_registry(&self) -> ModelRegistryRequestBuilder {
        ModelRegistryRequestBuilder::from_parent(&self.base)
    }

    /// Returns a request builder bound to `raw_url`. Path parameters are
    /// ignored from then on.
    pub fn with_url(&self, raw_url: &str) -> Result<Self, Error> {
        Ok(Self {
            base: self.base.with_url(raw_url)?,
        })
    }
}
