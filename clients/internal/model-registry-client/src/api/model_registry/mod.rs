// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

pub mod v1alpha3;

use request_adapter::{BaseRequestBuilder, Error, RequestAdapter, RequestTarget};
use std::sync::Weak;

use v1alpha3::V1alpha3RequestBuilder;

pub(crate) const URL_TEMPLATE: &str = "{+baseurl}/api/model_registry";

/// Builds requests for operations under `/api/model_registry`
#[derive(Debug, Clone)]
pub struct ModelRegistryRequestBuilder {
    base: BaseRequestBuilder,
}

impl ModelRegistryRequestBuilder {
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

    /// The `v1alpha3` API version
    pub fn v1alpha3(&self) -> V1alpha3RequestBuilder {
        V1alpha3RequestBuilder::from_parent(&self.base)
    }

    pub fn with_url(&self, raw_url: &str) -> Result<Self, Error> {
        Ok(Self {
            base: self.base.with_url(raw_url)?,
        })
    }
}
