// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Root of the versioned `v1alpha3` namespace

pub mod model_artifacts;

use request_adapter::{BaseRequestBuilder, Error, RequestAdapter, RequestTarget};
use std::sync::Weak;

use model_artifacts::ModelArtifactsRequestBuilder;

pub(crate) const URL_TEMPLATE: &str = "{+baseurl}/api/model_registry/v1alpha3";

/// Builds requests for operations under `/api/model_registry/v1alpha3`
#[derive(Debug, Clone)]
pub struct V1alpha3RequestBuilder {
    base: BaseRequestBuilder,
}

impl V1alpha3RequestBuilder {
    /// Create a builder from an adapter handle and either path parameters
    /// (must include `baseurl`) or a raw URL target.
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

    /// Path used to manage the list of model artifacts
    pub fn model_artifacts(&self) -> ModelArtifactsRequestBuilder {
        ModelArtifactsRequestBuilder::from_parent(&self.base)
    }

    /// Returns a request builder bound to `raw_url`. Path parameters are
    /// ignored from then on.
    pub fn with_url(&self, raw_url: &str) -> Result<Self, Error> {
        Ok(Self {
            base: self.base.with_url(raw_url)?,
        })
    }
}
