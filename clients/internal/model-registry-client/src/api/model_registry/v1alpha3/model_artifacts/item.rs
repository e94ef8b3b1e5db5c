// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

use http::Method;
use request_adapter::{
    APPLICATION_JSON, BaseRequestBuilder, Error, RequestAdapter, RequestAdapterExt,
    RequestConfiguration, RequestInformation, RequestTarget, json_body,
};
use std::sync::Weak;

use model_registry_api::{ModelArtifact, ModelArtifactUpdate};

use crate::{accept_json, error_mappings};

pub(crate) const URL_TEMPLATE: &str =
    "{+baseurl}/api/model_registry/v1alpha3/model_artifacts/{modelartifactId}";

/// Builds requests for `/api/model_registry/v1alpha3/model_artifacts/{modelartifactId}`
#[derive(Debug, Clone)]
pub struct ModelArtifactItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl ModelArtifactItemRequestBuilder {
    /// Create a builder directly.
    ///
    /// A template target must carry both `baseurl` and `modelartifactId`.
    pub fn new(adapter: Weak<dyn RequestAdapter>, target: impl Into<RequestTarget>) -> Self {
        Self {
            base: BaseRequestBuilder::new(adapter, URL_TEMPLATE, target),
        }
    }

    pub(crate) fn from_base(base: BaseRequestBuilder) -> Self {
        Self { base }
    }

    /// Id this builder addresses, if it was reached by navigation
    pub fn modelartifact_id(&self) -> Option<&str> {
        self.base
            .target()
            .path_parameters()
            .and_then(|params| params.get("modelartifactId"))
    }

    /// Get a model artifact.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<ModelArtifact>, Error> {
        let request = self.to_get_request_information(config)?;
        let adapter = self.base.adapter()?;
        let mappings = error_mappings();
        adapter
            .send::<ModelArtifact>(request, Some(&mappings))
            .await
    }

    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration>,
    ) -> Result<RequestInformation, Error> {
        let mut request = self.base.request_information(Method::GET);
        request.configure(config)?;
        accept_json(&mut request);
        Ok(request)
    }

    /// Update a model artifact.
    ///
    /// Only fields set in `body` are sent. A body with no fields set is
    /// rejected with [`Error::InvalidArgument`] before any request is made.
    pub async fn patch(
        &self,
        body: &ModelArtifactUpdate,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<ModelArtifact>, Error> {
        let request = self.to_patch_request_information(body, config)?;
        let adapter = self.base.adapter()?;
        let mappings = error_mappings();
        adapter
            .send::<ModelArtifact>(request, Some(&mappings))
            .await
    }

    pub fn to_patch_request_information(
        &self,
        body: &ModelArtifactUpdate,
        config: Option<&RequestConfiguration>,
    ) -> Result<RequestInformation, Error> {
        let content = json_body(body)?;
        let mut request = self.base.request_information(Method::PATCH);
        request.configure(config)?;
        accept_json(&mut request);
        request.set_content(APPLICATION_JSON, content)?;
        Ok(request)
    }

    /// Returns a request builder bound to `raw_url`. Path parameters are
    /// ignored from then on.
    pub fn with_url(&self, raw_url: &str) -> Result<Self, Error> {
        Ok(Self {
            base: self.base.with_url(raw_url)?,
        })
    }
}
