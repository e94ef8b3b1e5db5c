// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! The model artifact collection

pub mod item;

use http::Method;
use request_adapter::{
    APPLICATION_JSON, BaseRequestBuilder, Error, RequestAdapter, RequestAdapterExt,
    RequestConfiguration, RequestInformation, RequestTarget, json_body,
};
use std::sync::Weak;

use model_registry_api::{
    ListModelArtifactsQuery, ModelArtifact, ModelArtifactCreate, ModelArtifactList,
};

use crate::{accept_json, error_mappings};
use item::ModelArtifactItemRequestBuilder;

pub(crate) const URL_TEMPLATE: &str = "{+baseurl}/api/model_registry/v1alpha3/model_artifacts{?nextPageToken*,orderBy*,pageSize*,sortOrder*}";

/// Builds requests for `/api/model_registry/v1alpha3/model_artifacts`
#[derive(Debug, Clone)]
pub struct ModelArtifactsRequestBuilder {
    base: BaseRequestBuilder,
}

impl ModelArtifactsRequestBuilder {
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

    /// Navigate to a single model artifact.
    ///
    /// Fails with [`Error::InvalidArgument`] if `modelartifact_id` is empty
    /// or is the dot segment `.` or `..`.
    /// The id is percent-encoded when the URL is built.
    pub fn by_modelartifact_id(
        &self,
        modelartifact_id: &str,
    ) -> Result<ModelArtifactItemRequestBuilder, Error> {
        let base =
            self.base
                .child_with_parameter(item::URL_TEMPLATE, "modelartifactId", modelartifact_id)?;
        Ok(ModelArtifactItemRequestBuilder::from_base(base))
    }

    /// List model artifacts.
    ///
    /// Paging and ordering are passed through the query parameters of
    /// `config`. Returns `None` when the server answers with an empty body.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration<ListModelArtifactsQuery>>,
    ) -> Result<Option<ModelArtifactList>, Error> {
        let request = self.to_get_request_information(config)?;
        let adapter = self.base.adapter()?;
        let mappings = error_mappings();
        adapter
            .send::<ModelArtifactList>(request, Some(&mappings))
            .await
    }

    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<ListModelArtifactsQuery>>,
    ) -> Result<RequestInformation, Error> {
        let mut request = self.base.request_information(Method::GET);
        request.configure(config)?;
        accept_json(&mut request);
        Ok(request)
    }

    /// Create a model artifact.
    pub async fn post(
        &self,
        body: &ModelArtifactCreate,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<ModelArtifact>, Error> {
        let request = self.to_post_request_information(body, config)?;
        let adapter = self.base.adapter()?;
        let mappings = error_mappings();
        adapter
            .send::<ModelArtifact>(request, Some(&mappings))
            .await
    }

    pub fn to_post_request_information(
        &self,
        body: &ModelArtifactCreate,
        config: Option<&RequestConfiguration>,
    ) -> Result<RequestInformation, Error> {
        let content = json_body(body)?;
        let mut request = self.base.request_information(Method::POST);
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
