// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Model Registry Client Library
//!
//! This client provides typed access to the model registry REST API. It is a
//! tree of request builders mirroring the URL path:
//!
//! ```text
//! ApiClient                              {+baseurl}
//!  └─ api()                              /api
//!      └─ model_registry()               /model_registry
//!          └─ v1alpha3()                 /v1alpha3
//!              └─ model_artifacts()      /model_artifacts          GET, POST
//!                  └─ by_modelartifact_id(id)  /{modelartifactId}  GET, PATCH
//! ```
//!
//! Navigation never touches the network. Only the verb methods (`get`,
//! `post`, `patch`) send a request, through the [`RequestAdapter`] given to
//! [`ApiClient::new`]. Each verb has a matching `to_<verb>_request_information`
//! method that builds the request without sending it.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use model_registry_client::{ApiClient, ModelArtifactUpdate, ArtifactState};
//! use request_adapter::{AdapterConfig, RequestAdapter, ReqwestAdapter};
//!
//! let config = AdapterConfig::from_env()?;
//! let adapter: Arc<dyn RequestAdapter> = Arc::new(ReqwestAdapter::new(&config)?);
//! let client = ApiClient::new(&adapter);
//!
//! let artifacts = client.api().model_registry().v1alpha3().model_artifacts();
//! let page = artifacts.get(None).await?;
//!
//! let update = ModelArtifactUpdate {
//!     state: Some(ArtifactState::Live),
//!     ..Default::default()
//! };
//! let updated = artifacts.by_modelartifact_id("12")?.patch(&update, None).await?;
//! ```
//!
//! The adapter is held by weak reference. Keep `adapter` alive while the
//! client is in use; afterwards verb calls fail with
//! [`Error::AdapterUnavailable`].

pub mod api;

use http::HeaderValue;
use http::header::ACCEPT;
use std::sync::Arc;

use request_adapter::{
    APPLICATION_JSON, BaseRequestBuilder, ErrorMappings, PathParameters, RequestAdapter,
    RequestInformation, StatusPattern,
};

pub use api::ApiRequestBuilder;
pub use api::model_registry::ModelRegistryRequestBuilder;
pub use api::model_registry::v1alpha3::V1alpha3RequestBuilder;
pub use api::model_registry::v1alpha3::model_artifacts::ModelArtifactsRequestBuilder;
pub use api::model_registry::v1alpha3::model_artifacts::item::ModelArtifactItemRequestBuilder;

// Re-export the adapter contract for convenience
pub use request_adapter::{ApiError, Error, RequestConfiguration};

// Re-export types from the API crate for convenience
pub use model_registry_api::{
    ArtifactState, CustomProperties, ErrorResponse, ListModelArtifactsQuery, MetadataValue,
    ModelArtifact, ModelArtifactCreate, ModelArtifactList, ModelArtifactUpdate, OrderByField,
    SortOrder,
};

/// Used for `{+baseurl}` when the adapter reports no base URL
pub use request_adapter::config::DEFAULT_BASE_URL;

const URL_TEMPLATE: &str = "{+baseurl}";

/// Entry point of the request-builder tree
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: BaseRequestBuilder,
}

impl ApiClient {
    /// Create a client that sends through `adapter`.
    ///
    /// The adapter's base URL fills the `baseurl` path parameter.
    pub fn new(adapter: &Arc<dyn RequestAdapter>) -> Self {
        let base_url = match adapter.base_url().trim_end_matches('/') {
            "" => DEFAULT_BASE_URL,
            url => url,
        };
        let params = PathParameters::new().with("baseurl", base_url);
        Self {
            base: BaseRequestBuilder::new(Arc::downgrade(adapter), URL_TEMPLATE, params),
        }
    }

    /// The `/api` segment
    pub fn api(&self) -> ApiRequestBuilder {
        ApiRequestBuilder::from_parent(&self.base)
    }
}

/// Status codes answered with the registry's `{code, message}` error body
pub(crate) fn error_mappings() -> ErrorMappings {
    ErrorMappings::new()
        .with(StatusPattern::ClientError)
        .with(StatusPattern::ServerError)
}

/// Ask for JSON unless the caller already chose an `Accept` header
pub(crate) fn accept_json(request: &mut RequestInformation) {
    request.try_add_header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
}
