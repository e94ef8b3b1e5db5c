// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Model Registry API Trait Definition
//!
//! **IMPORTANT**: This trait defines a *subset* of the model registry REST API
//! (`/api/model_registry/v1alpha3`). It only covers the `ModelArtifact`
//! resource:
//!
//! - `GET /api/model_registry/v1alpha3/model_artifacts` - List artifacts
//! - `POST /api/model_registry/v1alpha3/model_artifacts` - Create an artifact
//! - `GET /api/model_registry/v1alpha3/model_artifacts/{modelartifactId}` - Get one artifact
//! - `PATCH /api/model_registry/v1alpha3/model_artifacts/{modelartifactId}` - Update an artifact
//!
//! The resource models here are shared by the request-builder client and the
//! stub server. Field names on the wire are camelCase, int64 values such as
//! timestamps are carried as strings, and optional fields are omitted rather
//! than sent as `null`.

use dropshot::{
    HttpError, HttpResponseCreated, HttpResponseOk, Path, Query, RequestContext, TypedBody,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumString};

/// Value of the `artifactType` discriminator on every model artifact.
pub const MODEL_ARTIFACT_TYPE: &str = "model-artifact";

// ============================================================================
// Enumerations
// ============================================================================

/// Lifecycle state of an artifact.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtifactState {
    #[default]
    Unknown,
    Pending,
    Live,
    MarkedForDeletion,
    Deleted,
    Abandoned,
    Reference,
}

/// Field used to order list results.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderByField {
    CreateTime,
    LastUpdateTime,
    #[default]
    Id,
}

/// Direction of list ordering.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

// ============================================================================
// Custom Properties
// ============================================================================

/// A typed custom property value, discriminated by `metadataType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "metadataType")]
pub enum MetadataValue {
    /// int64 value, string encoded
    MetadataIntValue { int_value: String },
    MetadataDoubleValue { double_value: f64 },
    MetadataStringValue { string_value: String },
    /// Base64 encoded JSON object
    MetadataStructValue { struct_value: String },
    MetadataProtoValue {
        /// Type URL of the serialized protocol buffer message
        #[serde(rename = "type")]
        type_url: String,
        /// Base64 encoded protocol buffer message
        proto_value: String,
    },
    MetadataBoolValue { bool_value: bool },
}

/// Custom properties keyed by property name.
pub type CustomProperties = BTreeMap<String, MetadataValue>;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Fields of a model artifact that can be changed after creation.
///
/// Every field is optional; only the fields that are set are sent, so a
/// PATCH with this body leaves unset fields untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelArtifactUpdate {
    /// An optional description about the resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The external id that comes from the client's system. Must be unique
    /// for a given resource type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// User provided custom properties which are not defined by its type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<CustomProperties>,

    /// The uniform resource identifier of the physical artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ArtifactState>,

    /// Name of the model format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format_name: Option<String>,

    /// Storage secret name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,

    /// Path for model in storage provided by `storageKey`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,

    /// Version of the model format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format_version: Option<String>,

    /// Name of the service account with storage secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
}

/// Body of a create request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelArtifactCreate {
    /// The client provided name of the artifact. Must be unique among
    /// artifacts of the same model version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<CustomProperties>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ArtifactState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
}

/// An ML model artifact as stored by the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelArtifact {
    /// Server assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<CustomProperties>,

    /// Output only. Create time of the resource in milliseconds since epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time_since_epoch: Option<String>,

    /// Output only. Last update time of the resource in milliseconds since epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_time_since_epoch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ArtifactState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,

    /// Always `model-artifact`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_type: Option<String>,
}

/// One page of model artifacts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelArtifactList {
    /// Token to use to retrieve the next page of results. Empty on the last page.
    pub next_page_token: String,

    /// Maximum number of resources to return in the result.
    pub page_size: i32,

    /// Number of items in result list.
    pub size: i32,

    /// Array of `ModelArtifact` entities.
    pub items: Vec<ModelArtifact>,
}

/// Error payload returned by the registry for 4XX and 5XX responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// Error code. Dropshot servers send this as `error_code`.
    #[serde(alias = "error_code")]
    pub code: String,

    /// Error message
    pub message: String,
}

/// Query parameters for the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListModelArtifactsQuery {
    /// Number of entities in each page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Field used to order the results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderByField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Token returned by a previous list call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Path parameter for single-artifact endpoints
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ModelArtifactPath {
    /// A unique identifier for a `ModelArtifact`.
    pub modelartifact_id: String,
}

// ============================================================================
// API Trait
// ============================================================================

/// Model Registry REST API v1alpha3 (ModelArtifact subset)
///
/// The production implementation is the model registry server itself. This
/// trait documents the surface the client depends on and backs the stub
/// server used in tests.
#[dropshot::api_description]
pub trait ModelRegistryApi {
    /// Context type for request handlers
    type Context: Send + Sync + 'static;

    /// List all model artifacts
    ///
    /// Gets a list of all `ModelArtifact` entities, one page at a time.
    #[endpoint {
        method = GET,
        path = "/api/model_registry/v1alpha3/model_artifacts",
        tags = ["model-artifacts"],
    }]
    async fn get_model_artifacts(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListModelArtifactsQuery>,
    ) -> Result<HttpResponseOk<ModelArtifactList>, HttpError>;

    /// Create a model artifact
    ///
    /// Creates a new `ModelArtifact` entity.
    #[endpoint {
        method = POST,
        path = "/api/model_registry/v1alpha3/model_artifacts",
        tags = ["model-artifacts"],
    }]
    async fn create_model_artifact(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<ModelArtifactCreate>,
    ) -> Result<HttpResponseCreated<ModelArtifact>, HttpError>;

    /// Get a model artifact
    ///
    /// Gets the details of a single `ModelArtifact`.
    #[endpoint {
        method = GET,
        path = "/api/model_registry/v1alpha3/model_artifacts/{modelartifact_id}",
        tags = ["model-artifacts"],
    }]
    async fn get_model_artifact(
        rqctx: RequestContext<Self::Context>,
        path: Path<ModelArtifactPath>,
    ) -> Result<HttpResponseOk<ModelArtifact>, HttpError>;

    /// Update a model artifact
    ///
    /// Updates an existing `ModelArtifact`. Fields absent from the body are
    /// left unchanged.
    #[endpoint {
        method = PATCH,
        path = "/api/model_registry/v1alpha3/model_artifacts/{modelartifact_id}",
        tags = ["model-artifacts"],
    }]
    async fn update_model_artifact(
        rqctx: RequestContext<Self::Context>,
        path: Path<ModelArtifactPath>,
        body: TypedBody<ModelArtifactUpdate>,
    ) -> Result<HttpResponseOk<ModelArtifact>, HttpError>;
}
