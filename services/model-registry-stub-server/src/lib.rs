// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Stub model registry server for testing
//!
//! This crate provides a Dropshot-based HTTP server that implements the
//! `ModelRegistryApi` trait against an in-memory store. It can be used for:
//!
//! - End-to-end testing of model-registry-client without a real registry
//! - Local development against a predictable server
//!
//! Artifacts can be seeded from a JSON fixture file (an array of
//! `ModelArtifact` objects); everything created or updated afterwards lives
//! only as long as the process.

use anyhow::{Context, Result};
use dropshot::{
    HttpError, HttpResponseCreated, HttpResponseOk, Path, Query, RequestContext, TypedBody,
};
use indexmap::IndexMap;
use model_registry_api::{
    ListModelArtifactsQuery, MODEL_ARTIFACT_TYPE, ModelArtifact, ModelArtifactCreate,
    ModelArtifactList, ModelArtifactPath, ModelArtifactUpdate, OrderByField, SortOrder,
};
use std::sync::{Arc, Mutex, MutexGuard};

/// Page size used when the request does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 100;

// ============================================================================
// Server Context
// ============================================================================

#[derive(Debug, Default)]
struct Store {
    /// Artifacts indexed by id, in creation order
    artifacts: IndexMap<String, ModelArtifact>,
    next_id: u64,
}

impl Store {
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    fn insert(&mut self, mut artifact: ModelArtifact) -> ModelArtifact {
        let id = match artifact.id.clone() {
            Some(id) => {
                if let Ok(n) = id.parse::<u64>() {
                    self.next_id = self.next_id.max(n);
                }
                id
            }
            None => self.allocate_id(),
        };
        artifact.id = Some(id.clone());
        artifact.artifact_type = Some(MODEL_ARTIFACT_TYPE.to_string());
        self.artifacts.insert(id, artifact.clone());
        artifact
    }
}

/// Context for the stub server holding the artifact store
#[derive(Debug, Default)]
pub struct StubContext {
    store: Mutex<Store>,
}

impl StubContext {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with `artifacts`.
    ///
    /// Artifacts without an id are given the next sequential one.
    pub fn with_artifacts(artifacts: impl IntoIterator<Item = ModelArtifact>) -> Self {
        let mut store = Store::default();
        for artifact in artifacts {
            store.insert(artifact);
        }
        Self {
            store: Mutex::new(store),
        }
    }

    /// Create a registry seeded from a JSON array of artifacts
    pub fn from_fixture_file(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let artifacts: Vec<ModelArtifact> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!(
            count = artifacts.len(),
            path = %path.display(),
            "loaded model artifact fixtures"
        );
        Ok(Self::with_artifacts(artifacts))
    }

    /// Number of stored artifacts
    pub fn artifact_count(&self) -> usize {
        self.store.lock().map(|s| s.artifacts.len()).unwrap_or(0)
    }

    fn store(&self) -> Result<MutexGuard<'_, Store>, HttpError> {
        self.store
            .lock()
            .map_err(|_| HttpError::for_internal_error("artifact store poisoned".to_string()))
    }
}

// ============================================================================
// API Implementation
// ============================================================================

/// Marker type for the stub model registry API implementation
pub enum StubModelRegistryApi {}

impl model_registry_api::ModelRegistryApi for StubModelRegistryApi {
    type Context = Arc<StubContext>;

    async fn get_model_artifacts(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListModelArtifactsQuery>,
    ) -> Result<HttpResponseOk<ModelArtifactList>, HttpError> {
        let query = query.into_inner();
        let store = rqctx.context().store()?;
        let page = list_page(&store.artifacts, &query)
            .map_err(|msg| HttpError::for_bad_request(Some("BadRequest".to_string()), msg))?;
        Ok(HttpResponseOk(page))
    }

    async fn create_model_artifact(
        rqctx: RequestContext<Self::Context>,
        body: TypedBody<ModelArtifactCreate>,
    ) -> Result<HttpResponseCreated<ModelArtifact>, HttpError> {
        let body = body.into_inner();
        let now = now_millis();

        let artifact = ModelArtifact {
            id: None,
            name: body.name,
            description: body.description,
            external_id: body.external_id,
            custom_properties: body.custom_properties,
            create_time_since_epoch: Some(now.clone()),
            last_update_time_since_epoch: Some(now),
            uri: body.uri,
            state: Some(body.state.unwrap_or_default()),
            model_format_name: body.model_format_name,
            storage_key: body.storage_key,
            storage_path: body.storage_path,
            model_format_version: body.model_format_version,
            service_account_name: body.service_account_name,
            artifact_type: None,
        };

        let created = rqctx.context().store()?.insert(artifact);
        tracing::info!(id = ?created.id, name = ?created.name, "created model artifact");
        Ok(HttpResponseCreated(created))
    }

    async fn get_model_artifact(
        rqctx: RequestContext<Self::Context>,
        path: Path<ModelArtifactPath>,
    ) -> Result<HttpResponseOk<ModelArtifact>, HttpError> {
        let path = path.into_inner();
        let store = rqctx.context().store()?;
        let artifact = store
            .artifacts
            .get(&path.modelartifact_id)
            .cloned()
            .ok_or_else(|| not_found(&path.modelartifact_id))?;
        Ok(HttpResponseOk(artifact))
    }

    async fn update_model_artifact(
        rqctx: RequestContext<Self::Context>,
        path: Path<ModelArtifactPath>,
        body: TypedBody<ModelArtifactUpdate>,
    ) -> Result<HttpResponseOk<ModelArtifact>, HttpError> {
        let path = path.into_inner();
        let update = body.into_inner();
        let mut store = rqctx.context().store()?;
        let artifact = store
            .artifacts
            .get_mut(&path.modelartifact_id)
            .ok_or_else(|| not_found(&path.modelartifact_id))?;

        apply_update(artifact, update, now_millis());
        Ok(HttpResponseOk(artifact.clone()))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn not_found(id: &str) -> HttpError {
    HttpError::for_not_found(
        Some("NotFound".to_string()),
        format!("ModelArtifact not found: {}", id),
    )
}

fn now_millis() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// Merge the set fields of `update` into `artifact`
fn apply_update(artifact: &mut ModelArtifact, update: ModelArtifactUpdate, now: String) {
    let ModelArtifactUpdate {
        description,
        external_id,
        custom_properties,
        uri,
        state,
        model_format_name,
        storage_key,
        storage_path,
        model_format_version,
        service_account_name,
    } = update;

    fn merge<T>(field: &mut Option<T>, value: Option<T>) {
        if value.is_some() {
            *field = value;
        }
    }

    merge(&mut artifact.description, description);
    merge(&mut artifact.external_id, external_id);
    merge(&mut artifact.custom_properties, custom_properties);
    merge(&mut artifact.uri, uri);
    merge(&mut artifact.state, state);
    merge(&mut artifact.model_format_name, model_format_name);
    merge(&mut artifact.storage_key, storage_key);
    merge(&mut artifact.storage_path, storage_path);
    merge(&mut artifact.model_format_version, model_format_version);
    merge(&mut artifact.service_account_name, service_account_name);
    artifact.last_update_time_since_epoch = Some(now);
}

/// Numeric value of the ordering field, with the raw string as tiebreaker
fn sort_key(artifact: &ModelArtifact, field: OrderByField) -> (i64, &str) {
    let raw = match field {
        OrderByField::Id => artifact.id.as_deref(),
        OrderByField::CreateTime => artifact.create_time_since_epoch.as_deref(),
        OrderByField::LastUpdateTime => artifact.last_update_time_since_epoch.as_deref(),
    }
    .unwrap_or_default();
    (raw.parse().unwrap_or(i64::MAX), raw)
}

/// Build one page of the listing.
///
/// `nextPageToken` is the offset of the first item on the page.
fn list_page(
    artifacts: &IndexMap<String, ModelArtifact>,
    query: &ListModelArtifactsQuery,
) -> Result<ModelArtifactList, String> {
    let order_by = query.order_by.unwrap_or_default();
    let page_size = match query.page_size {
        Some(0) | None => DEFAULT_PAGE_SIZE,
        Some(n) => n,
    } as usize;
    let offset = match query.next_page_token.as_deref() {
        None | Some("") => 0,
        Some(token) => token
            .parse::<usize>()
            .map_err(|_| format!("invalid nextPageToken: {}", token))?,
    };

    let mut sorted: Vec<&ModelArtifact> = artifacts.values().collect();
    sorted.sort_by(|a, b| sort_key(a, order_by).cmp(&sort_key(b, order_by)));
    if query.sort_order == Some(SortOrder::Desc) {
        sorted.reverse();
    }

    let items: Vec<ModelArtifact> = sorted
        .into_iter()
        .skip(offset)
        .take(page_size)
        .cloned()
        .collect();

    let end = offset.saturating_add(items.len());
    let next_page_token = if end < artifacts.len() {
        end.to_string()
    } else {
        String::new()
    };

    Ok(ModelArtifactList {
        next_page_token,
        page_size: i32::try_from(page_size).unwrap_or(i32::MAX),
        size: i32::try_from(items.len()).unwrap_or(i32::MAX),
        items,
    })
}

/// Create the Dropshot API description for the stub server
pub fn api_description() -> Result<dropshot::ApiDescription<Arc<StubContext>>, String> {
    model_registry_api::model_registry_api_mod::api_description::<StubModelRegistryApi>()
        .map_err(|e| e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
