// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Standalone stub model registry for testing and development
//!
//! Run with:
//! ```bash
//! cargo run -p model-registry-stub-server
//! ```
//!
//! Then point the client at it:
//! ```bash
//! MODEL_REGISTRY_URL=http://localhost:8080 ...
//! ```
//!
//! `MODEL_REGISTRY_STUB_ADDR` overrides the listen address and
//! `MODEL_REGISTRY_STUB_FIXTURES` names a JSON fixture file to seed from
//! (defaults to the bundled `fixtures/model_artifacts.json`).

use anyhow::{Context, Result};
use dropshot::{ConfigDropshot, ConfigLogging, ConfigLoggingLevel, HttpServerStarter};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use model_registry_stub_server::{StubContext, api_description};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("model_registry_stub_server=info,dropshot=info")
            }),
        )
        .init();

    let log_config = ConfigLogging::StderrTerminal {
        level: ConfigLoggingLevel::Info,
    };
    let log = log_config.to_logger("model-registry-stub-server")?;

    let bind_address = match std::env::var("MODEL_REGISTRY_STUB_ADDR") {
        Ok(addr) => addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid MODEL_REGISTRY_STUB_ADDR: {}", addr))?,
        Err(_) => SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
    };

    let fixtures = std::env::var("MODEL_REGISTRY_STUB_FIXTURES")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/model_artifacts.json")
        });
    let context = Arc::new(StubContext::from_fixture_file(&fixtures)?);

    tracing::info!("Loaded {} model artifacts", context.artifact_count());

    let config = ConfigDropshot {
        bind_address,
        default_request_body_max_bytes: 1024 * 1024,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    };

    let api = api_description().map_err(|e| anyhow::anyhow!(e))?;
    let server = HttpServerStarter::new(&config, api, context, &log)
        .map_err(|e| anyhow::anyhow!("Failed to create server: {}", e))?
        .start();

    tracing::info!("Stub model registry listening on http://{}", server.local_addr());
    tracing::info!("Available endpoints:");
    tracing::info!("  GET   /api/model_registry/v1alpha3/model_artifacts");
    tracing::info!("  POST  /api/model_registry/v1alpha3/model_artifacts");
    tracing::info!("  GET   /api/model_registry/v1alpha3/model_artifacts/{{id}}");
    tracing::info!("  PATCH /api/model_registry/v1alpha3/model_artifacts/{{id}}");

    server
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
