// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Configuration for the reqwest-backed adapter

use secrecy::SecretString;
use serde::Deserialize;
use std::path::Path;

use crate::error::Error;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Adapter configuration loaded from environment variables or a JSON file
///
/// Configuration can be loaded from:
/// 1. Environment variables (see `from_env()`)
/// 2. A JSON config file (see `from_file()`)
///
/// The bearer token is never read from a file; it only comes from the
/// environment.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Registry base URL, e.g. `https://registry.example.com`
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Bearer token sent in the Authorization header
    #[serde(skip)]
    pub token: Option<SecretString>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("request-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
            token: None,
        }
    }
}

impl AdapterConfig {
    /// Load configuration from environment variables
    ///
    /// - `MODEL_REGISTRY_URL` (required)
    /// - `MODEL_REGISTRY_TIMEOUT_SECS` (default 30)
    /// - `MODEL_REGISTRY_USER_AGENT`
    /// - `MODEL_REGISTRY_TOKEN`
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("MODEL_REGISTRY_URL").ok_or_else(|| {
            Error::Config("MODEL_REGISTRY_URL environment variable required".to_string())
        })?;

        let timeout_secs = match lookup("MODEL_REGISTRY_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|e| {
                Error::Config(format!("Invalid MODEL_REGISTRY_TIMEOUT_SECS '{}': {}", raw, e))
            })?,
            None => defaults.timeout_secs,
        };

        let user_agent = lookup("MODEL_REGISTRY_USER_AGENT").unwrap_or(defaults.user_agent);

        let token = lookup("MODEL_REGISTRY_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .map(SecretString::from);

        let config = Self {
            base_url,
            timeout_secs,
            user_agent,
            token,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    ///
    /// Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is an absolute http(s) URL and the timeout
    /// is non-zero.
    pub fn validate(&self) -> Result<(), Error> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Unsupported base URL scheme '{}'",
                url.scheme()
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }
}
