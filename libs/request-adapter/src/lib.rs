// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Request Adapter Library
//!
//! The plumbing shared by path-mirroring API clients. A client is a tree of
//! request builders; each builder turns a verb call into a
//! [`RequestInformation`] and hands it to a [`RequestAdapter`], which does
//! the actual I/O.
//!
//! This crate provides:
//!
//! - [`UrlTemplate`] expansion over [`PathParameters`] (RFC 6570 subset)
//! - [`RequestInformation`], the per-call request descriptor
//! - [`RequestConfiguration`], caller supplied headers and typed query
//!   parameters
//! - The [`RequestAdapter`] trait and [`ReqwestAdapter`], its reqwest-backed
//!   implementation
//! - [`BaseRequestBuilder`], the state every generated builder carries
//! - [`AdapterConfig`], adapter settings loaded from the environment or a
//!   JSON file
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use request_adapter::{AdapterConfig, RequestAdapter, ReqwestAdapter};
//!
//! let config = AdapterConfig::from_env()?;
//! let adapter: Arc<dyn RequestAdapter> = Arc::new(ReqwestAdapter::new(&config)?);
//! // Hand `adapter` to a client root such as `ApiClient::new(&adapter)`.
//! ```

pub mod adapter;
pub mod builder;
pub mod config;
pub mod configuration;
pub mod error;
pub mod information;
pub mod reqwest_adapter;
pub mod url_template;

pub use adapter::{ErrorMappings, RequestAdapter, RequestAdapterExt, StatusPattern};
pub use builder::BaseRequestBuilder;
pub use config::AdapterConfig;
pub use configuration::RequestConfiguration;
pub use error::{ApiError, Error};
pub use information::{RequestInformation, json_body};
pub use reqwest_adapter::ReqwestAdapter;
pub use url_template::{PathParameters, RequestTarget, UrlTemplate};

/// Media type used for request and response bodies.
pub const APPLICATION_JSON: &str = "application/json";
