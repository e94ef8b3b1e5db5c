// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! State shared by every generated request builder

use http::Method;
use std::fmt;
use std::sync::{Arc, Weak};

use crate::adapter::RequestAdapter;
use crate::error::Error;
use crate::information::RequestInformation;
use crate::url_template::RequestTarget;

/// The adapter handle, URL template and target of one builder.
///
/// The adapter reference is non-owning: the caller keeps the adapter alive
/// for as long as it wants to issue requests. Once the last strong
/// reference is dropped, verb calls fail with [`Error::AdapterUnavailable`].
#[derive(Clone)]
pub struct BaseRequestBuilder {
    adapter: Weak<dyn RequestAdapter>,
    url_template: &'static str,
    target: RequestTarget,
}

impl BaseRequestBuilder {
    pub fn new(
        adapter: Weak<dyn RequestAdapter>,
        url_template: &'static str,
        target: impl Into<RequestTarget>,
    ) -> Self {
        Self {
            adapter,
            url_template,
            target: target.into(),
        }
    }

    /// Upgrade the adapter handle for a call
    pub fn adapter(&self) -> Result<Arc<dyn RequestAdapter>, Error> {
        self.adapter.upgrade().ok_or(Error::AdapterUnavailable)
    }

    /// The non-owning adapter handle, for constructing children
    pub fn adapter_handle(&self) -> Weak<dyn RequestAdapter> {
        self.adapter.clone()
    }

    pub fn target(&self) -> &RequestTarget {
        &self.target
    }

    /// A child builder sharing this builder's adapter and target.
    ///
    /// A raw URL target carries over unchanged: once a builder is bound to
    /// an explicit URL, navigation below it keeps that URL.
    pub fn child(&self, url_template: &'static str) -> Self {
        Self::new(self.adapter_handle(), url_template, self.target.clone())
    }

    /// A child builder with one more path parameter set.
    ///
    /// `value` must be non-empty and must not be a dot segment. URL parsing
    /// resolves `.` and `..` (encoded or not), which would move the request
    /// out of its path segment.
    pub fn child_with_parameter(
        &self,
        url_template: &'static str,
        name: &str,
        value: &str,
    ) -> Result<Self, Error> {
        if value.is_empty() {
            return Err(Error::InvalidArgument(format!("{} cannot be empty", name)));
        }
        if matches!(value.trim(), "." | "..") {
            return Err(Error::InvalidArgument(format!(
                "{} cannot be a dot segment: '{}'",
                name, value
            )));
        }
        let target = match &self.target {
            RequestTarget::Template(params) => {
                let mut params = params.clone();
                params.insert(name, value);
                RequestTarget::Template(params)
            }
            raw @ RequestTarget::RawUrl(_) => raw.clone(),
        };
        Ok(Self::new(self.adapter_handle(), url_template, target))
    }

    /// The same builder bound to `raw_url`.
    pub fn with_url(&self, raw_url: &str) -> Result<Self, Error> {
        Ok(Self::new(
            self.adapter_handle(),
            self.url_template,
            RequestTarget::raw_url(raw_url)?,
        ))
    }

    /// A fresh descriptor for `method` with no headers or body yet
    pub fn request_information(&self, method: Method) -> RequestInformation {
        RequestInformation::new(method, self.url_template, self.target.clone())
    }
}

impl fmt::Debug for BaseRequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseRequestBuilder")
            .field("url_template", &self.url_template)
            .field("target", &self.target)
            .field("adapter_available", &(self.adapter.strong_count() > 0))
            .finish()
    }
}
