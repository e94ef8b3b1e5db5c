// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! The request descriptor handed to a [`RequestAdapter`](crate::RequestAdapter)

use bytes::Bytes;
use http::header::{CONTENT_TYPE, Entry};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::APPLICATION_JSON;
use crate::configuration::RequestConfiguration;
use crate::error::Error;
use crate::url_template::{RequestTarget, UrlTemplate};

/// Everything an adapter needs to perform one request.
///
/// Built fresh for every verb call and passed to the adapter by value.
#[derive(Debug, Clone)]
pub struct RequestInformation {
    pub method: Method,
    pub url_template: UrlTemplate,
    pub target: RequestTarget,
    /// Query values, expanded through the template's `{?...}` expression
    pub query_parameters: IndexMap<String, String>,
    pub headers: HeaderMap,
    pub content: Option<Bytes>,
}

impl RequestInformation {
    pub fn new(method: Method, url_template: impl Into<String>, target: RequestTarget) -> Self {
        Self {
            method,
            url_template: UrlTemplate::new(url_template),
            target,
            query_parameters: IndexMap::new(),
            headers: HeaderMap::new(),
            content: None,
        }
    }

    /// Resolve the final request URL.
    ///
    /// A raw URL target is used verbatim; otherwise the template is expanded
    /// from the path and query parameters.
    pub fn url(&self) -> Result<Url, Error> {
        let raw = match &self.target {
            RequestTarget::RawUrl(url) => url.clone(),
            RequestTarget::Template(params) => {
                self.url_template.expand(params, &self.query_parameters)?
            }
        };
        Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Apply caller supplied headers and query parameters.
    pub fn configure<Q: Serialize>(
        &mut self,
        config: Option<&RequestConfiguration<Q>>,
    ) -> Result<(), Error> {
        let Some(config) = config else {
            return Ok(());
        };
        for (name, value) in &config.headers {
            self.headers.append(name.clone(), value.clone());
        }
        self.add_query_parameters(&config.query_parameters)
    }

    /// Merge a serializable query parameter struct into `query_parameters`.
    pub fn add_query_parameters<Q: Serialize>(&mut self, query: &Q) -> Result<(), Error> {
        match serde_json::to_value(query).map_err(Error::Serialization)? {
            Value::Null => Ok(()),
            Value::Object(fields) => {
                for (name, value) in fields {
                    if let Some(value) = query_value(value) {
                        self.query_parameters.insert(name, value);
                    }
                }
                Ok(())
            }
            other => Err(Error::InvalidArgument(format!(
                "query parameters must serialize to an object, got {}",
                other
            ))),
        }
    }

    /// Add a header unless one with the same name is already present.
    ///
    /// Returns whether the header was added.
    pub fn try_add_header(&mut self, name: HeaderName, value: HeaderValue) -> bool {
        match self.headers.entry(name) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Attach a body and its content type.
    pub fn set_content(&mut self, content_type: &str, content: Bytes) -> Result<(), Error> {
        let value = HeaderValue::from_str(content_type).map_err(|e| {
            Error::InvalidArgument(format!("invalid content type '{}': {}", content_type, e))
        })?;
        self.headers.insert(CONTENT_TYPE, value);
        self.content = Some(content);
        Ok(())
    }

    /// Serialize `body` as JSON and attach it.
    pub fn set_json_content<T: Serialize + ?Sized>(&mut self, body: &T) -> Result<(), Error> {
        let content = json_body(body)?;
        self.set_content(APPLICATION_JSON, content)
    }
}

/// Serialize a required request body.
///
/// A body that encodes to `null` or to an empty object carries nothing to
/// send and is rejected with `InvalidArgument`.
pub fn json_body<T: Serialize + ?Sized>(body: &T) -> Result<Bytes, Error> {
    let empty = match serde_json::to_value(body).map_err(Error::Serialization)? {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    };
    if empty {
        return Err(Error::InvalidArgument("body cannot be empty".to_string()));
    }
    serde_json::to_vec(body)
        .map(Bytes::from)
        .map_err(Error::Serialization)
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let items: Vec<String> = items.into_iter().filter_map(query_value).collect();
            Some(items.join(","))
        }
        other @ Value::Object(_) => Some(other.to_string()),
    }
}
