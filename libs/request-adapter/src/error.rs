// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Error types for request-adapter

use http::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;

/// Errors surfaced by request builders and request adapters.
///
/// Builders raise `InvalidArgument` and `AdapterUnavailable` themselves.
/// Every other variant originates in the adapter and reaches the caller
/// unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// A required identifier, body, or raw URL was empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The shared adapter was dropped before the call was made
    #[error("Request adapter is no longer available")]
    AdapterUnavailable,

    /// The request URL could not be built or parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, TLS, timeout, or protocol failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body did not match the expected type
    #[error("Failed to deserialize response: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Adapter configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A non-2xx response from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    /// Error code from a structured error body
    pub code: Option<String>,
    /// Error message from a structured error body
    pub message: Option<String>,
    /// Raw response body
    pub body: String,
}

impl ApiError {
    /// Build an error from a response status and body.
    ///
    /// When `structured` is set the body is decoded as a `{code, message}`
    /// payload. Dropshot servers spell the code `error_code`, so that key is
    /// accepted too. A body that is not JSON leaves both fields unset.
    pub fn from_response(status: StatusCode, body: &[u8], structured: bool) -> Self {
        let body = String::from_utf8_lossy(body).into_owned();
        let (code, message) = if structured {
            match serde_json::from_str::<serde_json::Value>(&body) {
                Ok(value) => {
                    let field = |name: &str| value.get(name).and_then(|v| v.as_str()).map(String::from);
                    (field("code").or_else(|| field("error_code")), field("message"))
                }
                Err(_) => (None, None),
            }
        } else {
            (None, None)
        };

        Self {
            status,
            code,
            message,
            body,
        }
    }

    /// Decode the raw body into a typed error payload, if it matches `T`
    pub fn decode_body<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_str(&self.body).ok()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = self.message.as_deref().unwrap_or(&self.body);
        write!(f, "HTTP {}: {}", self.status, detail)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_body_is_decoded() {
        let err = ApiError::from_response(
            StatusCode::NOT_FOUND,
            br#"{"code":"404","message":"no ModelArtifact found for id 9"}"#,
            true,
        );
        assert_eq!(err.code.as_deref(), Some("404"));
        assert_eq!(err.message.as_deref(), Some("no ModelArtifact found for id 9"));
        assert_eq!(err.to_string(), "HTTP 404 Not Found: no ModelArtifact found for id 9");
    }

    #[test]
    fn test_dropshot_error_code_is_accepted() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            br#"{"request_id":"abc","error_code":"InvalidValue","message":"bad"}"#,
            true,
        );
        assert_eq!(err.code.as_deref(), Some("InvalidValue"));
        assert_eq!(err.message.as_deref(), Some("bad"));
    }

    #[test]
    fn test_unmapped_body_is_kept_raw() {
        let err = ApiError::from_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"code":"500","message":"boom"}"#,
            false,
        );
        assert!(err.code.is_none());
        assert!(err.message.is_none());
        assert_eq!(err.body, r#"{"code":"500","message":"boom"}"#);
    }

    #[test]
    fn test_decode_body() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Payload {
            code: String,
        }

        let err = ApiError::from_response(StatusCode::CONFLICT, br#"{"code":"Conflict"}"#, false);
        assert_eq!(
            err.decode_body::<Payload>(),
            Some(Payload {
                code: "Conflict".to_string()
            })
        );

        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, b"upstream down", false);
        assert_eq!(err.decode_body::<Payload>(), None);
    }

    #[test]
    fn test_non_json_body() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, b"upstream down", true);
        assert!(err.message.is_none());
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: upstream down");
    }
}
