// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Request adapter backed by `reqwest`

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use http::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::adapter::{ErrorMappings, RequestAdapter};
use crate::config::AdapterConfig;
use crate::error::{ApiError, Error};
use crate::information::RequestInformation;

/// Sends requests with a shared `reqwest::Client`.
///
/// The client pools connections, so one adapter should be shared by every
/// builder that talks to the same registry.
#[derive(Debug, Clone)]
pub struct ReqwestAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestAdapter {
    /// Create an adapter from configuration
    pub fn new(config: &AdapterConfig) -> Result<Self, Error> {
        config.validate()?;

        // reqwest is built without a default rustls provider. Installing
        // fails harmlessly when another crate already picked one.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            headers.insert(AUTHORIZATION, bearer_header(token)?);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(&config.base_url, client))
    }

    /// Wrap an already configured client.
    ///
    /// The workspace builds reqwest without a default TLS crypto provider.
    /// Callers building their own client must install one first, e.g.
    /// `rustls::crypto::ring::default_provider().install_default()`, or
    /// `reqwest::Client` construction panics.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// `Authorization: Bearer` value, marked sensitive so it is never logged
fn bearer_header(token: &SecretString) -> Result<HeaderValue, Error> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|e| Error::Config(format!("Invalid bearer token: {}", e)))?;
    value.set_sensitive(true);
    Ok(value)
}

#[async_trait]
impl RequestAdapter for ReqwestAdapter {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_raw(
        &self,
        request: RequestInformation,
        error_mappings: Option<&ErrorMappings>,
    ) -> Result<Option<Bytes>, Error> {
        let url = request.url()?;
        let RequestInformation {
            method,
            headers,
            content,
            ..
        } = request;

        tracing::debug!(method = %method, url = %url, "sending request");

        let mut builder = self.client.request(method.clone(), url.clone()).headers(headers);
        if let Some(content) = content {
            builder = builder.body(content);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::debug!(method = %method, url = %url, error = %e, "request failed");
            Error::Transport(e)
        })?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(
            method = %method,
            url = %url,
            status = %status,
            bytes = body.len(),
            "received response"
        );

        if !status.is_success() {
            let structured = error_mappings.is_some_and(|m| m.matches(status));
            return Err(ApiError::from_response(status, &body, structured).into());
        }

        if status == StatusCode::NO_CONTENT || body.is_empty() {
            return Ok(None);
        }
        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequestAdapterExt;
    use crate::url_template::{PathParameters, RequestTarget};
    use http::Method;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn http_client() -> reqwest::Client {
        let _ = rustls::crypto::ring::default_provider().install_default();
        reqwest::Client::new()
    }

    /// Accept one connection, answer `200 {}` and return the raw request head
    async fn capture_one_request(listener: TcpListener) -> String {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(
                b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{}",
            )
            .await
            .unwrap();
        String::from_utf8_lossy(&head).to_lowercase()
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let adapter = ReqwestAdapter::with_client("http://mr:8080/", http_client());
        assert_eq!(adapter.base_url(), "http://mr:8080");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = AdapterConfig {
            base_url: "mr:8080".to_string(),
            ..Default::default()
        };
        assert!(matches!(ReqwestAdapter::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_bearer_header_is_sensitive() {
        let value = bearer_header(&SecretString::from("s3cret".to_string())).unwrap();
        assert_eq!(value, "Bearer s3cret");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_bearer_header_rejects_control_characters() {
        let err = bearer_header(&SecretString::from("bad\ntoken".to_string())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_token_and_user_agent_reach_the_wire() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let server = tokio::spawn(capture_one_request(listener));

        let config = AdapterConfig {
            base_url: base_url.clone(),
            user_agent: "trainer/2.0".to_string(),
            token: Some(SecretString::from("s3cret".to_string())),
            ..Default::default()
        };
        let adapter = ReqwestAdapter::new(&config).unwrap();
        let request = RequestInformation::new(
            Method::GET,
            "{+baseurl}/items",
            RequestTarget::Template(PathParameters::new().with("baseurl", base_url)),
        );
        let body = adapter
            .send::<serde_json::Value>(request, None)
            .await
            .unwrap();
        assert_eq!(body, Some(serde_json::json!({})));

        let head = server.await.unwrap();
        assert!(head.starts_with("get /items http/1.1"), "{}", head);
        assert!(head.contains("authorization: bearer s3cret"), "{}", head);
        assert!(head.contains("user-agent: trainer/2.0"), "{}", head);
    }

    #[tokio::test]
    async fn test_unresolvable_url_fails_before_io() {
        let adapter = ReqwestAdapter::with_client("http://mr:8080", http_client());
        let request = RequestInformation::new(
            Method::GET,
            "{+baseurl}/items",
            RequestTarget::Template(Default::default()),
        );
        let err = adapter
            .send::<serde_json::Value>(request, None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
