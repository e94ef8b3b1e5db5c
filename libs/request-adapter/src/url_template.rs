// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! URL templates and the parameters that fill them
//!
//! Templates follow the subset of RFC 6570 that generated clients emit:
//!
//! - `{name}` simple expansion, value percent-encoded
//! - `{+name}` reserved expansion, value inserted as-is (used for `baseurl`)
//! - `{?a,b}` form-style query, undefined names skipped
//! - `{&a,b}` query continuation
//!
//! Undefined variables expand to nothing. A trailing `*` explode modifier is
//! accepted and ignored since every value is a scalar.

use indexmap::IndexMap;

use crate::error::Error;

/// Ordered mapping from template variable name to its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParameters(IndexMap<String, String>);

impl PathParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Where a request builder sends its requests.
///
/// A builder is bound either to its URL template filled from path
/// parameters, or to an explicit raw URL that replaces the template
/// entirely. There is no mixed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTarget {
    Template(PathParameters),
    RawUrl(String),
}

impl RequestTarget {
    /// Bind to an explicit URL. Empty URLs are rejected.
    pub fn raw_url(url: impl Into<String>) -> Result<Self, Error> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(Error::InvalidArgument("raw_url cannot be empty".to_string()));
        }
        Ok(Self::RawUrl(url))
    }

    /// Template parameters, or `None` when bound to a raw URL
    pub fn path_parameters(&self) -> Option<&PathParameters> {
        match self {
            Self::Template(params) => Some(params),
            Self::RawUrl(_) => None,
        }
    }
}

impl From<PathParameters> for RequestTarget {
    fn from(params: PathParameters) -> Self {
        Self::Template(params)
    }
}

/// An immutable URL template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Expand the template.
    ///
    /// Variables are looked up in `params` first, then in `query`.
    pub fn expand(
        &self,
        params: &PathParameters,
        query: &IndexMap<String, String>,
    ) -> Result<String, Error> {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                Error::InvalidUrl(format!("unterminated expression in template '{}'", self.0))
            })?;
            expand_expression(&after[..end], params, query, &mut out);
            rest = &after[end + 1..];
        }
        out.push_str(rest);

        Ok(out)
    }
}

fn lookup<'a>(
    name: &str,
    params: &'a PathParameters,
    query: &'a IndexMap<String, String>,
) -> Option<&'a str> {
    params
        .get(name)
        .or_else(|| query.get(name).map(String::as_str))
}

fn expand_expression(
    expr: &str,
    params: &PathParameters,
    query: &IndexMap<String, String>,
    out: &mut String,
) {
    let (operator, vars) = match expr.chars().next() {
        Some(op @ ('+' | '?' | '&')) => (Some(op), &expr[1..]),
        _ => (None, expr),
    };
    let names = vars
        .split(',')
        .map(|v| v.trim().trim_end_matches('*'))
        .filter(|v| !v.is_empty());

    match operator {
        Some(op @ ('?' | '&')) => {
            let mut separator = op;
            for name in names {
                if let Some(value) = lookup(name, params, query) {
                    out.push(separator);
                    out.push_str(&urlencoding::encode(name));
                    out.push('=');
                    out.push_str(&urlencoding::encode(value));
                    separator = '&';
                }
            }
        }
        Some(_) => {
            let values: Vec<&str> = names.filter_map(|n| lookup(n, params, query)).collect();
            out.push_str(&values.join(","));
        }
        None => {
            let values: Vec<String> = names
                .filter_map(|n| lookup(n, params, query))
                .map(|v| urlencoding::encode(v).into_owned())
                .collect();
            out.push_str(&values.join(","));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn params() -> PathParameters {
        PathParameters::new()
            .with("baseurl", "http://registry.local:8080")
            .with("modelartifactId", "42")
    }

    #[test_case("{+baseurl}/api", "http://registry.local:8080/api" ; "reserved expansion is not encoded")]
    #[test_case("{+baseurl}/items/{modelartifactId}", "http://registry.local:8080/items/42" ; "simple expansion")]
    #[test_case("{+baseurl}/items/{missing}", "http://registry.local:8080/items/" ; "undefined variable is empty")]
    #[test_case("{+baseurl}/items{?pageSize,orderBy}", "http://registry.local:8080/items" ; "undefined query is dropped")]
    #[test_case("plain/path", "plain/path" ; "no expressions")]
    fn test_expand(template: &str, expected: &str) {
        let expanded = UrlTemplate::new(template)
            .expand(&params(), &IndexMap::new())
            .unwrap();
        assert_eq!(expanded, expected);
    }

    #[test]
    fn test_simple_expansion_encodes_reserved_characters() {
        let params = PathParameters::new().with("id", "a b/c?d");
        let expanded = UrlTemplate::new("/items/{id}")
            .expand(&params, &IndexMap::new())
            .unwrap();
        assert_eq!(expanded, "/items/a%20b%2Fc%3Fd");
    }

    #[test]
    fn test_query_expansion_keeps_template_order() {
        let mut query = IndexMap::new();
        query.insert("sortOrder".to_string(), "DESC".to_string());
        query.insert("pageSize".to_string(), "10".to_string());
        query.insert("nextPageToken".to_string(), "a&b".to_string());

        let expanded = UrlTemplate::new("/items{?nextPageToken*,pageSize*,sortOrder*}")
            .expand(&PathParameters::new(), &query)
            .unwrap();
        assert_eq!(expanded, "/items?nextPageToken=a%26b&pageSize=10&sortOrder=DESC");
    }

    #[test]
    fn test_query_continuation() {
        let mut query = IndexMap::new();
        query.insert("b".to_string(), "2".to_string());
        let expanded = UrlTemplate::new("/items?a=1{&b}")
            .expand(&PathParameters::new(), &query)
            .unwrap();
        assert_eq!(expanded, "/items?a=1&b=2");
    }

    #[test]
    fn test_unterminated_expression() {
        let err = UrlTemplate::new("{+baseurl/items")
            .expand(&params(), &IndexMap::new())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace")]
    fn test_raw_url_rejects_empty(raw: &str) {
        let err = RequestTarget::raw_url(raw).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_target_from_parameters() {
        let target = RequestTarget::from(params());
        assert_eq!(
            target.path_parameters().and_then(|p| p.get("modelartifactId")),
            Some("42")
        );
        let raw = RequestTarget::raw_url("http://elsewhere/x").unwrap();
        assert!(raw.path_parameters().is_none());
    }
}
