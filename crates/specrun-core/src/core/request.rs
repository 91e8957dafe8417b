// crates/specrun-core/src/core/request.rs
// ============================================================================
// Module: Request Templates and Specs
// Description: Fluent request authoring and placeholder resolution.
// Purpose: Keep unresolved templates out of the transport layer.
// Dependencies: crate::core::{context, error}, serde, serde_json
// ============================================================================

//! ## Overview
//! Requests are authored as fluent [`RequestTemplate`] values whose URL,
//! header values, and JSON body strings may carry `{name}` placeholders;
//! literal braces are escaped as `{{` and `}}`.
//! Resolution against the scenario context is the only way to obtain a
//! [`RequestSpec`], so a URL with unresolved placeholders can never reach the
//! transport: a missing key fails fast locally instead of producing a
//! corrupted URL and a confusing remote 404.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::context::ScenarioContext;
use crate::core::error::ConfigError;

// ============================================================================
// SECTION: Method
// ============================================================================

/// HTTP methods supported by the harness.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP DELETE.
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

// ============================================================================
// SECTION: Request Spec
// ============================================================================

/// Fully resolved description of one HTTP call.
///
/// # Invariants
/// - `url` contains no unresolved placeholders; specs are produced only by
///   [`RequestTemplate::resolve`].
/// - Header pairs preserve declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: String,
    /// Ordered header name/value pairs.
    pub headers: Vec<(String, String)>,
    /// Optional JSON request body.
    pub body: Option<Value>,
}

// ============================================================================
// SECTION: Request Template
// ============================================================================

/// Fluent builder for one HTTP call, resolved against the context at the
/// terminal call.
///
/// # Invariants
/// - Templates are immutable once resolved; resolution never mutates the
///   template, so one template may be resolved repeatedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTemplate {
    /// HTTP method.
    method: Method,
    /// URL template, possibly containing `{name}` placeholders.
    url: String,
    /// Ordered header pairs; values may contain placeholders.
    headers: Vec<(String, String)>,
    /// Optional JSON body; string leaves may contain placeholders.
    body: Option<Value>,
}

impl RequestTemplate {
    /// Starts a GET template for the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// Starts a POST template for the given URL.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Starts a PUT template for the given URL.
    #[must_use]
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    /// Starts a DELETE template for the given URL.
    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Starts a template with an explicit method.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header pair.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the template method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Resolves every placeholder against `ctx` and returns an immutable spec.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingContextValue`] when a placeholder names
    /// an unset key, and [`ConfigError::InvalidSpec`] for an empty URL or
    /// malformed placeholder syntax.
    pub fn resolve(&self, ctx: &ScenarioContext) -> Result<RequestSpec, ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::InvalidSpec {
                reason: "request url is empty".to_string(),
            });
        }
        let url = ctx.render(&self.url)?;
        let mut headers = Vec::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            headers.push((name.clone(), ctx.render(value)?));
        }
        let body = match &self.body {
            Some(body) => Some(resolve_body(body, ctx)?),
            None => None,
        };
        Ok(RequestSpec {
            method: self.method,
            url,
            headers,
            body,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves placeholders in every string leaf of a JSON body template.
fn resolve_body(body: &Value, ctx: &ScenarioContext) -> Result<Value, ConfigError> {
    match body {
        Value::String(text) => Ok(Value::String(ctx.render(text)?)),
        Value::Array(items) => {
            let mut resolved = Vec::with_capacity(items.len());
            for item in items {
                resolved.push(resolve_body(item, ctx)?);
            }
            Ok(Value::Array(resolved))
        }
        Value::Object(map) => {
            let mut resolved = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                resolved.insert(key.clone(), resolve_body(value, ctx)?);
            }
            Ok(Value::Object(resolved))
        }
        other => Ok(other.clone()),
    }
}
