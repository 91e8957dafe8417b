// crates/specrun-transport/src/lib.rs
// ============================================================================
// Module: Specrun HTTP Transport
// Description: Blocking reqwest transport for the contract harness.
// Purpose: Send resolved request specs with a per-request timeout.
// Dependencies: reqwest, specrun-core, url
// ============================================================================

//! ## Overview
//! The reqwest transport sends one resolved [`RequestSpec`] at a time over a
//! blocking client. The harness is strictly sequential, so a blocking client
//! matches the execution model exactly; there are never overlapping in-flight
//! requests. Timeouts surface as [`TransportFailure::Timeout`] and are never
//! retried, so contract tests observe real latency and availability.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::blocking::RequestBuilder;
use specrun_core::HttpResponse;
use specrun_core::Method;
use specrun_core::RequestSpec;
use specrun_core::Transport;
use specrun_core::TransportFailure;
use url::Url;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the reqwest transport.
///
/// # Invariants
/// - `default_timeout` applies when the caller passes a zero timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// User agent string for outbound requests.
    pub user_agent: String,
    /// Timeout applied when a step does not override it.
    pub default_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            user_agent: "specrun/0.1".to_string(),
            default_timeout: Duration::from_secs(30),
        }
    }
}

// ============================================================================
// SECTION: Reqwest Transport
// ============================================================================

/// Blocking HTTP transport backed by reqwest.
pub struct ReqwestTransport {
    /// Transport configuration.
    config: TransportConfig,
    /// Shared blocking client.
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportFailure::Connection`] when the client cannot be
    /// constructed.
    pub fn new(config: TransportConfig) -> Result<Self, TransportFailure> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| TransportFailure::Connection {
                reason: format!("client construction failed: {err}"),
            })?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Creates a transport with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportFailure::Connection`] when the client cannot be
    /// constructed.
    pub fn with_defaults() -> Result<Self, TransportFailure> {
        Self::new(TransportConfig::default())
    }

    /// Builds the request for a resolved spec.
    fn build_request(&self, spec: &RequestSpec, url: Url, timeout: Duration) -> RequestBuilder {
        let mut builder = match spec.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        builder = builder.timeout(timeout);
        for (name, value) in &spec.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &spec.body {
            builder = builder.json(body);
        }
        builder
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        spec: &RequestSpec,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportFailure> {
        let timeout = if timeout.is_zero() {
            self.config.default_timeout
        } else {
            timeout
        };
        let url = Url::parse(&spec.url).map_err(|err| TransportFailure::Connection {
            reason: format!("invalid url `{}`: {err}", spec.url),
        })?;
        let response = self
            .build_request(spec, url, timeout)
            .send()
            .map_err(|err| map_reqwest_error(&err, timeout))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|err| map_reqwest_error(&err, timeout))?;
        Ok(HttpResponse {
            status,
            body,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Maps a reqwest error into the transport failure taxonomy.
fn map_reqwest_error(err: &reqwest::Error, timeout: Duration) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::Timeout {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    } else {
        TransportFailure::Connection {
            reason: err.to_string(),
        }
    }
}
