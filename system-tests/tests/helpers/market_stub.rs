// system-tests/tests/helpers/market_stub.rs
// ============================================================================
// Module: Market Stub Server
// Description: In-process market/product API for contract suites.
// Purpose: Serve a deterministic API surface with the contract's messages.
// Dependencies: serde_json, tiny_http
// ============================================================================

//! ## Overview
//! The market stub implements the API surface the contract suite exercises:
//! market CRUD with a 14-digit tax id constraint, produce products with a
//! non-negative integer value constraint, and the exact error messages the
//! contract asserts on. State is in-memory and per-instance.

#![allow(dead_code, reason = "Helpers are shared across multiple test binaries.")]
#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only server setup is permitted to fail loudly."
)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use serde_json::Value;
use serde_json::json;

/// Error message for a malformed tax id.
pub const TAX_ID_MESSAGE: &str = "tax id must be a numeric string of exactly 14 digits";
/// Error message for a malformed product value.
pub const VALUE_MESSAGE: &str = "value must be a non-negative integer";
/// Error message for an unknown resource.
pub const NOT_FOUND_MESSAGE: &str = "resource not found";

/// One stored market with its products.
#[derive(Debug, Clone)]
struct Market {
    name: String,
    tax_id: String,
    address: String,
    products: Vec<Value>,
}

/// Shared stub state.
#[derive(Debug, Default)]
struct StubState {
    markets: BTreeMap<u64, Market>,
    next_id: u64,
}

/// Handle for the in-process market stub server.
pub struct MarketStubHandle {
    base_url: String,
    stop: Arc<AtomicBool>,
    join: Option<thread::JoinHandle<()>>,
}

impl MarketStubHandle {
    /// Returns the stub base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for MarketStubHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Starts the stub on a free loopback port.
pub fn start() -> MarketStubHandle {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind loopback");
    let port = server.server_addr().to_ip().expect("ip addr").port();
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);
    let join = thread::spawn(move || {
        let state = Mutex::new(StubState::default());
        while !stop_flag.load(Ordering::SeqCst) {
            match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(request)) => handle(&state, request),
                Ok(None) => {}
                Err(_) => break,
            }
        }
    });
    MarketStubHandle {
        base_url: format!("http://127.0.0.1:{port}"),
        stop,
        join: Some(join),
    }
}

// ============================================================================
// SECTION: Request Handling
// ============================================================================

/// Routes one request against the stub state.
fn handle(state: &Mutex<StubState>, mut request: tiny_http::Request) {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    let method = request.method().clone();
    let path = request.url().to_string();
    let segments: Vec<&str> =
        path.trim_start_matches('/').split('/').filter(|s| !s.is_empty()).collect();

    let (status, payload) = {
        let mut state = state.lock().expect("stub state lock poisoned");
        route(&mut state, &method, &segments, &body)
    };

    let response = tiny_http::Response::from_string(payload.to_string())
        .with_status_code(status)
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                .expect("static header"),
        );
    let _ = request.respond(response);
}

/// Dispatches one request to a route handler.
fn route(
    state: &mut StubState,
    method: &tiny_http::Method,
    segments: &[&str],
    body: &str,
) -> (u16, Value) {
    use tiny_http::Method::{Delete, Get, Post, Put};
    match (method, segments) {
        (Get, ["market"]) => list_markets(state),
        (Post, ["market"]) => create_market(state, body),
        (Get, ["market", id]) => get_market(state, id),
        (Put, ["market", id]) => update_market(state, id, body),
        (Delete, ["market", id]) => delete_market(state, id),
        (Get, ["market", id, "products"]) => list_products(state, id),
        (Post, ["market", id, "products", "produce", kind])
            if *kind == "fruits" || *kind == "vegetables" =>
        {
            add_product(state, id, kind, body)
        }
        _ => not_found(),
    }
}

// ============================================================================
// SECTION: Route Handlers
// ============================================================================

fn list_markets(state: &StubState) -> (u16, Value) {
    let markets: Vec<Value> = state
        .markets
        .iter()
        .map(|(id, market)| json!({"id": id, "name": market.name}))
        .collect();
    (200, json!({"markets": markets}))
}

fn create_market(state: &mut StubState, body: &str) -> (u16, Value) {
    let Some(fields) = parse_market_fields(body) else {
        return (400, json!({"error": TAX_ID_MESSAGE}));
    };
    state.next_id += 1;
    let id = state.next_id;
    state.markets.insert(id, Market {
        name: fields.0.clone(),
        tax_id: fields.1,
        address: fields.2,
        products: Vec::new(),
    });
    (201, json!({"created": {"id": id, "name": fields.0}}))
}

fn get_market(state: &StubState, id: &str) -> (u16, Value) {
    match lookup(state, id) {
        Some((id, market)) => (
            200,
            json!({
                "id": id,
                "name": market.name,
                "tax_id": market.tax_id,
                "address": market.address,
            }),
        ),
        None => not_found(),
    }
}

fn update_market(state: &mut StubState, id: &str, body: &str) -> (u16, Value) {
    let Some(key) = parse_id(id).filter(|key| state.markets.contains_key(key)) else {
        return not_found();
    };
    let Some(fields) = parse_market_fields(body) else {
        return (400, json!({"error": TAX_ID_MESSAGE}));
    };
    if let Some(market) = state.markets.get_mut(&key) {
        market.name = fields.0;
        market.tax_id = fields.1;
        market.address = fields.2;
    }
    (200, json!({"updated": {"id": key}}))
}

fn delete_market(state: &mut StubState, id: &str) -> (u16, Value) {
    match parse_id(id).and_then(|key| state.markets.remove(&key).map(|_| key)) {
        Some(key) => (200, json!({"message": format!("market {key} was removed")})),
        None => not_found(),
    }
}

fn list_products(state: &StubState, id: &str) -> (u16, Value) {
    match lookup(state, id) {
        Some((_, market)) => (200, json!({"products": market.products})),
        None => not_found(),
    }
}

fn add_product(state: &mut StubState, id: &str, kind: &str, body: &str) -> (u16, Value) {
    let Some(key) = parse_id(id).filter(|key| state.markets.contains_key(key)) else {
        return not_found();
    };
    let parsed: Value = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) => return (400, json!({"error": VALUE_MESSAGE})),
    };
    let name = parsed.get("name").and_then(Value::as_str).unwrap_or_default().to_string();
    // Floats and negatives are both rejected; the contract requires a
    // non-negative integer.
    let value = parsed.get("value").and_then(Value::as_i64);
    let Some(value) = value.filter(|value| *value >= 0) else {
        return (400, json!({"error": VALUE_MESSAGE}));
    };
    let product = json!({"name": name, "value": value, "kind": kind});
    if let Some(market) = state.markets.get_mut(&key) {
        market.products.push(product.clone());
    }
    (201, json!({"added": product}))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn not_found() -> (u16, Value) {
    (404, json!({"error": NOT_FOUND_MESSAGE}))
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

fn lookup<'a>(state: &'a StubState, id: &str) -> Option<(u64, &'a Market)> {
    let key = parse_id(id)?;
    state.markets.get(&key).map(|market| (key, market))
}

/// Parses and validates market fields; `None` means a tax id violation.
fn parse_market_fields(body: &str) -> Option<(String, String, String)> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    let name = parsed.get("name").and_then(Value::as_str)?.to_string();
    let tax_id = parsed.get("tax_id").and_then(Value::as_str)?.to_string();
    let address = parsed.get("address").and_then(Value::as_str)?.to_string();
    if tax_id.len() != 14 || !tax_id.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some((name, tax_id, address))
}
