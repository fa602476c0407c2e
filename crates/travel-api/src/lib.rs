//! Mock travel-price lookup.
//!
//! Answers `GET` requests whose target starts with `/api/travels/1` with one fixed record and
//! everything else with an empty 404. The match is a plain prefix match on the raw request
//! target, so `/api/travels/10` and `/api/travels/1?currency=eur` resolve to the same record.

use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde::Serialize;

pub const DEFAULT_PORT: u16 = 8080;

pub const TRAVEL_PATH_PREFIX: &str = "/api/travels/1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LookupRecord {
    pub id: u32,
    pub price: &'static str,
}

pub static TRAVEL: LookupRecord = LookupRecord {
    id: 1,
    price: "3200",
};

/// Resolve a raw request target (path plus optional query) to its record.
#[must_use]
pub fn lookup(target: &str) -> Option<&'static LookupRecord> {
    target.starts_with(TRAVEL_PATH_PREFIX).then_some(&TRAVEL)
}

/// Routing table: a single fallback handler sees every request.
pub fn router() -> Router {
    Router::new().fallback(handle)
}

async fn handle(method: Method, uri: Uri) -> Response {
    if method != Method::GET {
        tracing::debug!(%method, "unsupported method");
        return StatusCode::NOT_IMPLEMENTED.into_response();
    }

    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str());
    tracing::info!(path = target, "GET");

    match lookup(target) {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
