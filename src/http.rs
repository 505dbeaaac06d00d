//! HTTP transport for the flavor store. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/flavors?name=&page=&limit=` - list, filter, paginate.
//! - `GET /api/flavors/:id` - fetch one record.
//! - `POST /api/flavors` - create. Body = JSON `{ "flavor": .. }` plus optional fields.
//! - `PUT /api/flavors/:id` - replace a record's fields.
//! - `DELETE /api/flavors/:id` - remove a record, `204` with no body.
//! - `GET /health` - `{ "ok": true, "count": n }`.
//!
//! Failures are returned as `{ "error": "<message>" }` with the status from
//! [`StoreError::status_code`].
//!
//! ## Example
//!
//! ```ignore
//! use flavor_api::{http, FlavorStore};
//!
//! let app = http::router(FlavorStore::new());
//! // Or serve directly
//! http::serve(FlavorStore::new(), "0.0.0.0:3000").await?;
//! ```

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::error::StoreError;
use crate::flavor::{FlavorInput, FlavorRecord};
use crate::query::ListQuery;
use crate::store::FlavorStore;

/// Build an axum `Router` serving the given store.
pub fn router(store: FlavorStore) -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
        .route("/api/flavors", get(list_handler).post(create_handler))
        .route(
            "/api/flavors/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .fallback(fallback_handler)
        .with_state(store)
}

/// Serve the store over HTTP at `addr` until Ctrl-C.
pub async fn serve(store: FlavorStore, addr: &str) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "flavor api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        warn!(status = status.as_u16(), error = %self, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

async fn welcome_handler() -> Json<&'static str> {
    Json("Welcome to the flavor API!")
}

async fn health_handler(State(store): State<FlavorStore>) -> Result<Json<Value>, StoreError> {
    let count = store.len()?;
    Ok(Json(json!({ "ok": true, "count": count })))
}

async fn list_handler(
    State(store): State<FlavorStore>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<FlavorRecord>>, StoreError> {
    let Query(query) = query.map_err(|e| StoreError::Validation(e.body_text()))?;
    Ok(Json(store.list(&query)?))
}

async fn get_handler(
    State(store): State<FlavorStore>,
    Path(id): Path<String>,
) -> Result<Json<FlavorRecord>, StoreError> {
    Ok(Json(store.get(parse_id(&id)?)?))
}

async fn create_handler(
    State(store): State<FlavorStore>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<FlavorRecord>), StoreError> {
    let input = decode_body(body)?;
    let record = store.create(input)?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_handler(
    State(store): State<FlavorStore>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<FlavorRecord>, StoreError> {
    let id = parse_id(&id)?;
    let input = decode_body(body)?;
    Ok(Json(store.update(id, input)?))
}

async fn delete_handler(
    State(store): State<FlavorStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, StoreError> {
    store.delete(parse_id(&id)?)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn fallback_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "route not found" })),
    )
        .into_response()
}

/// Ids are positive integers; anything else names no record.
fn parse_id(raw: &str) -> Result<u64, StoreError> {
    raw.parse::<u64>()
        .map_err(|_| StoreError::NotFound(format!("flavor {}", raw)))
}

fn decode_body(body: Result<Json<Value>, JsonRejection>) -> Result<FlavorInput, StoreError> {
    let Json(value) = body.map_err(|e| StoreError::Validation(e.body_text()))?;
    FlavorInput::from_json(value)
}
