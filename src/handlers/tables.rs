use axum::{
    Json,
    extract::State,
    routing::{MethodRouter, get},
};
use futures::future;
use serde_json::{Map, Value, json};
use tracing::warn;

use crate::db::serialize_rows;
use crate::error::GatewayError;
use crate::middleware::RequireBearerAuth;
use crate::router::GatewayState;
use crate::tables::{TABLES, TableDescriptor};

/// Unprotected status route listing the API surface.
pub async fn index_handler() -> Json<Value> {
    let endpoints: Vec<String> = TABLES
        .iter()
        .map(|desc| desc.route_path())
        .chain(std::iter::once("/api/all".to_string()))
        .collect();
    Json(json!({ "status": "ok", "endpoints": endpoints }))
}

/// Route constructor for one read view. Invoked once per descriptor; the
/// produced handlers are independent and share nothing but the pool handle.
pub fn recent_rows_route(desc: &'static TableDescriptor) -> MethodRouter<GatewayState> {
    get(
        move |_auth: RequireBearerAuth, State(state): State<GatewayState>| async move {
            list_recent(&state, desc).await
        },
    )
}

async fn list_recent(
    state: &GatewayState,
    desc: &TableDescriptor,
) -> Result<Json<Value>, GatewayError> {
    let rows = state
        .store
        .fetch_recent(desc)
        .await
        .inspect_err(|e| warn!(table = desc.name, error = %e, "read query failed"))?;
    Ok(Json(Value::Array(serialize_rows(&rows)?)))
}

/// Combined view over every descriptor, all-or-nothing.
pub async fn all_tables_handler(
    _auth: RequireBearerAuth,
    State(state): State<GatewayState>,
) -> Result<Json<Value>, GatewayError> {
    // fire every query before awaiting any of them
    let fetches = TABLES.iter().map(|desc| {
        let store = state.store.clone();
        async move { (desc.name, store.fetch_recent(desc).await) }
    });
    let outcomes = future::join_all(fetches).await;

    // every member has already resolved here; a failure discards the
    // partial map and surfaces that member's error alone
    let mut combined = Map::with_capacity(TABLES.len());
    for (name, outcome) in outcomes {
        let rows = outcome
            .inspect_err(|e| warn!(table = name, error = %e, "aggregate member failed"))?;
        combined.insert(name.to_string(), Value::Array(serialize_rows(&rows)?));
    }
    Ok(Json(Value::Object(combined)))
}
