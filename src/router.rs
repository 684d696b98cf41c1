use axum::{Router, routing::get};
use std::sync::Arc;

use crate::db::TableStore;
use crate::handlers::tables::{all_tables_handler, index_handler, recent_rows_route};
use crate::tables::TABLES;

/// Shared state for every handler: the pool handle and the bearer secret.
/// The secret is injected here rather than read from the environment per
/// request, so tests can build states with whatever secret they need.
#[derive(Clone)]
pub struct GatewayState {
    pub store: TableStore,
    pub api_token: Arc<str>,
}

impl GatewayState {
    pub fn new(store: TableStore, api_token: Arc<str>) -> Self {
        Self { store, api_token }
    }
}

/// Build the route table: the unprotected status route, one protected route
/// per descriptor, and the protected combined view.
pub fn gateway_router(state: GatewayState) -> Router {
    let mut router = Router::new()
        .route("/", get(index_handler))
        .route("/api/all", get(all_tables_handler));
    for desc in &TABLES {
        router = router.route(&desc.route_path(), recent_rows_route(desc));
    }
    router.with_state(state)
}
