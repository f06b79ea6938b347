use std::sync::Arc;

use axum::{
    routing::{any_service, get, post},
    Router,
};

use crate::domain::Catalog;
use crate::infra::runtime::mcp_transport;
use crate::tools::catalog as catalog_tools;
use crate::tools::registry::ToolRegistry;

/// Default app: `/healthz` plus streamable MCP at `/mcp`.
pub fn build_app_default(catalog: Arc<Catalog>) -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let mcp_service =
        mcp_transport::make_streamable_http_service(catalog_tools::factory(catalog), session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

/// Default app plus the plain JSON-RPC shim at `/v1/rpc`.
pub fn build_app_with_rpc_shim(catalog: Arc<Catalog>, registry: ToolRegistry) -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let mcp_service =
        mcp_transport::make_streamable_http_service(catalog_tools::factory(catalog), session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
        .route("/v1/rpc", post(crate::api::rpc::http))
        .with_state(registry)
}
