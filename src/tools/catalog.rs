//! MCP tool router for the product catalog.
//!
//! Exposes `getProducts` and `getProduct` over whichever rmcp transport the
//! server mounts (streamable HTTP at `/mcp`, or stdio). The catalog is
//! injected at construction; handlers only read it.
//!
//! `getProduct` returns `{"found": bool, "product": Product|null}` so wire
//! callers get an explicit absence signal instead of a bare null.

use std::future::Future;
use std::sync::Arc;

use rmcp::{
    handler::server::tool::{Parameters, ToolRouter},
    model::JsonObject,
    ErrorData as McpError, ServerHandler,
};

use crate::domain::Catalog;

#[derive(Clone)]
pub struct CatalogSvc {
    catalog: Arc<Catalog>,
}

impl CatalogSvc {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl ServerHandler for CatalogSvc {}

#[rmcp::tool_router]
impl CatalogSvc {
    #[rmcp::tool(name = "getProducts", description = "Get all products")]
    async fn get_products(&self) -> Result<rmcp::Json<serde_json::Value>, McpError> {
        tracing::info!(count = self.catalog.len(), "listing all products");
        Ok(rmcp::Json(
            serde_json::json!({ "products": self.catalog.products() }),
        ))
    }

    #[rmcp::tool(name = "getProduct", description = "Get product by name")]
    async fn get_product(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<serde_json::Value>, McpError> {
        let name = params
            .0
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("missing required field: name", None))?;
        tracing::info!(name = %name, "looking up product by name");
        let payload = match self.catalog.find(name) {
            Some(product) => serde_json::json!({ "found": true, "product": product }),
            None => serde_json::json!({ "found": false, "product": null }),
        };
        Ok(rmcp::Json(payload))
    }
}

pub type CatalogRouter = ToolRouter<CatalogSvc>;

impl CatalogSvc {
    pub fn router() -> CatalogRouter {
        Self::tool_router()
    }
}

/// Factory required by the rmcp transports: returns a fresh
/// `(handler, ToolRouter)` pair over the shared catalog.
pub fn factory(
    catalog: Arc<Catalog>,
) -> impl Fn() -> (CatalogSvc, CatalogRouter) + Send + Sync + Clone + 'static {
    move || {
        let handler = CatalogSvc::new(catalog.clone());
        let tools = CatalogSvc::router();
        (handler, tools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as JsonValue;

    fn svc() -> CatalogSvc {
        CatalogSvc::new(Arc::new(Catalog::seeded()))
    }

    #[tokio::test]
    async fn get_products_returns_seeded_sequence_in_order() {
        let rmcp::Json(val) = svc().get_products().await.expect("tool should succeed");
        let products = val["products"].as_array().expect("products array");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0]["name"], "Mac Book Pro M4");
        assert_eq!(products[1]["name"], "Samsung S25 Ultra");
    }

    #[tokio::test]
    async fn get_product_is_case_insensitive() {
        let svc = svc();
        for name in ["mac book pro m4", "Mac Book Pro M4"] {
            let mut obj = JsonObject::new();
            obj.insert("name".into(), JsonValue::String(name.into()));
            let rmcp::Json(val) = svc.get_product(Parameters(obj)).await.unwrap();
            assert_eq!(val["found"], true);
            assert_eq!(val["product"]["url"], "https://support.apple.com/en-lk/121552");
        }
    }

    #[tokio::test]
    async fn get_product_miss_reports_not_found() {
        let mut obj = JsonObject::new();
        obj.insert("name".into(), JsonValue::String("Nonexistent Phone".into()));
        let rmcp::Json(val) = svc().get_product(Parameters(obj)).await.unwrap();
        assert_eq!(val["found"], false);
        assert!(val["product"].is_null());
    }

    #[tokio::test]
    async fn get_product_substring_does_not_match() {
        let mut obj = JsonObject::new();
        obj.insert("name".into(), JsonValue::String("Mac Book Pro".into()));
        let rmcp::Json(val) = svc().get_product(Parameters(obj)).await.unwrap();
        assert_eq!(val["found"], false);
    }

    #[tokio::test]
    async fn get_product_missing_name_is_invalid_params() {
        let res = svc().get_product(Parameters(JsonObject::new())).await;
        let err = match res {
            Err(e) => e,
            Ok(_) => panic!("expected invalid params error, got Ok"),
        };
        // JSON-RPC invalid params is -32602
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("missing required field: name"));
    }

    #[test]
    fn tool_router_exposes_both_operations() {
        let router: CatalogRouter = CatalogSvc::tool_router();
        let names: Vec<String> = router.into_iter().map(|r| r.name().to_string()).collect();
        assert!(names.iter().any(|n| n == "getProducts"), "got: {names:?}");
        assert!(names.iter().any(|n| n == "getProduct"), "got: {names:?}");
    }
}
