//! Registry-backed tool implementations for the JSON-RPC shim. Each carries a
//! manually authored input schema so the registration table never depends on
//! framework reflection.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::core::tool::{Tool, ToolError};
use crate::domain::Catalog;

#[derive(Clone)]
pub struct ListProductsTool {
    catalog: Arc<Catalog>,
}

impl ListProductsTool {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for ListProductsTool {
    fn name(&self) -> &'static str {
        "getProducts"
    }
    fn description(&self) -> &'static str {
        "Get all products"
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({"type":"object","properties":{},"required":[]})
    }
    async fn call(&self, _arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError> {
        tracing::info!(count = self.catalog.len(), "listing all products");
        Ok(json!({ "products": self.catalog.products() }))
    }
}

#[derive(Clone)]
pub struct GetProductTool {
    catalog: Arc<Catalog>,
}

impl GetProductTool {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for GetProductTool {
    fn name(&self) -> &'static str {
        "getProduct"
    }
    fn description(&self) -> &'static str {
        "Get product by name"
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({"type":"object","properties":{"name":{"type":"string"}},"required":["name"]})
    }
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let name = arguments
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::InvalidArguments("missing 'name'".into()))?;
        tracing::info!(name = %name, "looking up product by name");
        Ok(match self.catalog.find(name) {
            Some(product) => json!({ "found": true, "product": product }),
            None => json!({ "found": false, "product": null }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::seeded())
    }

    #[tokio::test]
    async fn list_tool_returns_both_products() {
        let tool = ListProductsTool::new(catalog());
        let out = tool.call(&json!({})).await.unwrap();
        let products = out["products"].as_array().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0]["name"], "Mac Book Pro M4");
    }

    #[tokio::test]
    async fn get_tool_finds_by_any_casing() {
        let tool = GetProductTool::new(catalog());
        let out = tool.call(&json!({"name": "samsung s25 ultra"})).await.unwrap();
        assert_eq!(out["found"], true);
        assert_eq!(
            out["product"]["url"],
            "https://www.gsmarena.com/samsung_galaxy_s25_ultra-13322.php"
        );
    }

    #[tokio::test]
    async fn get_tool_reports_absent_on_miss() {
        let tool = GetProductTool::new(catalog());
        let out = tool.call(&json!({"name": "Nonexistent Phone"})).await.unwrap();
        assert_eq!(out["found"], false);
        assert!(out["product"].is_null());
    }

    #[tokio::test]
    async fn get_tool_requires_name_argument() {
        let tool = GetProductTool::new(catalog());
        let err = tool.call(&json!({})).await.unwrap_err();
        assert!(err.to_string().contains("missing 'name'"));
    }
}
