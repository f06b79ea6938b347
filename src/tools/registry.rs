//! Explicit registration table: operation name to handler, with the metadata
//! the listing endpoints advertise.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::tool::{Tool, ToolError};
use crate::domain::Catalog;
use crate::tools::products::{GetProductTool, ListProductsTool};

#[derive(Clone)]
pub struct ToolRegistry {
    by_name: Arc<HashMap<&'static str, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    pub fn with_tools<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Tool>>,
    {
        let mut map: HashMap<&'static str, Arc<dyn Tool>> = HashMap::new();
        for t in iter.into_iter() {
            map.insert(t.name(), t);
        }
        Self { by_name: Arc::new(map) }
    }

    pub fn list(&self) -> Vec<ToolMeta> {
        let mut metas: Vec<ToolMeta> = self
            .by_name
            .values()
            .map(|t| ToolMeta {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema(),
            })
            .collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    pub async fn call(
        &self,
        name: &str,
        args: &serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let t = self
            .by_name
            .get(name)
            .ok_or_else(|| ToolError::Message(format!("unknown tool: {name}")))?;
        t.call(args).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

/// Register both catalog operations over the injected catalog.
pub fn build_registry(catalog: Arc<Catalog>) -> ToolRegistry {
    ToolRegistry::with_tools([
        Arc::new(ListProductsTool::new(catalog.clone())) as Arc<dyn Tool>,
        Arc::new(GetProductTool::new(catalog)) as Arc<dyn Tool>,
    ])
}
