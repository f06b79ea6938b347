use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use crate::domain::{Catalog, Product};

pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub rpc_shim: bool,
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let rpc_shim = std::env::var("DISABLE_RPC_SHIM")
            .map(|v| v.is_empty())
            .unwrap_or(true);
        let catalog_path = std::env::var("CATALOG_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self { mode, port, rpc_shim, catalog_path }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<ProductEntry>,
}

#[derive(Deserialize)]
struct ProductEntry {
    name: String,
    url: String,
}

/// Build the catalog the process will serve: the seeded two-entry catalog by
/// default, or the contents of `CATALOG_PATH` when configured. Fails loudly on
/// unreadable files, bad TOML, or empty product names rather than serving a
/// half-loaded catalog.
pub fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    let Some(path) = &config.catalog_path else {
        return Ok(Catalog::seeded());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog file {}", path.display()))?;
    let file: CatalogFile = toml::from_str(&raw)
        .with_context(|| format!("parsing catalog file {}", path.display()))?;
    let products = file
        .products
        .into_iter()
        .map(|e| Product::new(e.name, e.url))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("validating catalog file {}", path.display()))?;
    Ok(Catalog::new(products)?)
}
