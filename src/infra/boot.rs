use std::net::SocketAddr;
use std::sync::Arc;

use crate::infra::config::{load_catalog, Config};
use crate::tools::catalog as catalog_tools;
use crate::tools::registry::build_registry;

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env();
    let catalog = Arc::new(load_catalog(&cfg)?);
    tracing::info!(
        mode = %cfg.mode,
        port = cfg.port,
        rpc_shim = cfg.rpc_shim,
        products = catalog.len(),
        "BOOT product-mcp"
    );

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.mode == "stdio" {
        crate::infra::runtime::mcp_transport::serve_stdio(catalog_tools::factory(catalog))
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = if cfg.rpc_shim {
        let registry = build_registry(catalog.clone());
        crate::infra::http_app::build_app_with_rpc_shim(catalog, registry)
    } else {
        crate::infra::http_app::build_app_default(catalog)
    };

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
