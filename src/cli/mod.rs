use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::infra::http::headers::add_standard_headers;
use crate::infra::runtime::limits::{make_http_client, retry_async};

#[derive(Parser)]
#[command(name = "product-mcp")]
#[command(about = "Product catalog MCP server - Admin CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Health check the service
    Health {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Show the effective configuration; with --validate, also check the
    /// mode and load the catalog file
    Config {
        #[arg(long)]
        validate: bool,
    },
    /// Show service status
    Status {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Query products on a running service via the JSON-RPC shim
    Products {
        /// Service URL to query
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
        /// Look up a single product by name instead of listing all
        #[arg(short, long)]
        name: Option<String>,
    },
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("health check failed: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate } => {
            let cfg = crate::infra::config::Config::from_env();
            println!("{}", config_summary(&cfg));
            if !validate {
                return ExitCode::SUCCESS;
            }
            match validate_config() {
                Ok(products) => {
                    println!("configuration is valid ({products} products)");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("configuration validation failed: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Status { url } => match health_check(&url).await {
            Ok(_) => {
                println!("{} {} is up", chrono::Utc::now().to_rfc3339(), url);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("status check failed: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Products { url, name } => match query_products(&url, name.as_deref()).await {
            Ok(out) => {
                println!("{out}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("product query failed: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn health_check(url: &str) -> anyhow::Result<()> {
    let client = make_http_client()?;
    retry_async(2, |attempt| {
        let client = client.clone();
        async move {
            let (builder, rid) =
                add_standard_headers(client.get(format!("{url}/healthz")), None);
            let response = builder.send().await?;
            tracing::debug!(request_id = %rid, attempt, status = %response.status(), "health check");
            if response.status().is_success() {
                Ok(())
            } else {
                anyhow::bail!("HTTP {}", response.status())
            }
        }
    })
    .await
}

fn config_summary(cfg: &crate::infra::config::Config) -> String {
    let catalog = cfg
        .catalog_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(seeded)".into());
    format!(
        "mode={} port={} rpc_shim={} catalog={catalog}",
        cfg.mode, cfg.port, cfg.rpc_shim
    )
}

fn validate_config() -> anyhow::Result<usize> {
    let cfg = crate::infra::config::Config::from_env();
    if !matches!(cfg.mode.as_str(), "server" | "stdio") {
        anyhow::bail!("invalid MODE: {}. Must be 'server' or 'stdio'", cfg.mode);
    }
    let catalog = crate::infra::config::load_catalog(&cfg)?;
    if catalog.is_empty() {
        anyhow::bail!("catalog is empty");
    }
    Ok(catalog.len())
}

async fn query_products(url: &str, name: Option<&str>) -> anyhow::Result<String> {
    let params = match name {
        Some(n) => serde_json::json!({"name": "getProduct", "arguments": {"name": n}}),
        None => serde_json::json!({"name": "getProducts", "arguments": {}}),
    };
    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools.call",
        "params": params,
    });
    let client = make_http_client()?;
    let (builder, _rid) = add_standard_headers(client.post(format!("{url}/v1/rpc")), None);
    let resp: serde_json::Value = builder.json(&body).send().await?.json().await?;
    if let Some(err) = resp.get("error") {
        anyhow::bail!("rpc error: {err}");
    }
    Ok(serde_json::to_string_pretty(&resp["result"])?)
}
