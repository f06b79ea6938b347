use std::process::ExitCode;

use clap::Parser;

use product_mcp::{cli, infra};

#[tokio::main]
async fn main() -> ExitCode {
    infra::logging::init();

    let args = cli::Cli::parse();
    match args.command {
        Some(command) => cli::run_commands(command).await,
        None => match infra::boot::run_server().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "server exited with error");
                eprintln!("fatal: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}
