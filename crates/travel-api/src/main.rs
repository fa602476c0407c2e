//! Travel-price lookup service.

use anyhow::Context as _;
use arith_runtime::{LogFormat, ServeConfig, all_interfaces};
use arith_travel_api::{DEFAULT_PORT, router};
use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "travel-api", version, about = "Mock travel-price lookup")]
struct Cli {
    /// Address to listen on (default: 0.0.0.0:8080)
    #[arg(long, env = "TRAVEL_API_BIND")]
    bind: Option<SocketAddr>,

    /// Log filter (`RUST_LOG` takes precedence)
    #[arg(long, env = "TRAVEL_API_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[arg(
        long,
        env = "TRAVEL_API_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServeConfig {
        bind: cli.bind.unwrap_or_else(|| all_interfaces(DEFAULT_PORT)),
        log_level: cli.log_level,
        log_format: cli.log_format,
    };

    config
        .launch("travel-api", router())
        .await
        .context("run travel-api")
}
