//! `/multiply` and `/divide` calculator service.

use anyhow::Context as _;
use arith_calculator::{ServiceKind, router};
use arith_runtime::{LogFormat, ServeConfig, all_interfaces};
use clap::Parser;
use std::net::SocketAddr;

const KIND: ServiceKind = ServiceKind::MultiplyDivide;

#[derive(Parser, Debug)]
#[command(
    name = "multiply-divide-api",
    version,
    about = "Integer multiply and true division over HTTP + JSON"
)]
struct Cli {
    /// Address to listen on (default: 0.0.0.0:5001)
    #[arg(long, env = "MULTIPLY_DIVIDE_API_BIND")]
    bind: Option<SocketAddr>,

    /// Log filter (`RUST_LOG` takes precedence)
    #[arg(long, env = "MULTIPLY_DIVIDE_API_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[arg(
        long,
        env = "MULTIPLY_DIVIDE_API_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServeConfig {
        bind: cli.bind.unwrap_or_else(|| all_interfaces(KIND.default_port())),
        log_level: cli.log_level,
        log_format: cli.log_format,
    };

    config
        .launch(KIND.name(), router(KIND))
        .await
        .with_context(|| format!("run {}", KIND.name()))
}
