//! Daemon entry point for the people-graph MCP server.
//!
//! Loads configuration from the CLI and environment, installs logging on
//! stderr, and serves the MCP protocol over stdio or streamable HTTP.

mod config;

use graph_core::{GraphClient, GraphControlPlane};
use graph_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::GraphConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = GraphConfig::from_args()?;
    init_tracing(&config.log_filter)?;

    info!("graph api at {}", config.graph_api_url);
    let control = GraphControlPlane::new(GraphClient::new(config.graph_api_url.clone()));

    if config.enable_stdio {
        return serve_stdio(control).await;
    }

    let http = McpHttpServerConfig::new(config.mcp_http_addr)
        .with_stateful_mode(config.mcp_stateful)
        .with_sse_keep_alive(config.sse_keep_alive);
    serve_streamable_http(control, http).await
}

// stdout carries the stdio transport, so logs go to stderr.
fn init_tracing(filter: &str) -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .try_init()
}
