use clap::{Parser, builder::BoolishValueParser};
use graph_core::{DEFAULT_GRAPH_API_URL, Url};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4020";
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "graph-mcpd", version, about = "People-graph MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "GRAPH_API_URL", default_value = DEFAULT_GRAPH_API_URL)]
    graph_api_url: String,

    #[arg(
        long = "stdio",
        env = "GRAPH_ENABLE_STDIO",
        default_value_t = false,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(long, env = "GRAPH_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "GRAPH_MCP_STATEFUL",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    mcp_stateful: bool,

    #[arg(
        long,
        env = "GRAPH_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,

    #[arg(long, env = "GRAPH_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub graph_api_url: Url,
    pub enable_stdio: bool,
    pub mcp_http_addr: SocketAddr,
    pub mcp_stateful: bool,
    pub sse_keep_alive: Option<Duration>,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl GraphConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for GraphConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let invalid_url = |value: &str| ConfigError::InvalidSetting {
            name: "GRAPH_API_URL",
            value: value.to_string(),
        };

        let graph_api_url =
            Url::parse(args.graph_api_url.trim()).map_err(|_| invalid_url(&args.graph_api_url))?;
        if !matches!(graph_api_url.scheme(), "http" | "https") || graph_api_url.cannot_be_a_base() {
            return Err(invalid_url(&args.graph_api_url));
        }

        if EnvFilter::try_new(&args.log_filter).is_err() {
            return Err(ConfigError::InvalidSetting {
                name: "GRAPH_LOG",
                value: args.log_filter,
            });
        }

        let sse_keep_alive = if args.sse_keep_alive_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(args.sse_keep_alive_secs))
        };

        Ok(Self {
            graph_api_url,
            enable_stdio: args.enable_stdio,
            mcp_http_addr: args.mcp_http_addr,
            mcp_stateful: args.mcp_stateful,
            sse_keep_alive,
            log_filter: args.log_filter,
        })
    }
}
