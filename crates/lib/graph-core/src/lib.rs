//! Core client and operations for graph-mcp.
//!
//! This crate owns the HTTP client for the people-graph service, the endpoint
//! routing table, and the control plane that turns typed search, mutation, and
//! connection queries into single requests.

pub mod client;
pub mod control;
pub mod endpoint;

pub use client::{ClientError, DEFAULT_GRAPH_API_URL, GraphClient};
pub use control::{ControlError, GraphControlPlane};
pub use reqwest::{StatusCode, Url};
