//! MCP tool modules.
//!
//! Tools are grouped by concern: people lookup, graph mutation, connection
//! queries, and contextual help.

pub mod connection;
pub mod modify;
pub mod search;
mod context;
