//! MCP server implementation for graph-mcp.
//!
//! This crate wires the graph control plane into rmcp tool handlers and exposes
//! the MCP-facing surface for searching, modifying, and explaining the people graph.

mod helpers;
mod tools;
pub mod server;

use graph_core::GraphControlPlane;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

pub use tools::connection::{ConnectionParams, LocatePersonParams};
pub use tools::modify::ModifyGraphParams;
pub use tools::search::SearchPeopleParams;

const SERVER_INSTRUCTIONS: &str = r#"graph-mcp exposes a people graph (persons, friendships, family ties, and where people live) through a small set of tools.

Tools:
- `search_people`: look people up. Pass at most one of `name`, `city`, `friend_of`.
  If several are set, the first non-empty one in that order wins. With none, every person is listed.
- `modify_graph`: write to the graph with `action`, `entity`, and a `data` object:
  - `create` + `person`: data is the new person, e.g. {"name": "Alice", "email": "alice@example.com"}.
  - `update` + `person`: data.name selects the person; `newName` and `email` are the new values.
  - `delete` + `person`: data.name selects the person.
  - `connect` (any entity): data.type selects the relationship endpoint (`friend`, `father`, `lives-in`);
    the rest of data is forwarded, e.g. {"type": "friend", "from": "Alice", "to": "Bob"}.
  Any other action/entity pair returns {"error": "Invalid action or entity"}.
- `explain_connection`: explains how `from_person` is connected to `to_person`.
- `find_path`: returns the raw node and relationship path between two people.
- `locate_person`: returns where a person lives.

Notes:
- Responses are returned exactly as the graph service produced them.
- Use `help` for a command summary. `health` returns `ok`."#;

/// MCP server wrapper around the graph control plane and tool routers.
#[derive(Clone)]
pub struct GraphMcp {
    tool_router: ToolRouter<Self>,
    control: GraphControlPlane,
}

impl GraphMcp {
    #[must_use]
    pub fn new(control: GraphControlPlane) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_search()
            + Self::tool_router_modify()
            + Self::tool_router_connection()
            + Self::tool_router_context();
        Self {
            tool_router,
            control,
        }
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl GraphMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for GraphMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
