use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::GraphMcp;

/// Payload listing the MCP commands this server exposes.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List the MCP commands this server exposes.".to_string(),
                "health - Returns 'ok'.".to_string(),
                "search_people - Find people by name, city, or friend_of (first non-empty wins); no filter lists everyone."
                    .to_string(),
                "modify_graph - create/update/delete a person, or connect people with a relationship type."
                    .to_string(),
                "explain_connection - Explain how from_person is connected to to_person.".to_string(),
                "find_path - Raw node and relationship path between two people.".to_string(),
                "locate_person - Where a person lives.".to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl GraphMcp {
    #[tool(description = "List the MCP commands to get context with how this MCP server works.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}
