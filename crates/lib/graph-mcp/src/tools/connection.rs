use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{GraphMcp, helpers};

/// Parameters naming the two ends of a connection.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ConnectionParams {
    /// Name of the person the connection starts from.
    pub from_person: String,
    /// Name of the person the connection ends at.
    pub to_person: String,
}

/// Parameters for looking up where a person lives.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct LocatePersonParams {
    pub name: String,
}

#[tool_router(router = tool_router_connection, vis = "pub")]
impl GraphMcp {
    #[tool(description = "Explain how one person is connected to another.")]
    async fn explain_connection(
        &self,
        Parameters(params): Parameters<ConnectionParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let explanation = self
            .control
            .explain_connection(&params.from_person, &params.to_person)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(explanation)
    }

    #[tool(description = "Return the raw shortest path (nodes and relationship types) between two people.")]
    async fn find_path(
        &self,
        Parameters(params): Parameters<ConnectionParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let path = self
            .control
            .find_path(&params.from_person, &params.to_person)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(path)
    }

    #[tool(description = "Return the location a person lives in.")]
    async fn locate_person(
        &self,
        Parameters(params): Parameters<LocatePersonParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let location = self
            .control
            .locate_person(&params.name)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(location)
    }
}
