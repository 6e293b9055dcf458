use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{GraphMcp, helpers};

/// Parameters for a graph mutation.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ModifyGraphParams {
    /// One of `create`, `update`, `delete`, or `connect`.
    pub action: String,
    /// `person` for create, update, and delete. Ignored by `connect`.
    #[serde(default)]
    pub entity: String,
    /// Payload. Update and delete need `name`; connect needs `type`
    /// (`friend`, `father`, `lives-in`) plus the relationship ends.
    #[serde(default)]
    pub data: Map<String, Value>,
}

#[tool_router(router = tool_router_modify, vis = "pub")]
impl GraphMcp {
    #[tool(description = "Add, update, or delete people, or connect them with relationships. Unknown action/entity pairs return {\"error\": \"Invalid action or entity\"}.")]
    async fn modify_graph(
        &self,
        Parameters(params): Parameters<ModifyGraphParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let response = self
            .control
            .modify(&params.action, &params.entity, params.data)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(response)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;
    use serde_json::json;

    use super::*;
    use crate::helpers::tests::{offline_server, result_text};

    fn params(action: &str, entity: &str, data: Value) -> Parameters<ModifyGraphParams> {
        let Value::Object(data) = data else {
            panic!("data must be an object");
        };
        Parameters(ModifyGraphParams {
            action: action.to_string(),
            entity: entity.to_string(),
            data,
        })
    }

    #[tokio::test]
    async fn unknown_pair_returns_structured_error() {
        let server = offline_server();

        let result = server
            .modify_graph(params("archive", "person", json!({ "name": "Alice" })))
            .await
            .expect("rejection is ordinary data");

        let decoded: Value = serde_json::from_str(&result_text(&result)).expect("json text");
        assert_eq!(decoded, json!({ "error": "Invalid action or entity" }));
        let raw = serde_json::to_value(&result).expect("serialize result");
        assert_ne!(raw.get("isError"), Some(&json!(true)));
    }

    #[tokio::test]
    async fn missing_name_is_invalid_params() {
        let server = offline_server();

        let err = server
            .modify_graph(params("delete", "person", json!({})))
            .await
            .expect_err("name is required");

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn connect_without_type_is_invalid_params() {
        let server = offline_server();

        let err = server
            .modify_graph(params("connect", "", json!({ "from": "A", "to": "B" })))
            .await
            .expect_err("type is required");

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("type"));
    }

    #[tokio::test]
    async fn dot_name_is_invalid_params() {
        let server = offline_server();

        let err = server
            .modify_graph(params("delete", "person", json!({ "name": ".." })))
            .await
            .expect_err("dot segment is rejected");

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn entity_and_data_default_when_omitted() {
        let params: ModifyGraphParams =
            serde_json::from_value(json!({ "action": "connect" })).expect("decode params");
        assert!(params.entity.is_empty());
        assert!(params.data.is_empty());
    }
}
