use std::borrow::Cow;

use graph_core::{ClientError, ControlError};
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, ErrorCode};
use serde_json::Value;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn map_err(err: ControlError) -> ErrorData {
    match err {
        ControlError::Mutation(_)
        | ControlError::InvalidArgument { .. }
        | ControlError::Client(ClientError::InvalidSegment(_)) => {
            mcp_err(ErrorCode::INVALID_PARAMS, err.to_string())
        }
        ControlError::Client(ClientError::Status { status, message })
            if status == graph_core::StatusCode::NOT_FOUND =>
        {
            mcp_err(ErrorCode::RESOURCE_NOT_FOUND, message)
        }
        ControlError::Client(err) => mcp_err(ErrorCode::INTERNAL_ERROR, err.to_string()),
    }
}

/// Wraps a graph service response as the tool result, unchanged.
pub fn json_result(value: Value) -> Result<CallToolResult, ErrorData> {
    Ok(CallToolResult::success(vec![Content::json(value)?]))
}

#[cfg(test)]
pub mod tests {
    use graph_core::control::MutationError;
    use graph_core::{GraphClient, GraphControlPlane, Url};

    use super::*;
    use crate::GraphMcp;

    /// Server bound to a closed local port; only paths that never reach the
    /// network may be exercised with it.
    pub fn offline_server() -> GraphMcp {
        let url = Url::parse("http://127.0.0.1:9").expect("static url");
        GraphMcp::new(GraphControlPlane::new(GraphClient::new(url)))
    }

    /// Text of the first content block of a tool result.
    pub fn result_text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).expect("serialize tool result");
        value["content"][0]["text"]
            .as_str()
            .expect("text content")
            .to_string()
    }

    #[test]
    fn validation_errors_are_invalid_params() {
        let err = map_err(ControlError::Mutation(MutationError::MissingField("name")));
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "data.name is required");
    }

    #[test]
    fn dot_segment_arguments_are_invalid_params() {
        let err = map_err(ControlError::InvalidArgument {
            name: "friend_of",
            value: ".".to_string(),
        });
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("friend_of"));

        let err = map_err(ControlError::Client(ClientError::InvalidSegment("..".to_string())));
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn not_found_maps_to_resource_not_found() {
        let err = map_err(ControlError::Client(ClientError::Status {
            status: graph_core::StatusCode::NOT_FOUND,
            message: "No path found".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert_eq!(err.message, "No path found");
    }

    #[test]
    fn other_faults_are_internal_errors() {
        let err = map_err(ControlError::Client(ClientError::Status {
            status: graph_core::StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("boom"));
    }

    #[test]
    fn json_result_passes_value_through() {
        let value = serde_json::json!({ "nodes": ["A", "B"], "relationships": ["FRIEND_OF"] });
        let result = json_result(value.clone()).expect("json result");
        let text = result_text(&result);
        let decoded: Value = serde_json::from_str(&text).expect("decode text");
        assert_eq!(decoded, value);
    }
}
