use graph_core::control::SearchQuery;
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

/// Parameters for looking people up. Set at most one filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchPeopleParams {
    /// Exact name of a person. Takes priority over `city` and `friend_of`.
    pub name: Option<String>,
    /// City name; lists the people living there. Takes priority over `friend_of`.
    pub city: Option<String>,
    /// Name of a person whose friends should be listed.
    pub friend_of: Option<String>,
}

#[tool_router(router = tool_router_search, vis = "pub")]
impl GraphMcp {
    #[tool(description = "Search for people by name, city, or friendships. The first non-empty filter in the order name, city, friend_of is used; with no filter every person is listed.")]
    async fn search_people(
        &self,
        Parameters(params): Parameters<SearchPeopleParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let query = SearchQuery::from_filters(
            params.name.as_deref(),
            params.city.as_deref(),
            params.friend_of.as_deref(),
        );
        let people = self
            .control
            .search(&query)
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(people)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;
    use crate::helpers::tests::offline_server;

    #[tokio::test]
    async fn dot_filters_are_invalid_params() {
        let server = offline_server();

        for params in [
            SearchPeopleParams {
                name: Some("..".to_string()),
                ..Default::default()
            },
            SearchPeopleParams {
                friend_of: Some(".".to_string()),
                ..Default::default()
            },
        ] {
            let err = server
                .search_people(Parameters(params))
                .await
                .expect_err("dot filter is rejected");
            assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        }
    }
}
