use serde_json::Value;

use super::{ControlError, GraphControlPlane, path_param};
use crate::endpoint::{Endpoint, SEG_FRIENDS, SEG_LOCATION, SEG_PEOPLE};

/// A people lookup. Exactly one filter is honored per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    ByName(String),
    ByCity(String),
    FriendsOf(String),
    All,
}

impl SearchQuery {
    /// Picks the first non-empty filter in priority order name, city, `friend_of`.
    /// Lower-priority filters are ignored when a higher one is set.
    #[must_use]
    pub fn from_filters(name: Option<&str>, city: Option<&str>, friend_of: Option<&str>) -> Self {
        if let Some(name) = non_empty(name) {
            Self::ByName(name.to_string())
        } else if let Some(city) = non_empty(city) {
            Self::ByCity(city.to_string())
        } else if let Some(friend_of) = non_empty(friend_of) {
            Self::FriendsOf(friend_of.to_string())
        } else {
            Self::All
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::ByName(name) => Endpoint::get([SEG_PEOPLE, name.as_str()]),
            Self::ByCity(city) => Endpoint::get([SEG_LOCATION, city.as_str(), SEG_PEOPLE]),
            Self::FriendsOf(name) => Endpoint::get([SEG_PEOPLE, name.as_str(), SEG_FRIENDS]),
            Self::All => Endpoint::get([SEG_PEOPLE]),
        }
    }

    fn check(&self) -> Result<(), ControlError> {
        match self {
            Self::ByName(name) => path_param("name", name),
            Self::ByCity(city) => path_param("city", city),
            Self::FriendsOf(name) => path_param("friend_of", name),
            Self::All => Ok(()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

impl GraphControlPlane {
    /// Runs a people lookup and returns the service response unchanged.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidArgument` for a `.` or `..` filter, without
    /// a request, and `ControlError::Client` if the request or decode fails.
    pub async fn search(&self, query: &SearchQuery) -> Result<Value, ControlError> {
        query.check()?;
        Ok(self.client.send(&query.endpoint(), None).await?)
    }
}
