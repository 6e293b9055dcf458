use serde_json::Value;

use super::{ControlError, GraphControlPlane, path_param};
use crate::endpoint::{
    Endpoint,
    SEG_EXPLAIN,
    SEG_LOCATION,
    SEG_PATH,
    SEG_PEOPLE,
    SEG_RELATIONSHIP,
};

#[must_use]
pub fn explain_endpoint(from_person: &str, to_person: &str) -> Endpoint {
    Endpoint::get([SEG_RELATIONSHIP, SEG_EXPLAIN])
        .with_query("from", from_person)
        .with_query("to", to_person)
}

#[must_use]
pub fn path_endpoint(from_person: &str, to_person: &str) -> Endpoint {
    Endpoint::get([SEG_PATH, from_person, to_person])
}

#[must_use]
pub fn location_endpoint(name: &str) -> Endpoint {
    Endpoint::get([SEG_PEOPLE, name, SEG_LOCATION])
}

impl GraphControlPlane {
    /// Fetches the service's explanation of how two people are connected.
    ///
    /// # Errors
    /// Returns `ControlError::Client` if the request or decode fails, including
    /// the service's 404 when no path exists.
    pub async fn explain_connection(
        &self,
        from_person: &str,
        to_person: &str,
    ) -> Result<Value, ControlError> {
        let endpoint = explain_endpoint(from_person, to_person);
        Ok(self.client.send(&endpoint, None).await?)
    }

    /// Fetches the raw shortest path (`nodes`, `relationships`) between two people.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidArgument` when either name is empty, `.` or
    /// `..`, and `ControlError::Client` if the request or decode fails.
    pub async fn find_path(
        &self,
        from_person: &str,
        to_person: &str,
    ) -> Result<Value, ControlError> {
        path_param("from_person", from_person)?;
        path_param("to_person", to_person)?;
        let endpoint = path_endpoint(from_person, to_person);
        Ok(self.client.send(&endpoint, None).await?)
    }

    /// Fetches the location a person lives in.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidArgument` when `name` is empty, `.` or `..`,
    /// and `ControlError::Client` if the request or decode fails.
    pub async fn locate_person(&self, name: &str) -> Result<Value, ControlError> {
        path_param("name", name)?;
        Ok(self.client.send(&location_endpoint(name), None).await?)
    }
}
