use std::{error::Error, fmt};

use serde_json::{Map, Value, json};
use tracing::debug;

use super::{ControlError, GraphControlPlane};
use crate::endpoint::{Endpoint, SEG_PEOPLE, SEG_RELATIONSHIPS, is_single_segment};

pub const INVALID_MUTATION_MESSAGE: &str = "Invalid action or entity";

pub const ACTION_CREATE: &str = "create";
pub const ACTION_UPDATE: &str = "update";
pub const ACTION_DELETE: &str = "delete";
pub const ACTION_CONNECT: &str = "connect";
pub const ENTITY_PERSON: &str = "person";

const NOT_A_STRING: &str = "must be a string";
const NOT_A_SEGMENT: &str = "must not be `.` or `..`";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    Unsupported { action: String, entity: String },
    MissingField(&'static str),
    InvalidField { field: &'static str, reason: &'static str },
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { action, entity } => {
                write!(f, "unsupported mutation: action={action} entity={entity}")
            }
            Self::MissingField(field) => write!(f, "data.{field} is required"),
            Self::InvalidField { field, reason } => write!(f, "data.{field} {reason}"),
        }
    }
}

impl Error for MutationError {}

/// A validated write against the graph service.
///
/// Each variant keeps the key that routes it and, where the service expects a
/// body, the caller's payload exactly as given.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreatePerson {
        data: Map<String, Value>,
    },
    UpdatePerson {
        name: String,
        data: Map<String, Value>,
    },
    DeletePerson {
        name: String,
    },
    Connect {
        relationship_type: String,
        data: Map<String, Value>,
    },
}

impl Mutation {
    /// Resolves an `(action, entity)` pair and its payload into a mutation.
    ///
    /// `connect` accepts any entity. Matching is case-sensitive. Only the
    /// routing key (`name` or `type`) is checked; other keys are not.
    ///
    /// # Errors
    /// Returns `MutationError::Unsupported` for unknown pairs, before the payload
    /// is inspected. Returns `MissingField` or `InvalidField` when the routing
    /// key is absent, empty, not a string, or a dot segment.
    pub fn parse(
        action: &str,
        entity: &str,
        data: Map<String, Value>,
    ) -> Result<Self, MutationError> {
        match (action, entity) {
            (ACTION_CREATE, ENTITY_PERSON) => Ok(Self::CreatePerson { data }),
            (ACTION_UPDATE, ENTITY_PERSON) => {
                let name = required(&data, "name")?;
                Ok(Self::UpdatePerson { name, data })
            }
            (ACTION_DELETE, ENTITY_PERSON) => {
                let name = required(&data, "name")?;
                Ok(Self::DeletePerson { name })
            }
            (ACTION_CONNECT, _) => {
                let relationship_type = required(&data, "type")?;
                Ok(Self::Connect {
                    relationship_type,
                    data,
                })
            }
            _ => Err(MutationError::Unsupported {
                action: action.to_string(),
                entity: entity.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::CreatePerson { .. } => Endpoint::post([SEG_PEOPLE]),
            Self::UpdatePerson { name, .. } => Endpoint::patch([SEG_PEOPLE, name.as_str()]),
            Self::DeletePerson { name } => Endpoint::delete([SEG_PEOPLE, name.as_str()]),
            Self::Connect {
                relationship_type, ..
            } => Endpoint::post([SEG_RELATIONSHIPS, relationship_type.as_str()]),
        }
    }

    /// Request body for the mutation; delete sends none.
    #[must_use]
    pub fn body(&self) -> Option<Value> {
        match self {
            Self::CreatePerson { data }
            | Self::UpdatePerson { data, .. }
            | Self::Connect { data, .. } => Some(Value::Object(data.clone())),
            Self::DeletePerson { .. } => None,
        }
    }
}

fn required(data: &Map<String, Value>, field: &'static str) -> Result<String, MutationError> {
    match data.get(field) {
        None | Some(Value::Null) => Err(MutationError::MissingField(field)),
        Some(Value::String(value)) if value.is_empty() => Err(MutationError::MissingField(field)),
        Some(Value::String(value)) if !is_single_segment(value) => {
            Err(MutationError::InvalidField {
                field,
                reason: NOT_A_SEGMENT,
            })
        }
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(MutationError::InvalidField {
            field,
            reason: NOT_A_STRING,
        }),
    }
}

/// The value returned, as ordinary data, for an unrecognized action/entity pair.
#[must_use]
pub fn invalid_mutation_value() -> Value {
    json!({ "error": INVALID_MUTATION_MESSAGE })
}

impl GraphControlPlane {
    /// Applies a validated mutation and returns the service response unchanged.
    ///
    /// # Errors
    /// Returns `ControlError::Client` if the request or decode fails.
    pub async fn apply(&self, mutation: &Mutation) -> Result<Value, ControlError> {
        let body = mutation.body();
        Ok(self.client.send(&mutation.endpoint(), body.as_ref()).await?)
    }

    /// Resolves and applies a raw `(action, entity, data)` mutation.
    ///
    /// Unknown pairs yield `{"error": "Invalid action or entity"}` without a request.
    ///
    /// # Errors
    /// Returns `ControlError::Mutation` when the routing key is missing or unusable
    /// and `ControlError::Client` if the request or decode fails.
    pub async fn modify(
        &self,
        action: &str,
        entity: &str,
        data: Map<String, Value>,
    ) -> Result<Value, ControlError> {
        match Mutation::parse(action, entity, data) {
            Ok(mutation) => self.apply(&mutation).await,
            Err(MutationError::Unsupported { action, entity }) => {
                debug!(%action, %entity, "rejected unsupported mutation");
                Ok(invalid_mutation_value())
            }
            Err(err) => Err(err.into()),
        }
    }
}
