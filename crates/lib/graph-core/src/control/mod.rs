use std::{error::Error, fmt};

use crate::client::{ClientError, GraphClient};
use crate::endpoint::is_single_segment;

pub mod connection;
pub mod modify;
pub mod search;

pub use modify::{INVALID_MUTATION_MESSAGE, Mutation, MutationError, invalid_mutation_value};
pub use search::SearchQuery;

#[derive(Debug)]
pub enum ControlError {
    Client(ClientError),
    Mutation(MutationError),
    InvalidArgument { name: &'static str, value: String },
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(err) => write!(f, "{err}"),
            Self::Mutation(err) => write!(f, "{err}"),
            Self::InvalidArgument { name, value } => {
                write!(f, "{name} must name a single path segment, got {value:?}")
            }
        }
    }
}

impl Error for ControlError {}

impl From<ClientError> for ControlError {
    fn from(err: ClientError) -> Self {
        Self::Client(err)
    }
}

impl From<MutationError> for ControlError {
    fn from(err: MutationError) -> Self {
        Self::Mutation(err)
    }
}

/// Operations over the people-graph service. Each call issues at most one request.
#[derive(Debug, Clone)]
pub struct GraphControlPlane {
    client: GraphClient,
}

impl GraphControlPlane {
    #[must_use]
    pub const fn new(client: GraphClient) -> Self {
        Self { client }
    }
}

/// Rejects path parameters that would not address exactly one segment.
fn path_param(name: &'static str, value: &str) -> Result<(), ControlError> {
    if is_single_segment(value) {
        Ok(())
    } else {
        Err(ControlError::InvalidArgument {
            name,
            value: value.to_string(),
        })
    }
}
