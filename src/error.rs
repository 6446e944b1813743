use thiserror::Error;

use crate::id::AgentId;

/// Errors raised by the simulation core.
///
/// `InvalidParameter` and `Config` are ordinary validation failures returned
/// before any world state exists. `InvalidPosition` and `AgentNotFound` mean
/// the grid, scheduler and entity index disagree; they abort the tick that
/// hit them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimError {
    /// A cell outside the grid was referenced.
    #[error("position ({x}, {y}) is outside the {width}x{height} grid")]
    InvalidPosition {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// An agent was expected in the grid, scheduler or index but is absent.
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
    /// A configuration value failed validation.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    /// The configuration document could not be parsed.
    #[error("malformed configuration: {0}")]
    Config(String),
}

impl SimError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
