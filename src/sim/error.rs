//! Error types for reactor construction and simulation.
//!
//! Simulation halts (collisions, blocked inputs, rejected outputs) are not
//! errors; they are reported through [`StepOutcome`](super::StepOutcome).
//! The variants here cover malformed reactor descriptions and contract
//! violations bubbling up from the atom graph.

use super::blueprint::BlueprintError;
use super::types::WaldoType;
use crate::model::error::Error as ModelError;
use crate::model::geometry::Point;
use crate::model::types::ParseElementError;
use thiserror::Error;

/// Errors raised while building a reactor or advancing a simulation.
#[derive(Debug, Error)]
pub enum Error {
    /// A tile was requested at a position outside the reactor grid.
    #[error("no tile exists at position {0}")]
    TileOutOfBounds(Point),

    /// The reactor is too small for the fixed zone layout, or too large to
    /// allocate.
    #[error(
        "reactor dimensions {width}x{height} are unsupported (at least 8x2 and at most 1048576 tiles)"
    )]
    InvalidDimensions { width: i32, height: i32 },

    /// A waldo start lies outside the grid or uses the continue heading.
    #[error("invalid start for the {waldo} waldo: {detail}")]
    InvalidStart { waldo: WaldoType, detail: String },

    /// A tile override targets a cell outside the grid.
    #[error("tile override at {0} lies outside the reactor grid")]
    TileOutsideGrid(Point),

    /// An input or output molecule description is not constructible.
    #[error("invalid {waldo} {role} molecule: {source}")]
    InvalidBlueprint {
        waldo: WaldoType,
        role: &'static str,
        #[source]
        source: BlueprintError,
    },

    /// An input option carries a probability that is negative or not finite.
    #[error("input option {index} of the {waldo} factory has invalid probability {probability}")]
    InvalidProbability {
        waldo: WaldoType,
        index: usize,
        probability: f64,
    },

    /// A token did not match any entry of the canonical token table.
    #[error("unknown {kind} token '{token}'")]
    UnknownToken { kind: &'static str, token: String },

    /// The canonical token table is not a bijection.
    #[error("token table for {kind} is inconsistent: {detail}")]
    TokenTable { kind: &'static str, detail: String },

    /// An element name did not resolve.
    #[error(transparent)]
    Element(#[from] ParseElementError),

    /// A contract violation from the atom graph.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl Error {
    /// Creates an [`InvalidStart`](Error::InvalidStart) error.
    ///
    /// # Arguments
    ///
    /// * `waldo` - The waldo whose start is invalid
    /// * `detail` - Description of the problem
    pub fn invalid_start(waldo: WaldoType, detail: impl Into<String>) -> Self {
        Self::InvalidStart {
            waldo,
            detail: detail.into(),
        }
    }

    /// Creates an [`UnknownToken`](Error::UnknownToken) error.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which token family was being parsed
    /// * `token` - The unrecognized text
    pub fn unknown_token(kind: &'static str, token: &str) -> Self {
        Self::UnknownToken {
            kind,
            token: token.to_string(),
        }
    }
}
