use super::atom::AtomId;
use super::geometry::{Direction, Point};
use thiserror::Error;

/// Contract violations raised by the geometry and atom-graph layer.
///
/// None of these are recoverable simulation outcomes; they indicate that a
/// caller asked for something the data model cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot project a point using the continue direction")]
    ContinueProjection,

    #[error("moving {from} {direction} leaves the coordinate range")]
    CoordinateOverflow { from: Point, direction: Direction },

    #[error("{to} is not a distance of 1 away from {from}")]
    NotAdjacent { from: Point, to: Point },

    #[error("rectangle dimensions must be positive (width = {width}, height = {height})")]
    InvalidRectangle { width: i32, height: i32 },

    #[error("bond does not contain atom {atom:?}")]
    NotAnEndpoint { atom: AtomId },

    #[error("no atom with handle {0:?} exists in this graph")]
    UnknownAtom(AtomId),

    #[error("bond direction {given} does not match atom placement (expected {expected})")]
    DirectionMismatch { expected: Direction, given: Direction },

    #[error("bond slot {direction} of atom {atom:?} is already bonded to a different atom")]
    SlotOccupied { atom: AtomId, direction: Direction },
}
