//! The reactor and its step-cycle engine.
//!
//! - [`reactor`] – Immutable tile grid, zone layout, waldo starts, input
//!   factories, and output targets, validated at construction.
//! - [`waldo`] – A manipulator with a position, a sticky heading, and an
//!   optional grip on one molecule.
//! - [`atom_manager`] – The live atom population with occupancy checks.
//! - [`state`] – [`GameState`], which advances the whole system one cycle at
//!   a time and reports halts as [`StepOutcome`] values.
//! - [`tokens`] – Canonical text tokens for instructions, directions, and
//!   waldo types.

pub mod atom_manager;
pub mod blueprint;
pub mod config;
pub mod error;
pub mod reactor;
pub mod state;
pub mod tokens;
pub mod types;
pub mod waldo;

pub use atom_manager::AtomManager;
pub use blueprint::{AtomSpec, BlueprintError, BondSpec, MoleculeBlueprint};
pub use config::{ActiveWaldos, CollisionRule, InputSelection, SimulationConfig};
pub use reactor::{
    Command, InputDescription, InputFactory, InputOption, MAX_CELLS, MoleculeDescription,
    OutputDescription, OutputTarget, Reactor, ReactorDescription, Tile, TileOverride, WaldoStart,
    ZoneLayout,
};
pub use state::{GameState, HaltReason, StepOutcome};
pub use types::{ByWaldo, Instruction, WaldoType, Zone};
pub use waldo::Waldo;
