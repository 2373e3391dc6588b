//! A deterministic, cycle-stepped simulator for a grid-based molecule-assembly
//! reactor. Two programmable manipulators ("waldos") walk a fixed tile grid,
//! pick up molecules that input zones produce, carry them around, and deliver
//! them into output zones, all on integer coordinates.
//!
//! # Features
//!
//! - **Atom graph**: Atoms with four directional bond slots, bond strength
//!   bounded by element capacity, and molecules that compare by structure
//! - **Reactor model**: Validated tile grid with per-waldo arrows and
//!   instructions, fixed input and output zones, and molecule blueprints
//! - **Step-cycle engine**: Movement, collision detection, and instruction
//!   execution with halts reported as values
//! - **Reactor files**: JSON and TOML descriptions with case-insensitive
//!   instruction, direction, and element tokens
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use waldo_sim::io::{Format, parse_reactor};
//! use waldo_sim::{GameState, Point, StepOutcome, WaldoType};
//!
//! let text = r#"{
//!     "reactor": {
//!         "width": 10,
//!         "height": 8,
//!         "starts": {
//!             "alpha": { "x": 5, "y": 5, "direction": "left" },
//!             "beta": { "x": 5, "y": 7, "direction": "down" }
//!         },
//!         "tiles": [
//!             { "x": 4, "y": 5, "instruction": "in-alpha", "waldo": "alpha" }
//!         ],
//!         "inputs": {
//!             "alpha": [{
//!                 "probability": 1.0,
//!                 "atoms": [{ "x": 2, "y": 2, "name": "h" }, { "x": 2, "y": 3, "name": "o" }],
//!                 "bonds": [{ "x1": 2, "y1": 2, "x2": 2, "y2": 3, "strength": 1 }]
//!             }]
//!         }
//!     }
//! }"#;
//!
//! let reactor = Arc::new(parse_reactor(text, Format::Json)?);
//! let mut game = GameState::new(reactor);
//!
//! assert_eq!(game.step()?, StepOutcome::Completed);
//! assert_eq!(game.waldo(WaldoType::Alpha).position(), Point::new(4, 5));
//! assert!(game.atoms().is_atom_at_position(Point::new(2, 2)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`model`]: Geometry, elements, atoms, bonds, and molecules
//! - [`sim`]: Reactor, waldos, atom manager, and the [`GameState`] engine
//! - [`io`]: Reactor description documents (JSON and TOML)
//!
//! # Data Types
//!
//! ## Geometry and Chemistry
//!
//! - [`Point`], [`Rectangle`], [`Direction`]: Integer grid primitives
//! - [`Element`]: Supported elements with their bond capacities
//! - [`Atom`], [`Bond`], [`Molecule`]: The atom graph, owned by [`AtomGraph`]
//!
//! ## Simulation
//!
//! - [`Reactor`]: Immutable grid, zones, starts, inputs, and outputs
//! - [`Waldo`]: Position, heading, and grip
//! - [`GameState`]: One simulation run; [`StepOutcome`] and [`HaltReason`]
//!   describe how a cycle ended
//! - [`SimulationConfig`]: Collision rule, active waldos, input selection

pub mod io;
pub mod model;
pub mod sim;

pub use model::atom::{Atom, AtomId};
pub use model::bond::Bond;
pub use model::geometry::{Direction, Point, Rectangle};
pub use model::graph::AtomGraph;
pub use model::molecule::Molecule;
pub use model::types::{Element, ParseElementError};

pub use sim::{
    ActiveWaldos, AtomManager, CollisionRule, GameState, HaltReason, InputSelection, Instruction,
    MoleculeBlueprint, Reactor, ReactorDescription, SimulationConfig, StepOutcome, Tile, Waldo,
    WaldoType, Zone,
};

pub use model::error::Error as ModelError;
pub use sim::error::Error as ReactorError;
