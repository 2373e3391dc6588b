//! Core data structures for atoms, bonds, and molecules on an integer grid.
//!
//! This module provides the foundational types that flow through `waldo-sim`:
//!
//! - [`geometry`] – Integer points, rectangles, and the four grid directions.
//! - [`types`] – Element table with per-element bond capacities.
//! - [`atom`] – Atoms with a position and four directional bond slots.
//! - [`bond`] – Immutable bond values with an integer strength.
//! - [`graph`] – Arena owning atoms and the molecule partition derived from bonds.
//! - [`molecule`] – Structural view of a bond-connected component.
//!
//! Atoms are entities with a stable handle ([`AtomId`](atom::AtomId)) while
//! molecules compare by structure only, so the two notions of equality never
//! alias one another.

pub mod atom;
pub mod bond;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod molecule;
pub mod types;
