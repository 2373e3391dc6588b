//! Validated molecule descriptions for input factories and output targets.

use crate::model::atom::AtomId;
use crate::model::geometry::{Point, Rectangle};
use crate::model::graph::AtomGraph;
use crate::model::molecule::Molecule;
use crate::model::types::Element;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A blueprint rule that a molecule description violates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlueprintError {
    #[error("a molecule needs at least one atom")]
    Empty,

    #[error("two atoms share cell {0}")]
    DuplicateAtom(Point),

    #[error("bond endpoint {0} has no atom")]
    MissingAtom(Point),

    #[error("bond endpoints {from} and {to} are not adjacent")]
    NotAdjacent { from: Point, to: Point },

    #[error("atoms {a} and {b} are bonded more than once")]
    DuplicateBond { a: Point, b: Point },

    #[error("bond between {from} and {to} has strength 0")]
    ZeroStrength { from: Point, to: Point },

    #[error(
        "bond between {from} and {to} requests strength {requested} but only {achieved} fits the element capacities"
    )]
    Unsatisfiable {
        from: Point,
        to: Point,
        requested: u8,
        achieved: u8,
    },

    #[error("atom at {position} lies outside the zone {zone}")]
    OutsideZone { position: Point, zone: Rectangle },

    #[error("molecule is not connected: {0} separate pieces")]
    Disconnected(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomSpec {
    pub position: Point,
    pub element: Element,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondSpec {
    pub from: Point,
    pub to: Point,
    pub strength: u8,
}

/// A molecule that is known to be constructible.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeBlueprint {
    atoms: Vec<AtomSpec>,
    bonds: Vec<BondSpec>,
    molecule: Molecule,
}

impl MoleculeBlueprint {
    /// Validates a molecule description by building it once.
    ///
    /// The atoms must occupy distinct cells, every bond must join two listed
    /// atoms one cell apart with a non-zero strength, and no pair may be
    /// listed twice. The requested strengths must fit the element capacities
    /// and the bonds must connect every atom into a single molecule.
    ///
    /// # Errors
    ///
    /// Returns the first [`BlueprintError`] encountered.
    pub fn new(atoms: Vec<AtomSpec>, bonds: Vec<BondSpec>) -> Result<Self, BlueprintError> {
        if atoms.is_empty() {
            return Err(BlueprintError::Empty);
        }

        let (graph, seed) = build(&atoms, &bonds)?;
        let pieces = graph.molecules().count();
        if pieces != 1 {
            return Err(BlueprintError::Disconnected(pieces));
        }
        let molecule = graph
            .molecule(seed)
            .map_err(|_| BlueprintError::Empty)?
            .clone();

        Ok(Self {
            atoms,
            bonds,
            molecule,
        })
    }

    /// Like [`new`](Self::new), but rejects atoms outside `zone` before any
    /// bond is examined.
    pub fn within(
        atoms: Vec<AtomSpec>,
        bonds: Vec<BondSpec>,
        zone: &Rectangle,
    ) -> Result<Self, BlueprintError> {
        check_positions(atoms.iter().map(|atom| atom.position), zone)?;
        Self::new(atoms, bonds)
    }

    pub fn atoms(&self) -> &[AtomSpec] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[BondSpec] {
        &self.bonds
    }

    /// The structural identity of the built molecule.
    pub fn molecule(&self) -> &Molecule {
        &self.molecule
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.atoms.iter().map(|atom| atom.position)
    }

    /// Checks that every atom lies inside `zone`.
    pub fn check_within(&self, zone: &Rectangle) -> Result<(), BlueprintError> {
        check_positions(self.positions(), zone)
    }

    /// Builds a fresh copy of the molecule in a scratch graph and returns it
    /// with the handle of its first atom.
    pub fn instantiate(&self) -> Result<(AtomGraph, AtomId), BlueprintError> {
        build(&self.atoms, &self.bonds)
    }
}

fn check_positions(
    mut positions: impl Iterator<Item = Point>,
    zone: &Rectangle,
) -> Result<(), BlueprintError> {
    match positions.find(|p| !zone.contains(*p)) {
        Some(position) => Err(BlueprintError::OutsideZone {
            position,
            zone: *zone,
        }),
        None => Ok(()),
    }
}

fn build(atoms: &[AtomSpec], bonds: &[BondSpec]) -> Result<(AtomGraph, AtomId), BlueprintError> {
    let mut graph = AtomGraph::new();
    let mut ids: HashMap<Point, AtomId> = HashMap::with_capacity(atoms.len());
    for atom in atoms {
        if ids.contains_key(&atom.position) {
            return Err(BlueprintError::DuplicateAtom(atom.position));
        }
        ids.insert(atom.position, graph.insert(atom.element, atom.position));
    }

    let mut pairs: HashSet<(Point, Point)> = HashSet::with_capacity(bonds.len());
    for bond in bonds {
        let (from, to) = (bond.from, bond.to);
        let a = *ids.get(&from).ok_or(BlueprintError::MissingAtom(from))?;
        let b = *ids.get(&to).ok_or(BlueprintError::MissingAtom(to))?;
        if from.direction_to(to).is_err() {
            return Err(BlueprintError::NotAdjacent { from, to });
        }
        let (lo, hi) = (from.min(to), from.max(to));
        if !pairs.insert((lo, hi)) {
            return Err(BlueprintError::DuplicateBond { a: lo, b: hi });
        }
        if bond.strength == 0 {
            return Err(BlueprintError::ZeroStrength { from, to });
        }

        let mut achieved = 0;
        for _ in 0..bond.strength {
            match graph.add_bond(a, b) {
                Ok(Some(result)) => achieved = result.strength(),
                Ok(None) => break,
                Err(_) => return Err(BlueprintError::NotAdjacent { from, to }),
            }
        }
        if achieved != bond.strength {
            return Err(BlueprintError::Unsatisfiable {
                from,
                to,
                requested: bond.strength,
                achieved,
            });
        }
    }

    let seed = atoms
        .first()
        .and_then(|atom| ids.get(&atom.position))
        .copied()
        .ok_or(BlueprintError::Empty)?;
    Ok((graph, seed))
}
