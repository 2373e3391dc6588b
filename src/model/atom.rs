use super::bond::Bond;
use super::geometry::{Direction, Point};
use super::types::Element;
use slotmap::new_key_type;

new_key_type! {
    /// Stable identity handle for an atom stored in an [`AtomGraph`](super::graph::AtomGraph).
    pub struct AtomId;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub position: Point,
    pub(crate) bonds: [Option<Bond>; 4],
}

impl Atom {
    pub fn new(element: Element, position: Point) -> Self {
        Self {
            element,
            position,
            bonds: [None; 4],
        }
    }

    pub fn bond(&self, direction: Direction) -> Option<Bond> {
        direction.slot().and_then(|slot| self.bonds[slot])
    }

    pub fn bonds(&self) -> impl Iterator<Item = (Direction, Bond)> + '_ {
        Direction::ALL_PHYSICAL
            .into_iter()
            .filter_map(|dir| self.bond(dir).map(|bond| (dir, bond)))
    }

    /// Sum of the strengths of every bond this atom participates in.
    pub fn bond_count(&self) -> u8 {
        self.bonds().map(|(_, bond)| bond.strength()).sum()
    }

    #[inline]
    pub fn spare_capacity(&self) -> u8 {
        self.element.max_bonds().saturating_sub(self.bond_count())
    }

    pub(crate) fn set_bond(&mut self, direction: Direction, bond: Option<Bond>) {
        if let Some(slot) = direction.slot() {
            self.bonds[slot] = bond;
        }
    }
}
