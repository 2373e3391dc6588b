use super::atom::{Atom, AtomId};
use super::bond::Bond;
use super::error::Error;
use super::geometry::{Direction, Point};
use super::molecule::Molecule;
use super::types::Element;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::{HashMap, HashSet, VecDeque};

/// Arena of atoms linked by directional bonds.
///
/// Atoms are addressed by generational [`AtomId`] handles. Each atom keeps up
/// to four bond slots, one per physical direction; a bond is stored in the
/// facing slots of both endpoints. The partition of atoms into molecules is
/// rebuilt on every structural mutation (insert, remove, bond change) so
/// readers always see the bond-reachability closure. Translation moves atoms
/// without touching that partition.
#[derive(Debug, Clone, Default)]
pub struct AtomGraph {
    atoms: SlotMap<AtomId, Atom>,
    membership: SecondaryMap<AtomId, usize>,
    molecules: Vec<Molecule>,
}

impl AtomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: AtomId) -> bool {
        self.atoms.contains_key(id)
    }

    #[inline]
    pub fn get(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    pub fn atom(&self, id: AtomId) -> Result<&Atom, Error> {
        self.atoms.get(id).ok_or(Error::UnknownAtom(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = AtomId> + '_ {
        self.atoms.keys()
    }

    pub fn insert(&mut self, element: Element, position: Point) -> AtomId {
        let id = self.atoms.insert(Atom::new(element, position));
        self.membership.insert(id, self.molecules.len());
        self.molecules
            .push(Molecule::from_members(&self.atoms, vec![id]));
        id
    }

    /// Removes a single atom, clearing the facing slot on each neighbour.
    pub fn remove(&mut self, id: AtomId) -> Result<Atom, Error> {
        let atom = self.atoms.remove(id).ok_or(Error::UnknownAtom(id))?;
        for (direction, bond) in atom.bonds() {
            if let (Ok(other), Some(opposite)) = (bond.other(id), direction.opposite()) {
                if let Some(neighbour) = self.atoms.get_mut(other) {
                    neighbour.set_bond(opposite, None);
                }
            }
        }
        self.reindex();
        Ok(atom)
    }

    /// Removes every atom of the molecule containing `id`.
    pub fn remove_molecule(&mut self, id: AtomId) -> Result<Vec<AtomId>, Error> {
        let members = self.molecule(id)?.atoms().to_vec();
        for member in &members {
            self.atoms.remove(*member);
        }
        self.reindex();
        Ok(members)
    }

    pub fn atom_at(&self, position: Point) -> Option<AtomId> {
        self.atoms
            .iter()
            .find(|(_, atom)| atom.position == position)
            .map(|(id, _)| id)
    }

    pub fn molecule(&self, id: AtomId) -> Result<&Molecule, Error> {
        self.membership
            .get(id)
            .and_then(|index| self.molecules.get(*index))
            .ok_or(Error::UnknownAtom(id))
    }

    pub fn molecules(&self) -> impl Iterator<Item = &Molecule> {
        self.molecules.iter()
    }

    pub fn positions(&self, molecule: &Molecule) -> Vec<Point> {
        molecule
            .atoms()
            .iter()
            .filter_map(|id| self.atoms.get(*id).map(|atom| atom.position))
            .collect()
    }

    pub fn molecule_positions(&self, id: AtomId) -> Result<Vec<Point>, Error> {
        Ok(self.positions(self.molecule(id)?))
    }

    /// Bonds `a` to `b`, deriving the slot from their relative placement.
    ///
    /// Returns the bond now occupying the slot. An empty slot receives a new
    /// single bond; an occupied one is strengthened by one. Either change is
    /// skipped silently when an endpoint has no spare bond capacity, in which
    /// case the existing bond (or `None`) is returned.
    pub fn add_bond(&mut self, a: AtomId, b: AtomId) -> Result<Option<Bond>, Error> {
        let direction = self.atom(a)?.position.direction_to(self.atom(b)?.position)?;
        self.bond_toward(a, b, direction)
    }

    /// Like [`add_bond`](Self::add_bond), with the slot supplied by the
    /// caller. The direction must agree with the atoms' placement.
    pub fn add_bond_in(
        &mut self,
        a: AtomId,
        b: AtomId,
        direction: Direction,
    ) -> Result<Option<Bond>, Error> {
        let expected = self.atom(a)?.position.direction_to(self.atom(b)?.position)?;
        if expected != direction {
            return Err(Error::DirectionMismatch {
                expected,
                given: direction,
            });
        }
        self.bond_toward(a, b, direction)
    }

    /// Weakens the bond between `a` and `b` by one, clearing both slots when
    /// it drops below strength one. Returns the remaining bond, if any.
    pub fn remove_bond(&mut self, a: AtomId, b: AtomId) -> Result<Option<Bond>, Error> {
        let direction = self.atom(a)?.position.direction_to(self.atom(b)?.position)?;
        let opposite = direction.opposite().ok_or(Error::ContinueProjection)?;

        let Some(existing) = self.atom(a)?.bond(direction) else {
            return Ok(None);
        };
        if !existing.contains(b) {
            return Err(Error::NotAnEndpoint { atom: b });
        }

        let weakened = existing.weaken();
        self.write_bond(a, b, direction, opposite, weakened);
        Ok(weakened)
    }

    /// Moves every atom of the molecule containing `id` one cell.
    pub fn translate(&mut self, id: AtomId, direction: Direction) -> Result<(), Error> {
        if direction.is_continue() {
            return Err(Error::ContinueProjection);
        }
        let members = self.molecule(id)?.atoms().to_vec();
        for member in members {
            if let Some(atom) = self.atoms.get_mut(member) {
                atom.position = atom.position.project(direction)?;
            }
        }
        Ok(())
    }

    /// Copies the molecule containing `seed` out of `source` into this graph.
    ///
    /// Returns the handle of the copied seed atom. Atoms of `source` that are
    /// not bond-reachable from `seed` are left behind.
    pub fn absorb(&mut self, source: &AtomGraph, seed: AtomId) -> Result<AtomId, Error> {
        let members = source.molecule(seed)?.atoms();

        let mut remap: HashMap<AtomId, AtomId> = HashMap::with_capacity(members.len());
        for &old in members {
            let atom = source.atom(old)?;
            let new = self.atoms.insert(Atom::new(atom.element, atom.position));
            remap.insert(old, new);
        }

        for &old in members {
            let atom = source.atom(old)?;
            let new = *remap.get(&old).ok_or(Error::UnknownAtom(old))?;
            for (direction, bond) in atom.bonds() {
                let (first, second) = bond.endpoints();
                let (Some(&first), Some(&second)) = (remap.get(&first), remap.get(&second))
                else {
                    continue;
                };
                let copy = Bond::with_strength(first, second, bond.strength());
                if let Some(target) = self.atoms.get_mut(new) {
                    target.set_bond(direction, Some(copy));
                }
            }
        }

        self.reindex();
        remap.get(&seed).copied().ok_or(Error::UnknownAtom(seed))
    }

    fn bond_toward(
        &mut self,
        a: AtomId,
        b: AtomId,
        direction: Direction,
    ) -> Result<Option<Bond>, Error> {
        let opposite = direction.opposite().ok_or(Error::ContinueProjection)?;
        let first = self.atom(a)?;
        let second = self.atom(b)?;

        if let Some(facing) = second.bond(opposite) {
            if !facing.contains(a) {
                return Err(Error::SlotOccupied {
                    atom: b,
                    direction: opposite,
                });
            }
        }

        let spare = first.spare_capacity().min(second.spare_capacity());
        let updated = match first.bond(direction) {
            None if spare == 0 => return Ok(None),
            None => Bond::new(a, b),
            Some(existing) if !existing.contains(b) => {
                return Err(Error::SlotOccupied { atom: a, direction });
            }
            Some(existing) => {
                let strengthened = existing.strengthen(existing.strength() + spare);
                if strengthened == existing {
                    return Ok(Some(existing));
                }
                strengthened
            }
        };

        self.write_bond(a, b, direction, opposite, Some(updated));
        Ok(Some(updated))
    }

    fn write_bond(
        &mut self,
        a: AtomId,
        b: AtomId,
        direction: Direction,
        opposite: Direction,
        bond: Option<Bond>,
    ) {
        if let Some(atom) = self.atoms.get_mut(a) {
            atom.set_bond(direction, bond);
        }
        if let Some(atom) = self.atoms.get_mut(b) {
            atom.set_bond(opposite, bond);
        }
        self.reindex();
    }

    fn reindex(&mut self) {
        self.membership.clear();
        self.molecules.clear();

        let ids: Vec<AtomId> = self.atoms.keys().collect();
        for id in ids {
            if self.membership.contains_key(id) {
                continue;
            }
            let index = self.molecules.len();
            let members = reachable(&self.atoms, id);
            for member in &members {
                self.membership.insert(*member, index);
            }
            self.molecules
                .push(Molecule::from_members(&self.atoms, members));
        }
    }
}

/// Breadth-first closure over bonds, starting at `start`.
fn reachable(atoms: &SlotMap<AtomId, Atom>, start: AtomId) -> Vec<AtomId> {
    let mut visited = HashSet::from([start]);
    let mut order = vec![start];
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let Some(atom) = atoms.get(current) else {
            continue;
        };
        for (_, bond) in atom.bonds() {
            let Ok(next) = bond.other(current) else {
                continue;
            };
            if atoms.contains_key(next) && visited.insert(next) {
                order.push(next);
                queue.push_back(next);
            }
        }
    }

    order
}
