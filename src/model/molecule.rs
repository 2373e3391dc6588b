use super::atom::{Atom, AtomId};
use slotmap::SlotMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A bond-connected component of atoms, compared by structure.
///
/// Equality and hashing use the sorted multiset of per-atom signatures, so
/// two molecules compare equal regardless of position, orientation, or which
/// member they were reached from. The signature is coarse: two different
/// connectivities whose atoms have identical neighbourhoods (for example a
/// four-nitrogen ring and a branched chain with the same per-atom bond lists)
/// are indistinguishable.
#[derive(Debug, Clone)]
pub struct Molecule {
    atoms: Vec<AtomId>,
    signature: Vec<String>,
}

impl Molecule {
    pub(crate) fn from_members(arena: &SlotMap<AtomId, Atom>, atoms: Vec<AtomId>) -> Self {
        let mut signature: Vec<String> = atoms
            .iter()
            .filter_map(|id| atom_signature(arena, *id))
            .collect();
        signature.sort();
        Self { atoms, signature }
    }

    #[inline]
    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
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
    pub fn contains(&self, atom: AtomId) -> bool {
        self.atoms.contains(&atom)
    }

    #[inline]
    pub fn signature(&self) -> &[String] {
        &self.signature
    }
}

/// `element` alone, or `element-` followed by the sorted
/// `neighbourElement + strength` entries of every bond.
pub(crate) fn atom_signature(arena: &SlotMap<AtomId, Atom>, id: AtomId) -> Option<String> {
    let atom = arena.get(id)?;
    let mut bonds: Vec<String> = atom
        .bonds()
        .filter_map(|(_, bond)| {
            let other = bond.other(id).ok()?;
            let neighbour = arena.get(other)?;
            Some(format!("{}{}", neighbour.element.symbol(), bond.strength()))
        })
        .collect();
    bonds.sort();

    let mut name = atom.element.symbol().to_string();
    if !bonds.is_empty() {
        name.push('-');
        name.push_str(&bonds.concat());
    }
    Some(name)
}

impl PartialEq for Molecule {
    fn eq(&self, other: &Self) -> bool {
        self.signature == other.signature
    }
}

impl Eq for Molecule {}

impl Hash for Molecule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signature.hash(state);
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.signature {
            write!(f, "[{}]", entry)?;
        }
        Ok(())
    }
}
