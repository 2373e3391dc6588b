use crate::model::atom::AtomId;
use crate::model::error::Error as ModelError;
use crate::model::geometry::{Point, Rectangle};
use crate::model::graph::AtomGraph;
use crate::model::molecule::Molecule;

/// The live population of atoms inside a reactor.
///
/// At most one atom occupies a cell while molecules enter through
/// [`add`](AtomManager::add); the check is made against every cell of the
/// incoming molecule before any atom is inserted.
#[derive(Debug, Clone, Default)]
pub struct AtomManager {
    graph: AtomGraph,
}

impl AtomManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &AtomGraph {
        &self.graph
    }

    pub(crate) fn graph_mut(&mut self) -> &mut AtomGraph {
        &mut self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Copies the molecule containing `seed` out of `source`.
    ///
    /// Returns the handle of the copied seed, or `None` without changing
    /// anything when any of its cells is already occupied.
    pub fn add(
        &mut self,
        source: &AtomGraph,
        seed: AtomId,
    ) -> Result<Option<AtomId>, ModelError> {
        let positions = source.molecule_positions(seed)?;
        if positions.iter().any(|p| self.is_atom_at_position(*p)) {
            return Ok(None);
        }
        self.graph.absorb(source, seed).map(Some)
    }

    pub fn get_atom_at_position(&self, position: Point) -> Option<AtomId> {
        self.graph.atom_at(position)
    }

    pub fn is_atom_at_position(&self, position: Point) -> bool {
        self.get_atom_at_position(position).is_some()
    }

    /// Molecules lying entirely inside `bound`.
    pub fn molecules_in_bounds(&self, bound: &Rectangle) -> Vec<&Molecule> {
        self.graph
            .molecules()
            .filter(|molecule| bound.contains_all(self.graph.positions(molecule)))
            .collect()
    }

    /// Removes the first molecule wholly inside `bound` that equals `target`.
    ///
    /// Returns the removed atom handles, or `None` when nothing matched.
    pub fn remove_target_output(
        &mut self,
        target: &Molecule,
        bound: &Rectangle,
    ) -> Result<Option<Vec<AtomId>>, ModelError> {
        let found = self
            .molecules_in_bounds(bound)
            .into_iter()
            .find(|molecule| *molecule == target)
            .and_then(|molecule| molecule.atoms().first().copied());

        match found {
            Some(seed) => self.graph.remove_molecule(seed).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Element;

    fn hydroxide_at(x: i32, y: i32) -> (AtomGraph, AtomId) {
        let mut graph = AtomGraph::new();
        let h = graph.insert(Element::H, Point::new(x, y));
        let o = graph.insert(Element::O, Point::new(x, y + 1));
        graph.add_bond(h, o).unwrap();
        (graph, h)
    }

    #[test]
    fn add_inserts_the_whole_molecule() {
        let mut manager = AtomManager::new();
        let (source, seed) = hydroxide_at(2, 2);
        let id = manager.add(&source, seed).unwrap().unwrap();

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get_atom_at_position(Point::new(2, 2)), Some(id));
        assert!(manager.is_atom_at_position(Point::new(2, 3)));
        assert!(!manager.is_atom_at_position(Point::new(2, 4)));
    }

    #[test]
    fn add_is_all_or_nothing_on_overlap() {
        let mut manager = AtomManager::new();
        let (source, seed) = hydroxide_at(2, 2);
        manager.add(&source, seed).unwrap();

        let (shifted, seed) = hydroxide_at(2, 3);
        assert_eq!(manager.add(&shifted, seed).unwrap(), None);
        assert_eq!(manager.len(), 2);
        assert!(!manager.is_atom_at_position(Point::new(2, 4)));
    }

    #[test]
    fn remove_target_output_only_takes_matching_molecule_in_zone() {
        let mut manager = AtomManager::new();
        let (first, seed) = hydroxide_at(7, 1);
        manager.add(&first, seed).unwrap();
        let (second, seed) = hydroxide_at(1, 1);
        manager.add(&second, seed).unwrap();

        let zone = Rectangle::new(6, 0, 4, 4).unwrap();
        let target = first.molecule(seed).unwrap().clone();

        let mut lone = AtomGraph::new();
        let hydrogen = lone.insert(Element::H, Point::new(0, 0));
        let wrong = lone.molecule(hydrogen).unwrap().clone();
        assert_eq!(manager.remove_target_output(&wrong, &zone).unwrap(), None);

        let removed = manager.remove_target_output(&target, &zone).unwrap().unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(manager.len(), 2);
        assert!(!manager.is_atom_at_position(Point::new(7, 1)));
        assert!(manager.is_atom_at_position(Point::new(1, 1)));

        assert_eq!(manager.remove_target_output(&target, &zone).unwrap(), None);
    }

    #[test]
    fn molecule_straddling_the_zone_is_not_in_bounds() {
        let mut manager = AtomManager::new();
        let (source, seed) = hydroxide_at(6, 3);
        manager.add(&source, seed).unwrap();
        let zone = Rectangle::new(6, 0, 4, 4).unwrap();
        assert!(manager.molecules_in_bounds(&zone).is_empty());
    }
}
