use super::reactor::WaldoStart;
use super::types::WaldoType;
use crate::model::atom::AtomId;
use crate::model::error::Error as ModelError;
use crate::model::geometry::{Direction, Point, Rectangle};
use crate::model::graph::AtomGraph;
use tracing::trace;

/// A manipulator that walks the reactor grid and may hold one molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waldo {
    kind: WaldoType,
    position: Point,
    heading: Direction,
    held: Option<AtomId>,
    bound: Rectangle,
}

impl Waldo {
    pub fn new(kind: WaldoType, start: WaldoStart, bound: Rectangle) -> Self {
        Self {
            kind,
            position: start.position,
            heading: start.direction,
            held: None,
            bound,
        }
    }

    #[inline]
    pub fn kind(&self) -> WaldoType {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// The atom this waldo grips; the held molecule is that atom's molecule.
    #[inline]
    pub fn held(&self) -> Option<AtomId> {
        self.held
    }

    #[inline]
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Sets the heading. `Continue` leaves it unchanged.
    pub fn set_heading(&mut self, direction: Direction) {
        if !direction.is_continue() {
            self.heading = direction;
        }
    }

    pub fn grab(&mut self, atom: AtomId) {
        self.held = Some(atom);
    }

    pub fn release(&mut self) -> Option<AtomId> {
        self.held.take()
    }

    /// The cell one step ahead along the current heading.
    pub fn projected_position(&self) -> Point {
        self.position.project(self.heading).unwrap_or(self.position)
    }

    pub fn is_projected_out_of_bounds(&self) -> bool {
        !self.bound.contains(self.projected_position())
    }

    /// Moves one cell along the heading, dragging the held molecule along.
    ///
    /// A waldo facing the reactor wall stays put. A grip on an atom that no
    /// longer exists in `graph` is dropped first. Returns whether the waldo
    /// moved.
    pub fn step(&mut self, graph: &mut AtomGraph) -> Result<bool, ModelError> {
        if let Some(atom) = self.held {
            if !graph.contains(atom) {
                self.held = None;
            }
        }

        if self.is_projected_out_of_bounds() {
            trace!(waldo = %self.kind, position = %self.position, "waldo blocked by wall");
            return Ok(false);
        }

        self.position = self.position.project(self.heading)?;
        if let Some(atom) = self.held {
            graph.translate(atom, self.heading)?;
        }
        trace!(
            waldo = %self.kind,
            position = %self.position,
            heading = %self.heading,
            holding = self.held.is_some(),
            "waldo moved"
        );
        Ok(true)
    }

    /// Positions of every atom in the held molecule, or nothing when empty
    /// handed.
    pub fn held_positions(&self, graph: &AtomGraph) -> Vec<Point> {
        self.held
            .and_then(|atom| graph.molecule_positions(atom).ok())
            .unwrap_or_default()
    }

    /// Whether the waldo and every held atom lie inside the reactor.
    pub fn is_in_legal_state(&self, graph: &AtomGraph) -> bool {
        self.bound.contains(self.position)
            && self.bound.contains_all(self.held_positions(graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Element;

    fn bound() -> Rectangle {
        Rectangle::new(0, 0, 10, 8).unwrap()
    }

    fn waldo_at(x: i32, y: i32, direction: Direction) -> Waldo {
        Waldo::new(
            WaldoType::Alpha,
            WaldoStart {
                position: Point::new(x, y),
                direction,
            },
            bound(),
        )
    }

    #[test]
    fn continue_keeps_heading() {
        let mut waldo = waldo_at(5, 5, Direction::Left);
        waldo.set_heading(Direction::Continue);
        assert_eq!(waldo.heading(), Direction::Left);
        waldo.set_heading(Direction::Up);
        assert_eq!(waldo.heading(), Direction::Up);
    }

    #[test]
    fn walks_until_the_wall() {
        let mut graph = AtomGraph::new();
        let mut waldo = waldo_at(2, 5, Direction::Left);
        assert!(waldo.step(&mut graph).unwrap());
        assert!(waldo.step(&mut graph).unwrap());
        assert_eq!(waldo.position(), Point::new(0, 5));
        assert!(waldo.is_projected_out_of_bounds());
        assert!(!waldo.step(&mut graph).unwrap());
        assert_eq!(waldo.position(), Point::new(0, 5));
    }

    #[test]
    fn held_molecule_moves_with_the_waldo() {
        let mut graph = AtomGraph::new();
        let h = graph.insert(Element::H, Point::new(3, 3));
        let o = graph.insert(Element::O, Point::new(3, 4));
        graph.add_bond(h, o).unwrap();

        let mut waldo = waldo_at(3, 3, Direction::Right);
        waldo.grab(h);
        waldo.step(&mut graph).unwrap();

        assert_eq!(waldo.position(), Point::new(4, 3));
        let mut positions = waldo.held_positions(&graph);
        positions.sort();
        assert_eq!(positions, vec![Point::new(4, 3), Point::new(4, 4)]);
        assert!(waldo.is_in_legal_state(&graph));
    }

    #[test]
    fn stale_grip_is_dropped() {
        let mut graph = AtomGraph::new();
        let h = graph.insert(Element::H, Point::new(3, 3));
        let mut waldo = waldo_at(3, 3, Direction::Down);
        waldo.grab(h);
        graph.remove(h).unwrap();

        waldo.step(&mut graph).unwrap();
        assert!(!waldo.is_holding());
        assert!(waldo.held_positions(&graph).is_empty());
    }

    #[test]
    fn release_returns_the_grip() {
        let mut graph = AtomGraph::new();
        let h = graph.insert(Element::H, Point::new(1, 1));
        let mut waldo = waldo_at(1, 1, Direction::Down);
        waldo.grab(h);
        assert_eq!(waldo.release(), Some(h));
        assert_eq!(waldo.release(), None);
    }
}
