use super::atom_manager::AtomManager;
use super::config::{CollisionRule, SimulationConfig};
use super::error::Error;
use super::reactor::Reactor;
use super::types::{ByWaldo, Instruction, WaldoType};
use super::waldo::Waldo;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Why a waldo stopped the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HaltReason {
    Collision,
    InputBlocked,
    NoInputAvailable,
    OutputMismatch,
    NoOutputTarget,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HaltReason::Collision => write!(f, "collision"),
            HaltReason::InputBlocked => write!(f, "input blocked by an existing atom"),
            HaltReason::NoInputAvailable => write!(f, "no input molecule configured"),
            HaltReason::OutputMismatch => write!(f, "no matching molecule in the output zone"),
            HaltReason::NoOutputTarget => write!(f, "no output target configured"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Halted { waldo: WaldoType, reason: HaltReason },
}

impl StepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed)
    }

    pub fn halt_reason(&self) -> Option<HaltReason> {
        match self {
            StepOutcome::Completed => None,
            StepOutcome::Halted { reason, .. } => Some(*reason),
        }
    }
}

/// The mutable state of one simulation run over a shared [`Reactor`].
///
/// Each cycle steps the active waldos in order (alpha first). A waldo step
/// moves the waldo one cell along its heading, checks for a collision,
/// executes the instruction on its new tile for its type, and on success
/// adopts the tile's arrow as its new heading. The first waldo step that
/// halts ends the cycle; the cycle counter only advances on fully completed
/// cycles.
#[derive(Debug, Clone)]
pub struct GameState {
    reactor: Arc<Reactor>,
    config: SimulationConfig,
    waldos: ByWaldo<Waldo>,
    atoms: AtomManager,
    cycles: u64,
    delivered: ByWaldo<u32>,
    rng: SmallRng,
}

impl GameState {
    pub fn new(reactor: Arc<Reactor>) -> Self {
        Self::with_config(reactor, SimulationConfig::default())
    }

    pub fn with_config(reactor: Arc<Reactor>, config: SimulationConfig) -> Self {
        let waldos = initial_waldos(&reactor);
        let rng = SmallRng::seed_from_u64(config.effective_seed());
        Self {
            reactor,
            config,
            waldos,
            atoms: AtomManager::new(),
            cycles: 0,
            delivered: ByWaldo::default(),
            rng,
        }
    }

    pub fn reactor(&self) -> &Reactor {
        &self.reactor
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn waldo(&self, kind: WaldoType) -> &Waldo {
        &self.waldos[kind]
    }

    pub fn alpha(&self) -> &Waldo {
        &self.waldos.alpha
    }

    pub fn beta(&self) -> &Waldo {
        &self.waldos.beta
    }

    pub fn atoms(&self) -> &AtomManager {
        &self.atoms
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn has_started(&self) -> bool {
        self.cycles > 0
    }

    pub fn delivered(&self, kind: WaldoType) -> u32 {
        self.delivered[kind]
    }

    /// Whether every configured output has reached its target count.
    ///
    /// A reactor without any outputs is never complete.
    pub fn is_complete(&self) -> bool {
        let mut any = false;
        for kind in WaldoType::ALL {
            if let Some(output) = self.reactor.output(kind) {
                any = true;
                if self.delivered[kind] < output.target {
                    return false;
                }
            }
        }
        any
    }

    pub fn reset(&mut self) {
        self.waldos = initial_waldos(&self.reactor);
        self.atoms = AtomManager::new();
        self.cycles = 0;
        self.delivered = ByWaldo::default();
        self.rng = SmallRng::seed_from_u64(self.config.effective_seed());
        debug!("simulation reset");
    }

    /// Runs one cycle.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] only for contract violations, which a reactor
    /// built through [`Reactor::new`] does not produce.
    pub fn step(&mut self) -> Result<StepOutcome, Error> {
        for &kind in self.config.active() {
            if let Some(reason) = self.step_waldo(kind)? {
                debug!(
                    cycle = self.cycles,
                    waldo = %kind,
                    position = %self.waldos[kind].position(),
                    reason = %reason,
                    "simulation halted"
                );
                return Ok(StepOutcome::Halted {
                    waldo: kind,
                    reason,
                });
            }
        }
        self.cycles += 1;
        Ok(StepOutcome::Completed)
    }

    /// Runs up to `cycles` cycles, stopping at the first halt.
    pub fn step_n(&mut self, cycles: u64) -> Result<StepOutcome, Error> {
        for _ in 0..cycles {
            let outcome = self.step()?;
            if !outcome.is_completed() {
                return Ok(outcome);
            }
        }
        Ok(StepOutcome::Completed)
    }

    fn step_waldo(&mut self, kind: WaldoType) -> Result<Option<HaltReason>, Error> {
        self.waldos[kind].step(self.atoms.graph_mut())?;

        if self.is_collision(kind) {
            return Ok(Some(HaltReason::Collision));
        }

        let position = self.waldos[kind].position();
        let (direction, instruction) = self.reactor.tile(position)?.commands(kind);
        debug!(
            cycle = self.cycles,
            waldo = %kind,
            position = %position,
            instruction = %instruction,
            "executing"
        );

        let halt = self.execute(kind, instruction)?;
        if halt.is_none() {
            self.waldos[kind].set_heading(direction);
        }
        Ok(halt)
    }

    fn is_collision(&self, kind: WaldoType) -> bool {
        let waldo = &self.waldos[kind];
        let Some(held) = waldo.held() else {
            return false;
        };
        let graph = self.atoms.graph();
        let Ok(own) = graph.molecule(held) else {
            return false;
        };
        let position = waldo.position();

        let foreign_atom = graph
            .iter()
            .any(|(id, atom)| atom.position == position && !own.contains(id));

        let other = &self.waldos[kind.other()];
        let shares_molecule = other.held().is_some_and(|atom| own.contains(atom));
        let inside_other = !shares_molecule && other.held_positions(graph).contains(&position);

        match self.config.collision_rule {
            CollisionRule::Either => foreign_atom || inside_other,
            CollisionRule::Both => foreign_atom && inside_other,
        }
    }

    fn execute(
        &mut self,
        kind: WaldoType,
        instruction: Instruction,
    ) -> Result<Option<HaltReason>, Error> {
        match instruction {
            Instruction::InAlpha => self.input(WaldoType::Alpha),
            Instruction::InBeta => self.input(WaldoType::Beta),
            Instruction::OutAlpha => self.output(WaldoType::Alpha),
            Instruction::OutBeta => self.output(WaldoType::Beta),
            Instruction::Grab => {
                self.grab(kind);
                Ok(None)
            }
            Instruction::Drop => {
                self.release(kind);
                Ok(None)
            }
            Instruction::GrabDrop => {
                if self.waldos[kind].is_holding() {
                    self.release(kind);
                } else {
                    self.grab(kind);
                }
                Ok(None)
            }
            Instruction::Sync
            | Instruction::AddBond
            | Instruction::RemoveBond
            | Instruction::RotateClockwise
            | Instruction::RotateCounterClockwise
            | Instruction::Empty => Ok(None),
        }
    }

    fn input(&mut self, zone: WaldoType) -> Result<Option<HaltReason>, Error> {
        let factory = self.reactor.input_factory(zone);
        let Some(blueprint) = factory.choose(self.config.input_selection, &mut self.rng) else {
            return Ok(Some(HaltReason::NoInputAvailable));
        };
        let (scratch, seed) =
            blueprint
                .instantiate()
                .map_err(|source| Error::InvalidBlueprint {
                    waldo: zone,
                    role: "input",
                    source,
                })?;

        match self.atoms.add(&scratch, seed)? {
            Some(_) => {
                debug!(zone = %zone, molecule = %blueprint.molecule(), "input molecule placed");
                Ok(None)
            }
            None => Ok(Some(HaltReason::InputBlocked)),
        }
    }

    fn output(&mut self, zone: WaldoType) -> Result<Option<HaltReason>, Error> {
        let Some(output) = self.reactor.output(zone) else {
            return Ok(Some(HaltReason::NoOutputTarget));
        };
        let rect = self.reactor.layout().output(zone);

        let Some(removed) = self.atoms.remove_target_output(output.expected(), &rect)? else {
            return Ok(Some(HaltReason::OutputMismatch));
        };

        for kind in WaldoType::ALL {
            let waldo = &mut self.waldos[kind];
            if waldo.held().is_some_and(|atom| removed.contains(&atom)) {
                waldo.release();
            }
        }
        self.delivered[zone] += 1;
        debug!(
            zone = %zone,
            delivered = self.delivered[zone],
            target = output.target,
            "output molecule accepted"
        );
        Ok(None)
    }

    fn grab(&mut self, kind: WaldoType) {
        let waldo = &mut self.waldos[kind];
        if waldo.is_holding() {
            return;
        }
        if let Some(atom) = self.atoms.get_atom_at_position(waldo.position()) {
            waldo.grab(atom);
            trace!(waldo = %kind, position = %waldo.position(), "grabbed");
        }
    }

    fn release(&mut self, kind: WaldoType) {
        if self.waldos[kind].release().is_some() {
            trace!(waldo = %kind, position = %self.waldos[kind].position(), "dropped");
        }
    }
}

fn initial_waldos(reactor: &Reactor) -> ByWaldo<Waldo> {
    let waldo = |kind| Waldo::new(kind, reactor.start(kind), reactor.bound());
    ByWaldo::new(waldo(WaldoType::Alpha), waldo(WaldoType::Beta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geometry::{Direction, Point};
    use crate::model::types::Element;
    use crate::sim::blueprint::{AtomSpec, BondSpec};
    use crate::sim::config::ActiveWaldos;
    use crate::sim::reactor::{
        InputDescription, MoleculeDescription, OutputDescription, ReactorDescription,
        TileOverride, WaldoStart,
    };

    fn start(x: i32, y: i32, direction: Direction) -> WaldoStart {
        WaldoStart {
            position: Point::new(x, y),
            direction,
        }
    }

    fn command(
        x: i32,
        y: i32,
        waldo: WaldoType,
        instruction: Instruction,
        direction: Direction,
    ) -> TileOverride {
        TileOverride {
            position: Point::new(x, y),
            waldo,
            instruction,
            direction,
            bonder: false,
        }
    }

    fn single(element: Element, x: i32, y: i32) -> MoleculeDescription {
        MoleculeDescription {
            atoms: vec![AtomSpec {
                position: Point::new(x, y),
                element,
            }],
            bonds: vec![],
        }
    }

    fn hydroxide(x: i32, y: i32) -> MoleculeDescription {
        MoleculeDescription {
            atoms: vec![
                AtomSpec {
                    position: Point::new(x, y),
                    element: Element::H,
                },
                AtomSpec {
                    position: Point::new(x, y + 1),
                    element: Element::O,
                },
            ],
            bonds: vec![BondSpec {
                from: Point::new(x, y),
                to: Point::new(x, y + 1),
                strength: 1,
            }],
        }
    }

    fn parked_beta() -> WaldoStart {
        start(5, 7, Direction::Down)
    }

    fn base(alpha: WaldoStart, tiles: Vec<TileOverride>) -> ReactorDescription {
        ReactorDescription {
            width: 10,
            height: 8,
            starts: ByWaldo::new(alpha, parked_beta()),
            tiles,
            inputs: ByWaldo::new(
                vec![InputDescription {
                    probability: 1.0,
                    molecule: hydroxide(1, 1),
                }],
                vec![],
            ),
            outputs: ByWaldo::new(
                Some(OutputDescription {
                    target: 2,
                    molecule: hydroxide(7, 1),
                }),
                None,
            ),
        }
    }

    fn state(description: ReactorDescription) -> GameState {
        GameState::new(Arc::new(Reactor::new(description).unwrap()))
    }

    #[test]
    fn fresh_state_is_at_the_starts() {
        let game = state(base(start(5, 5, Direction::Left), vec![]));
        assert_eq!(game.alpha().position(), Point::new(5, 5));
        assert_eq!(game.beta().position(), Point::new(5, 7));
        assert_eq!(game.cycles(), 0);
        assert!(!game.has_started());
        assert!(game.atoms().is_empty());
    }

    #[test]
    fn cycle_counter_advances_only_on_completed_cycles() {
        let mut game = state(base(start(5, 5, Direction::Left), vec![]));
        assert_eq!(game.step_n(3).unwrap(), StepOutcome::Completed);
        assert_eq!(game.cycles(), 3);
        assert!(game.has_started());
        assert_eq!(game.alpha().position(), Point::new(2, 5));
        assert_eq!(game.beta().position(), Point::new(5, 7));
    }

    #[test]
    fn arrow_is_adopted_after_the_instruction() {
        let tiles = vec![command(4, 5, WaldoType::Alpha, Instruction::Empty, Direction::Up)];
        let mut game = state(base(start(5, 5, Direction::Left), tiles));
        game.step().unwrap();
        assert_eq!(game.alpha().heading(), Direction::Up);
        game.step().unwrap();
        assert_eq!(game.alpha().position(), Point::new(4, 4));
    }

    #[test]
    fn commands_for_the_other_waldo_are_ignored() {
        let tiles = vec![command(4, 5, WaldoType::Beta, Instruction::InAlpha, Direction::Up)];
        let mut game = state(base(start(5, 5, Direction::Left), tiles));
        game.step().unwrap();
        assert_eq!(game.alpha().heading(), Direction::Left);
        assert!(game.atoms().is_empty());
    }

    #[test]
    fn input_grab_and_deliver() {
        // Alpha picks up the hydroxide at (1,1), carries it right along row 1,
        // and drops it into the alpha output zone.
        let tiles = vec![
            command(1, 0, WaldoType::Alpha, Instruction::InAlpha, Direction::Down),
            command(1, 1, WaldoType::Alpha, Instruction::Grab, Direction::Right),
            command(7, 1, WaldoType::Alpha, Instruction::Drop, Direction::Continue),
            command(8, 1, WaldoType::Alpha, Instruction::OutAlpha, Direction::Left),
        ];
        let mut game = state(base(start(0, 0, Direction::Right), tiles));

        game.step().unwrap();
        assert_eq!(game.atoms().len(), 2);
        game.step().unwrap();
        assert!(game.alpha().is_holding());

        assert_eq!(game.step_n(6).unwrap(), StepOutcome::Completed);
        assert!(!game.alpha().is_holding());
        assert!(game.atoms().is_atom_at_position(Point::new(7, 1)));

        game.step().unwrap();
        assert_eq!(game.alpha().position(), Point::new(8, 1));
        assert_eq!(game.delivered(WaldoType::Alpha), 1);
        assert!(game.atoms().is_empty());
        assert!(!game.is_complete());
    }

    #[test]
    fn blocked_input_halts_without_changing_atoms() {
        let tiles = vec![
            command(4, 5, WaldoType::Alpha, Instruction::InAlpha, Direction::Right),
            command(6, 5, WaldoType::Alpha, Instruction::Empty, Direction::Left),
        ];
        let mut game = state(base(start(5, 5, Direction::Left), tiles));
        assert_eq!(game.step_n(4).unwrap(), StepOutcome::Completed);
        assert_eq!(game.atoms().len(), 2);

        let outcome = game.step().unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Halted {
                waldo: WaldoType::Alpha,
                reason: HaltReason::InputBlocked
            }
        );
        assert_eq!(game.atoms().len(), 2);
        assert_eq!(game.cycles(), 4);
        assert_eq!(game.alpha().position(), Point::new(4, 5));
        assert_eq!(game.alpha().heading(), Direction::Left);
    }

    #[test]
    fn missing_input_and_output_halt() {
        let tiles = vec![command(4, 5, WaldoType::Alpha, Instruction::InBeta, Direction::Continue)];
        let mut game = state(base(start(5, 5, Direction::Left), tiles));
        assert_eq!(
            game.step().unwrap().halt_reason(),
            Some(HaltReason::NoInputAvailable)
        );

        let tiles = vec![command(4, 5, WaldoType::Alpha, Instruction::OutBeta, Direction::Continue)];
        let mut game = state(base(start(5, 5, Direction::Left), tiles));
        assert_eq!(
            game.step().unwrap().halt_reason(),
            Some(HaltReason::NoOutputTarget)
        );

        let tiles = vec![command(4, 5, WaldoType::Alpha, Instruction::OutAlpha, Direction::Continue)];
        let mut game = state(base(start(5, 5, Direction::Left), tiles));
        assert_eq!(
            game.step().unwrap().halt_reason(),
            Some(HaltReason::OutputMismatch)
        );
    }

    /// Two single hydrogens arrive on column 1; alpha grabs the first and
    /// pushes it back up into the second.
    fn pushing_reactor() -> ReactorDescription {
        let mut description = base(
            start(3, 1, Direction::Left),
            vec![
                command(2, 1, WaldoType::Alpha, Instruction::InAlpha, Direction::Continue),
                command(1, 1, WaldoType::Alpha, Instruction::Grab, Direction::Down),
                command(1, 2, WaldoType::Alpha, Instruction::InAlpha, Direction::Up),
            ],
        );
        description.inputs.alpha = vec![InputDescription {
            probability: 1.0,
            molecule: single(Element::H, 1, 1),
        }];
        description
    }

    #[test]
    fn carrying_into_a_foreign_atom_collides() {
        let mut game = state(pushing_reactor());

        assert!(game.step().unwrap().is_completed());
        assert!(game.step().unwrap().is_completed());
        assert!(game.alpha().is_holding());

        // Moving down drags the held hydrogen to (1,2); the tile there places a
        // new hydrogen at (1,1) and turns alpha back up, into that new atom.
        assert!(game.step().unwrap().is_completed());
        assert_eq!(game.atoms().len(), 2);
        assert_eq!(
            game.step().unwrap(),
            StepOutcome::Halted {
                waldo: WaldoType::Alpha,
                reason: HaltReason::Collision
            }
        );
        assert_eq!(game.cycles(), 3);
    }

    #[test]
    fn conjunctive_rule_ignores_loose_atoms() {
        let config = SimulationConfig {
            collision_rule: CollisionRule::Both,
            ..Default::default()
        };
        let reactor = Arc::new(Reactor::new(pushing_reactor()).unwrap());
        let mut game = GameState::with_config(reactor, config);
        assert_eq!(game.step_n(4).unwrap(), StepOutcome::Completed);
        assert_eq!(game.alpha().position(), Point::new(1, 1));
    }

    // Alpha and beta each fetch a single hydrogen and grab it on adjacent
    // cells, then alpha turns down into beta's cell.
    fn crossing_reactor(beta_grabs: bool) -> ReactorDescription {
        let beta_instruction = if beta_grabs {
            Instruction::Grab
        } else {
            Instruction::Empty
        };
        let mut description = base(
            start(3, 3, Direction::Left),
            vec![
                command(2, 3, WaldoType::Alpha, Instruction::InAlpha, Direction::Continue),
                command(1, 3, WaldoType::Alpha, Instruction::Grab, Direction::Down),
                command(2, 4, WaldoType::Beta, Instruction::InBeta, Direction::Continue),
                command(1, 4, WaldoType::Beta, beta_instruction, Direction::Continue),
            ],
        );
        description.starts.beta = start(3, 4, Direction::Left);
        description.inputs = ByWaldo::new(
            vec![InputDescription {
                probability: 1.0,
                molecule: single(Element::H, 1, 3),
            }],
            vec![InputDescription {
                probability: 1.0,
                molecule: single(Element::H, 1, 4),
            }],
        );
        description
    }

    fn with_rule(description: ReactorDescription, rule: CollisionRule) -> GameState {
        let config = SimulationConfig {
            collision_rule: rule,
            ..Default::default()
        };
        GameState::with_config(Arc::new(Reactor::new(description).unwrap()), config)
    }

    #[test]
    fn moving_into_the_other_held_molecule_collides() {
        let mut game = with_rule(crossing_reactor(true), CollisionRule::Either);

        assert_eq!(game.step_n(2).unwrap(), StepOutcome::Completed);
        assert!(game.alpha().is_holding());
        assert!(game.beta().is_holding());
        assert_eq!(game.beta().position(), Point::new(1, 4));

        assert_eq!(
            game.step().unwrap(),
            StepOutcome::Halted {
                waldo: WaldoType::Alpha,
                reason: HaltReason::Collision
            }
        );
        assert_eq!(game.alpha().position(), Point::new(1, 4));
        assert_eq!(game.cycles(), 2);
    }

    #[test]
    fn conjunctive_rule_halts_inside_the_other_held_molecule() {
        let mut game = with_rule(crossing_reactor(true), CollisionRule::Both);
        assert_eq!(game.step_n(2).unwrap(), StepOutcome::Completed);
        assert_eq!(
            game.step().unwrap(),
            StepOutcome::Halted {
                waldo: WaldoType::Alpha,
                reason: HaltReason::Collision
            }
        );

        // The same hydrogen left loose under beta is only a foreign atom.
        let mut game = with_rule(crossing_reactor(false), CollisionRule::Both);
        assert_eq!(game.step_n(3).unwrap(), StepOutcome::Completed);
        assert!(!game.beta().is_holding());
        assert_eq!(game.alpha().position(), Point::new(1, 4));
    }

    #[test]
    fn waldos_sharing_a_molecule_do_not_collide() {
        // Alpha grips the hydrogen and parks against the top wall; beta grips
        // the oxygen below it and drags the whole molecule to the right.
        let mut description = base(
            start(2, 0, Direction::Left),
            vec![
                command(1, 0, WaldoType::Alpha, Instruction::InAlpha, Direction::Left),
                command(0, 0, WaldoType::Alpha, Instruction::Grab, Direction::Up),
                command(0, 1, WaldoType::Beta, Instruction::Grab, Direction::Right),
            ],
        );
        description.starts.beta = start(0, 3, Direction::Up);
        description.inputs.alpha[0].molecule = hydroxide(0, 0);
        let mut game = state(description);

        assert_eq!(game.step_n(2).unwrap(), StepOutcome::Completed);
        let graph = game.atoms().graph();
        let shared = graph.molecule(game.alpha().held().unwrap()).unwrap();
        assert!(shared.contains(game.beta().held().unwrap()));

        assert_eq!(game.step_n(2).unwrap(), StepOutcome::Completed);
        assert_eq!(game.alpha().position(), Point::new(0, 0));
        assert_eq!(game.beta().position(), Point::new(2, 1));
        let held = game.alpha().held_positions(game.atoms().graph());
        assert!(held.contains(&game.beta().position()));
        assert!(held.contains(&Point::new(2, 0)));
    }

    #[test]
    fn beta_follows_its_own_commands() {
        let mut description = base(start(5, 2, Direction::Left), vec![]);
        description.starts.beta = start(5, 6, Direction::Up);
        description.tiles = vec![command(5, 5, WaldoType::Beta, Instruction::Empty, Direction::Left)];
        let mut game = state(description);

        game.step_n(2).unwrap();
        assert_eq!(game.alpha().position(), Point::new(3, 2));
        assert_eq!(game.beta().position(), Point::new(4, 5));
        assert_eq!(game.beta().heading(), Direction::Left);
    }

    #[test]
    fn alpha_only_leaves_beta_in_place() {
        let config = SimulationConfig {
            active_waldos: ActiveWaldos::AlphaOnly,
            ..Default::default()
        };
        let mut description = base(start(5, 5, Direction::Left), vec![]);
        description.starts.beta = start(5, 6, Direction::Up);
        let reactor = Arc::new(Reactor::new(description).unwrap());
        let mut game = GameState::with_config(reactor, config);
        game.step_n(2).unwrap();
        assert_eq!(game.beta().position(), Point::new(5, 6));
        assert_eq!(game.alpha().position(), Point::new(3, 5));
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let tiles = vec![command(4, 5, WaldoType::Alpha, Instruction::InAlpha, Direction::Up)];
        let mut game = state(base(start(5, 5, Direction::Left), tiles));
        game.step_n(3).unwrap();
        assert!(game.has_started());
        assert!(!game.atoms().is_empty());

        game.reset();
        assert_eq!(game.cycles(), 0);
        assert!(game.atoms().is_empty());
        assert_eq!(game.alpha().position(), Point::new(5, 5));
        assert_eq!(game.alpha().heading(), Direction::Left);
    }

    #[test]
    fn reactor_can_be_shared() {
        let reactor = Arc::new(Reactor::new(base(start(5, 5, Direction::Left), vec![])).unwrap());
        let mut first = GameState::new(Arc::clone(&reactor));
        let second = GameState::new(reactor);
        first.step_n(2).unwrap();
        assert_eq!(first.alpha().position(), Point::new(3, 5));
        assert_eq!(second.alpha().position(), Point::new(5, 5));
    }
}
