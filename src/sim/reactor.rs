//! The immutable reactor: tile grid, zones, waldo starts, inputs, and outputs.
//!
//! A [`Reactor`] is built once from a [`ReactorDescription`] and never
//! changes afterwards, so any number of simulations can share it behind an
//! [`Arc`](std::sync::Arc). Construction validates everything a simulation
//! later relies on: the grid is large enough for the zone layout, waldo
//! starts lie on the grid with a real heading, tile overrides stay inside
//! the grid, and every input or output molecule is constructible.

use super::blueprint::{AtomSpec, BondSpec, MoleculeBlueprint};
use super::config::InputSelection;
use super::error::Error;
use super::types::{ByWaldo, Instruction, WaldoType, Zone};
use crate::model::geometry::{Direction, Point, Rectangle};
use crate::model::molecule::Molecule;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use tracing::debug;

const ZONE_WIDTH: i32 = 4;
const MIN_WIDTH: i32 = 2 * ZONE_WIDTH;
const MIN_HEIGHT: i32 = 2;

/// Largest number of tiles a reactor grid may hold.
pub const MAX_CELLS: i64 = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneLayout {
    pub input_alpha: Rectangle,
    pub output_alpha: Rectangle,
    pub input_beta: Rectangle,
    pub output_beta: Rectangle,
}

impl ZoneLayout {
    /// Input zones hug the left edge and output zones the right edge, each
    /// four columns wide; alpha takes the upper half and beta the lower.
    ///
    /// A 10x8 reactor gets `(0,0,4,4)`, `(6,0,4,4)`, `(0,4,4,4)` and
    /// `(6,4,4,4)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when the reactor is narrower than
    /// eight columns, shorter than two rows, or holds more than
    /// [`MAX_CELLS`] tiles.
    pub fn reference(width: i32, height: i32) -> Result<Self, Error> {
        if width < MIN_WIDTH
            || height < MIN_HEIGHT
            || i64::from(width) * i64::from(height) > MAX_CELLS
        {
            return Err(Error::InvalidDimensions { width, height });
        }
        let upper = height / 2;
        let lower = height - upper;
        let right = width - ZONE_WIDTH;
        Ok(Self {
            input_alpha: Rectangle::new(0, 0, ZONE_WIDTH, upper)?,
            output_alpha: Rectangle::new(right, 0, ZONE_WIDTH, upper)?,
            input_beta: Rectangle::new(0, upper, ZONE_WIDTH, lower)?,
            output_beta: Rectangle::new(right, upper, ZONE_WIDTH, lower)?,
        })
    }

    /// The zone a cell belongs to, checked in the order alpha input, beta
    /// input, alpha output, beta output.
    pub fn classify(&self, point: Point) -> Zone {
        if self.input_alpha.contains(point) {
            Zone::InputAlpha
        } else if self.input_beta.contains(point) {
            Zone::InputBeta
        } else if self.output_alpha.contains(point) {
            Zone::OutputAlpha
        } else if self.output_beta.contains(point) {
            Zone::OutputBeta
        } else {
            Zone::Empty
        }
    }

    pub fn input(&self, kind: WaldoType) -> Rectangle {
        match kind {
            WaldoType::Alpha => self.input_alpha,
            WaldoType::Beta => self.input_beta,
        }
    }

    pub fn output(&self, kind: WaldoType) -> Rectangle {
        match kind {
            WaldoType::Alpha => self.output_alpha,
            WaldoType::Beta => self.output_beta,
        }
    }

    pub fn rect(&self, zone: Zone) -> Option<Rectangle> {
        match zone {
            Zone::InputAlpha => Some(self.input_alpha),
            Zone::OutputAlpha => Some(self.output_alpha),
            Zone::InputBeta => Some(self.input_beta),
            Zone::OutputBeta => Some(self.output_beta),
            Zone::Empty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    pub instruction: Instruction,
}

impl Default for Command {
    fn default() -> Self {
        Self {
            direction: Direction::Continue,
            instruction: Instruction::Empty,
        }
    }
}

impl Command {
    pub fn is_empty(&self) -> bool {
        *self == Command::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    position: Point,
    zone: Zone,
    commands: ByWaldo<Command>,
    bonder: bool,
}

impl Tile {
    fn new(position: Point, zone: Zone) -> Self {
        Self {
            position,
            zone,
            commands: ByWaldo::default(),
            bonder: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    #[inline]
    pub fn is_bonder(&self) -> bool {
        self.bonder
    }

    pub fn command(&self, kind: WaldoType) -> Command {
        self.commands[kind]
    }

    pub fn commands(&self, kind: WaldoType) -> (Direction, Instruction) {
        let command = self.commands[kind];
        (command.direction, command.instruction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaldoStart {
    pub position: Point,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputOption {
    pub blueprint: MoleculeBlueprint,
    pub probability: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFactory {
    options: Vec<InputOption>,
}

impl InputFactory {
    pub fn options(&self) -> &[InputOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Picks the blueprint to instantiate next.
    ///
    /// `First` always returns the first option. `Weighted` draws from the
    /// options in proportion to their probabilities, and falls back to the
    /// first option when every weight is zero.
    pub fn choose<R: Rng + ?Sized>(
        &self,
        selection: InputSelection,
        rng: &mut R,
    ) -> Option<&MoleculeBlueprint> {
        let first = self.options.first()?;
        let chosen = match selection {
            InputSelection::First => first,
            InputSelection::Weighted => {
                match WeightedIndex::new(self.options.iter().map(|o| o.probability)) {
                    Ok(dist) => &self.options[dist.sample(rng)],
                    Err(_) => first,
                }
            }
        };
        Some(&chosen.blueprint)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputTarget {
    pub blueprint: MoleculeBlueprint,
    pub target: u32,
}

impl OutputTarget {
    pub fn expected(&self) -> &Molecule {
        self.blueprint.molecule()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileOverride {
    pub position: Point,
    pub waldo: WaldoType,
    pub instruction: Instruction,
    pub direction: Direction,
    pub bonder: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeDescription {
    pub atoms: Vec<AtomSpec>,
    pub bonds: Vec<BondSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputDescription {
    pub probability: f64,
    pub molecule: MoleculeDescription,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputDescription {
    pub target: u32,
    pub molecule: MoleculeDescription,
}

/// Plain data describing a reactor, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactorDescription {
    pub width: i32,
    pub height: i32,
    pub starts: ByWaldo<WaldoStart>,
    pub tiles: Vec<TileOverride>,
    pub inputs: ByWaldo<Vec<InputDescription>>,
    pub outputs: ByWaldo<Option<OutputDescription>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reactor {
    width: i32,
    height: i32,
    bound: Rectangle,
    layout: ZoneLayout,
    tiles: Vec<Tile>,
    starts: ByWaldo<WaldoStart>,
    inputs: ByWaldo<InputFactory>,
    outputs: ByWaldo<Option<OutputTarget>>,
}

impl Reactor {
    /// Validates `description` and builds the reactor.
    ///
    /// Tile overrides are applied in order, so a later override of the same
    /// cell and waldo wins.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] naming the first part of the description that
    /// cannot be realized.
    pub fn new(description: ReactorDescription) -> Result<Self, Error> {
        let ReactorDescription {
            width,
            height,
            starts,
            tiles: overrides,
            inputs,
            outputs,
        } = description;

        let layout = ZoneLayout::reference(width, height)?;
        let bound = Rectangle::new(0, 0, width, height)?;

        for kind in WaldoType::ALL {
            let start = starts[kind];
            if !bound.contains(start.position) {
                return Err(Error::invalid_start(
                    kind,
                    format!("position {} is outside the grid", start.position),
                ));
            }
            if start.direction.is_continue() {
                return Err(Error::invalid_start(kind, "heading cannot be continue"));
            }
        }

        let cells = width
            .checked_mul(height)
            .and_then(|cells| usize::try_from(cells).ok())
            .ok_or(Error::InvalidDimensions { width, height })?;
        let mut tiles = Vec::with_capacity(cells);
        for y in 0..height {
            for x in 0..width {
                let position = Point::new(x, y);
                tiles.push(Tile::new(position, layout.classify(position)));
            }
        }

        for tile in overrides {
            if !bound.contains(tile.position) {
                return Err(Error::TileOutsideGrid(tile.position));
            }
            let index = (tile.position.y * width + tile.position.x) as usize;
            let cell = &mut tiles[index];
            cell.commands[tile.waldo] = Command {
                direction: tile.direction,
                instruction: tile.instruction,
            };
            cell.bonder |= tile.bonder;
        }

        let inputs = inputs.try_map(|kind, options| build_factory(kind, &layout, options))?;
        let outputs = outputs.try_map(|kind, output| {
            output
                .map(|output| {
                    let blueprint = build_blueprint(kind, "output", output.molecule)?;
                    Ok::<_, Error>(OutputTarget {
                        blueprint,
                        target: output.target,
                    })
                })
                .transpose()
        })?;

        debug!(
            width,
            height,
            alpha_inputs = inputs.alpha.options.len(),
            beta_inputs = inputs.beta.options.len(),
            "reactor built"
        );

        Ok(Self {
            width,
            height,
            bound,
            layout,
            tiles,
            starts,
            inputs,
            outputs,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn bound(&self) -> Rectangle {
        self.bound
    }

    pub fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    pub fn zone_rect(&self, zone: Zone) -> Option<Rectangle> {
        self.layout.rect(zone)
    }

    /// The tile at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TileOutOfBounds`] for positions outside the grid.
    pub fn tile(&self, position: Point) -> Result<&Tile, Error> {
        if !self.bound.contains(position) {
            return Err(Error::TileOutOfBounds(position));
        }
        let index = (position.y * self.width + position.x) as usize;
        self.tiles
            .get(index)
            .ok_or(Error::TileOutOfBounds(position))
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn start(&self, kind: WaldoType) -> WaldoStart {
        self.starts[kind]
    }

    pub fn input_factory(&self, kind: WaldoType) -> &InputFactory {
        &self.inputs[kind]
    }

    pub fn output(&self, kind: WaldoType) -> Option<&OutputTarget> {
        self.outputs[kind].as_ref()
    }
}

fn build_blueprint(
    kind: WaldoType,
    role: &'static str,
    molecule: MoleculeDescription,
) -> Result<MoleculeBlueprint, Error> {
    MoleculeBlueprint::new(molecule.atoms, molecule.bonds).map_err(|source| {
        Error::InvalidBlueprint {
            waldo: kind,
            role,
            source,
        }
    })
}

fn build_factory(
    kind: WaldoType,
    layout: &ZoneLayout,
    options: Vec<InputDescription>,
) -> Result<InputFactory, Error> {
    let zone = layout.input(kind);
    let mut built = Vec::with_capacity(options.len());
    for (index, option) in options.into_iter().enumerate() {
        if !option.probability.is_finite() || option.probability < 0.0 {
            return Err(Error::InvalidProbability {
                waldo: kind,
                index,
                probability: option.probability,
            });
        }
        let MoleculeDescription { atoms, bonds } = option.molecule;
        let blueprint = MoleculeBlueprint::within(atoms, bonds, &zone).map_err(|source| {
            Error::InvalidBlueprint {
                waldo: kind,
                role: "input",
                source,
            }
        })?;
        built.push(InputOption {
            blueprint,
            probability: option.probability,
        });
    }
    Ok(InputFactory { options: built })
}
