//! Serde model of the reactor description document.
//!
//! The same shape is accepted from JSON and TOML. Everything lives under a
//! top-level `reactor` key. Instruction, direction, and waldo values are
//! text tokens resolved through [`tokens`](crate::sim::tokens); element
//! names accept either the symbol or the full name.

use crate::model::geometry::{Direction, Point};
use crate::model::types::Element;
use crate::sim::error::Error as ReactorError;
use crate::sim::tokens;
use crate::sim::{
    AtomSpec, BondSpec, ByWaldo, InputDescription, Instruction, MoleculeDescription,
    OutputDescription, ReactorDescription, TileOverride, WaldoStart, WaldoType,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReactorDocument {
    pub reactor: ReactorSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReactorSection {
    pub width: i32,
    pub height: i32,
    pub starts: Starts,
    #[serde(default)]
    pub tiles: Vec<TileEntry>,
    #[serde(default)]
    pub inputs: Inputs,
    #[serde(default)]
    pub outputs: Outputs,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Starts {
    pub alpha: StartEntry,
    pub beta: StartEntry,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartEntry {
    pub x: i32,
    pub y: i32,
    pub direction: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TileEntry {
    pub x: i32,
    pub y: i32,
    #[serde(default = "default_instruction")]
    pub instruction: String,
    #[serde(default = "default_direction")]
    pub direction: String,
    pub waldo: String,
    #[serde(default)]
    pub bonder: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Inputs {
    #[serde(default)]
    pub alpha: Vec<InputEntry>,
    #[serde(default)]
    pub beta: Vec<InputEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputEntry {
    #[serde(default = "default_probability")]
    pub probability: f64,
    pub atoms: Vec<AtomEntry>,
    #[serde(default)]
    pub bonds: Vec<BondEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Outputs {
    #[serde(default)]
    pub alpha: Option<OutputEntry>,
    #[serde(default)]
    pub beta: Option<OutputEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputEntry {
    pub target: u32,
    pub atoms: Vec<AtomEntry>,
    #[serde(default)]
    pub bonds: Vec<BondEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomEntry {
    pub x: i32,
    pub y: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BondEntry {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    #[serde(default = "default_strength")]
    pub strength: u8,
}

fn default_instruction() -> String {
    tokens::token(Instruction::Empty).to_string()
}

fn default_direction() -> String {
    tokens::token(Direction::Continue).to_string()
}

fn default_probability() -> f64 {
    1.0
}

fn default_strength() -> u8 {
    1
}

impl ReactorDocument {
    /// Resolves every token and element name.
    ///
    /// # Errors
    ///
    /// Returns [`ReactorError::UnknownToken`] or [`ReactorError::Element`]
    /// for the first text value that does not resolve.
    pub fn into_description(self) -> Result<ReactorDescription, ReactorError> {
        let section = self.reactor;

        let starts = ByWaldo::new(section.starts.alpha, section.starts.beta)
            .try_map(|_, start| start.resolve())?;

        let tiles = section
            .tiles
            .into_iter()
            .map(TileEntry::resolve)
            .collect::<Result<Vec<_>, _>>()?;

        let inputs = ByWaldo::new(section.inputs.alpha, section.inputs.beta).try_map(|_, list| {
            list.into_iter()
                .map(InputEntry::resolve)
                .collect::<Result<Vec<_>, _>>()
        })?;

        let outputs = ByWaldo::new(section.outputs.alpha, section.outputs.beta)
            .try_map(|_, output| output.map(OutputEntry::resolve).transpose())?;

        Ok(ReactorDescription {
            width: section.width,
            height: section.height,
            starts,
            tiles,
            inputs,
            outputs,
        })
    }
}

impl StartEntry {
    fn resolve(self) -> Result<WaldoStart, ReactorError> {
        Ok(WaldoStart {
            position: Point::new(self.x, self.y),
            direction: tokens::parse(&self.direction)?,
        })
    }
}

impl TileEntry {
    fn resolve(self) -> Result<TileOverride, ReactorError> {
        Ok(TileOverride {
            position: Point::new(self.x, self.y),
            waldo: tokens::parse::<WaldoType>(&self.waldo)?,
            instruction: tokens::parse(&self.instruction)?,
            direction: tokens::parse(&self.direction)?,
            bonder: self.bonder,
        })
    }
}

impl InputEntry {
    fn resolve(self) -> Result<InputDescription, ReactorError> {
        Ok(InputDescription {
            probability: self.probability,
            molecule: molecule(self.atoms, self.bonds)?,
        })
    }
}

impl OutputEntry {
    fn resolve(self) -> Result<OutputDescription, ReactorError> {
        Ok(OutputDescription {
            target: self.target,
            molecule: molecule(self.atoms, self.bonds)?,
        })
    }
}

fn molecule(
    atoms: Vec<AtomEntry>,
    bonds: Vec<BondEntry>,
) -> Result<MoleculeDescription, ReactorError> {
    let atoms = atoms
        .into_iter()
        .map(|atom| {
            Ok(AtomSpec {
                position: Point::new(atom.x, atom.y),
                element: atom.name.parse::<Element>()?,
            })
        })
        .collect::<Result<Vec<_>, ReactorError>>()?;

    let bonds = bonds
        .into_iter()
        .map(|bond| BondSpec {
            from: Point::new(bond.x1, bond.y1),
            to: Point::new(bond.x2, bond.y2),
            strength: bond.strength,
        })
        .collect();

    Ok(MoleculeDescription { atoms, bonds })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "reactor": {
            "width": 10,
            "height": 8,
            "starts": {
                "alpha": { "x": 5, "y": 5, "direction": "left" },
                "beta": { "x": 5, "y": 6, "direction": "Up" }
            },
            "tiles": [
                { "x": 0, "y": 3, "instruction": "grab", "waldo": "Beta" }
            ],
            "inputs": {
                "alpha": [
                    {
                        "probability": 1.0,
                        "atoms": [
                            { "x": 2, "y": 2, "name": "h" },
                            { "x": 2, "y": 3, "name": "Oxygen" }
                        ],
                        "bonds": [ { "x1": 2, "y1": 2, "x2": 2, "y2": 3, "strength": 1 } ]
                    }
                ],
                "beta": []
            },
            "outputs": { "alpha": null, "beta": null }
        }
    }"#;

    fn document(text: &str) -> ReactorDocument {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn minimal_document_resolves() {
        let description = document(MINIMAL).into_description().unwrap();
        assert_eq!(description.width, 10);
        assert_eq!(description.starts.alpha.direction, Direction::Left);
        assert_eq!(description.starts.beta.direction, Direction::Up);

        let tile = &description.tiles[0];
        assert_eq!(tile.waldo, WaldoType::Beta);
        assert_eq!(tile.instruction, Instruction::Grab);
        assert_eq!(tile.direction, Direction::Continue);

        let input = &description.inputs.alpha[0];
        assert_eq!(input.molecule.atoms[1].element, Element::O);
        assert_eq!(input.molecule.bonds[0].strength, 1);
        assert!(description.outputs.alpha.is_none());
    }

    #[test]
    fn unknown_instruction_fails() {
        let text = MINIMAL.replace("\"grab\"", "\"teleport\"");
        let err = document(&text).into_description().unwrap_err();
        assert!(matches!(
            err,
            ReactorError::UnknownToken {
                kind: "instruction",
                ..
            }
        ));
    }

    #[test]
    fn unknown_element_fails() {
        let text = MINIMAL.replace("\"Oxygen\"", "\"xenon\"");
        let err = document(&text).into_description().unwrap_err();
        assert!(matches!(err, ReactorError::Element(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let text = MINIMAL.replace("\"width\": 10", "\"width\": 10, \"depth\": 3");
        assert!(serde_json::from_str::<ReactorDocument>(&text).is_err());
    }
}
