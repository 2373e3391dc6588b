//! Canonical text tokens for instructions, directions, and waldo types.
//!
//! Each family is declared once as a `(value, token)` table. Parsing and
//! printing both go through a [`TokenMap`] built from that table, and the
//! map refuses to build unless every value appears exactly once and every
//! token is unique. Parsing is case-insensitive.

use super::error::Error;
use super::types::{Instruction, WaldoType};
use crate::model::geometry::Direction;
use std::collections::HashMap;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::OnceLock;

/// A closed set of values with a canonical token table.
pub trait Token: Copy + Eq + Hash + Send + Sync + 'static {
    /// Human-readable family name used in error messages.
    const KIND: &'static str;

    /// Every value of the family.
    fn all() -> &'static [Self];

    /// The canonical `(value, token)` pairs.
    fn table() -> &'static [(Self, &'static str)];

    /// The validated map shared by every parse and print.
    fn map() -> &'static TokenMap<Self>;
}

/// A validated bidirectional mapping between values and tokens.
#[derive(Debug)]
pub struct TokenMap<T> {
    forward: HashMap<&'static str, T>,
    reverse: HashMap<T, &'static str>,
}

impl<T: Token> TokenMap<T> {
    /// Builds the map from [`Token::table`], checking that it is a bijection
    /// over [`Token::all`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenTable`] if a value is missing, a value appears
    /// twice, or two values share a token.
    pub fn build() -> Result<Self, Error> {
        let inconsistent = |detail: String| Error::TokenTable {
            kind: T::KIND,
            detail,
        };

        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();
        for &(value, token) in T::table() {
            if reverse.insert(value, token).is_some() {
                return Err(inconsistent(format!(
                    "value for token '{token}' is listed twice"
                )));
            }
            if forward.insert(token, value).is_some() {
                return Err(inconsistent(format!("token '{token}' is listed twice")));
            }
        }

        let missing = T::all()
            .iter()
            .filter(|value| !reverse.contains_key(*value))
            .count();
        if missing > 0 {
            return Err(inconsistent(format!("{missing} value(s) have no token")));
        }

        Ok(Self { forward, reverse })
    }

    pub fn parse(&self, token: &str) -> Result<T, Error> {
        let lowered = token.trim().to_ascii_lowercase();
        self.forward
            .get(lowered.as_str())
            .copied()
            .ok_or_else(|| Error::unknown_token(T::KIND, token))
    }

    pub fn token(&self, value: T) -> &'static str {
        self.reverse.get(&value).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

fn build_or_panic<T: Token>() -> TokenMap<T> {
    TokenMap::build().unwrap_or_else(|e| panic!("{e}. This is a library bug."))
}

const INSTRUCTION_TOKENS: [(Instruction, &str); 13] = [
    (Instruction::InAlpha, "in-alpha"),
    (Instruction::OutAlpha, "out-alpha"),
    (Instruction::InBeta, "in-beta"),
    (Instruction::OutBeta, "out-beta"),
    (Instruction::Grab, "grab"),
    (Instruction::Drop, "drop"),
    (Instruction::GrabDrop, "grab-drop"),
    (Instruction::Sync, "sync"),
    (Instruction::AddBond, "add-bond"),
    (Instruction::RemoveBond, "remove-bond"),
    (Instruction::RotateClockwise, "rotate-clockwise"),
    (Instruction::RotateCounterClockwise, "rotate-counter-clockwise"),
    (Instruction::Empty, "empty"),
];

const DIRECTION_TOKENS: [(Direction, &str); 5] = [
    (Direction::Up, "up"),
    (Direction::Down, "down"),
    (Direction::Left, "left"),
    (Direction::Right, "right"),
    (Direction::Continue, "continue"),
];

const WALDO_TOKENS: [(WaldoType, &str); 2] =
    [(WaldoType::Alpha, "alpha"), (WaldoType::Beta, "beta")];

static INSTRUCTION_MAP: OnceLock<TokenMap<Instruction>> = OnceLock::new();
static DIRECTION_MAP: OnceLock<TokenMap<Direction>> = OnceLock::new();
static WALDO_MAP: OnceLock<TokenMap<WaldoType>> = OnceLock::new();

const ALL_DIRECTIONS: [Direction; 5] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Continue,
];

impl Token for Instruction {
    const KIND: &'static str = "instruction";

    fn all() -> &'static [Self] {
        &Instruction::ALL
    }

    fn table() -> &'static [(Self, &'static str)] {
        &INSTRUCTION_TOKENS
    }

    fn map() -> &'static TokenMap<Self> {
        INSTRUCTION_MAP.get_or_init(build_or_panic)
    }
}

impl Token for Direction {
    const KIND: &'static str = "direction";

    fn all() -> &'static [Self] {
        &ALL_DIRECTIONS
    }

    fn table() -> &'static [(Self, &'static str)] {
        &DIRECTION_TOKENS
    }

    fn map() -> &'static TokenMap<Self> {
        DIRECTION_MAP.get_or_init(build_or_panic)
    }
}

impl Token for WaldoType {
    const KIND: &'static str = "waldo";

    fn all() -> &'static [Self] {
        &WaldoType::ALL
    }

    fn table() -> &'static [(Self, &'static str)] {
        &WALDO_TOKENS
    }

    fn map() -> &'static TokenMap<Self> {
        WALDO_MAP.get_or_init(build_or_panic)
    }
}

/// Parses `token` as a value of family `T`.
pub fn parse<T: Token>(token: &str) -> Result<T, Error> {
    T::map().parse(token)
}

/// Returns the canonical token for `value`.
pub fn token<T: Token>(value: T) -> &'static str {
    T::map().token(value)
}

impl Instruction {
    pub fn token(&self) -> &'static str {
        token(*self)
    }
}

impl FromStr for Instruction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for WaldoType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_builds() {
        assert_eq!(TokenMap::<Instruction>::build().unwrap().len(), 13);
        assert_eq!(TokenMap::<Direction>::build().unwrap().len(), 5);
        assert_eq!(TokenMap::<WaldoType>::build().unwrap().len(), 2);
    }

    #[test]
    fn instruction_tokens_round_trip() {
        for instruction in Instruction::ALL {
            let text = instruction.token();
            assert!(!text.is_empty());
            assert_eq!(text.parse::<Instruction>().unwrap(), instruction);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(parse::<WaldoType>("Alpha").unwrap(), WaldoType::Alpha);
        assert_eq!(parse::<Direction>("LEFT").unwrap(), Direction::Left);
        assert_eq!(
            "Rotate-Clockwise".parse::<Instruction>().unwrap(),
            Instruction::RotateClockwise
        );
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = "teleport".parse::<Instruction>().unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownToken { kind: "instruction", ref token } if token == "teleport"
        ));
        assert!(parse::<Direction>("sideways").is_err());
    }

    #[test]
    fn direction_tokens_match_display() {
        for direction in ALL_DIRECTIONS {
            assert_eq!(token(direction), direction.to_string().to_ascii_lowercase());
        }
    }
}
