//! Simulation settings that are independent of the reactor layout.
//!
//! A [`SimulationConfig`] controls the choices the reactor description does
//! not fix: how collisions are detected, which waldos are stepped, and how a
//! factory with several molecules picks one. All fields have defaults, so a
//! TOML document only needs to name what it changes:
//!
//! ```toml
//! collision_rule = "both"
//! active_waldos = "alpha-only"
//! input_selection = "weighted"
//! seed = 42
//! ```

use super::types::WaldoType;
use serde::Deserialize;

/// When a moving waldo counts as colliding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionRule {
    /// The new cell holds a foreign atom, or lies inside the other waldo's
    /// held molecule.
    #[default]
    Either,
    /// Both conditions must hold at once.
    Both,
}

/// Which waldos are stepped each cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveWaldos {
    /// Alpha, then beta.
    #[default]
    Both,
    AlphaOnly,
}

/// How an input factory picks among its molecules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputSelection {
    /// Always the first configured molecule.
    #[default]
    First,
    /// Random choice weighted by each option's probability.
    Weighted,
}

/// Runtime settings for a [`GameState`](super::GameState).
///
/// # Examples
///
/// ```
/// use waldo_sim::{CollisionRule, SimulationConfig};
///
/// let config = SimulationConfig {
///     collision_rule: CollisionRule::Both,
///     ..Default::default()
/// };
/// assert_eq!(config.seed, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub collision_rule: CollisionRule,
    pub active_waldos: ActiveWaldos,
    pub input_selection: InputSelection,
    /// Seed for weighted input selection. Runs without a seed use 0.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed documents, unknown keys, or
    /// unrecognized enum values.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The waldos stepped each cycle, in order.
    pub fn active(&self) -> &'static [WaldoType] {
        match self.active_waldos {
            ActiveWaldos::Both => &[WaldoType::Alpha, WaldoType::Beta],
            ActiveWaldos::AlphaOnly => &[WaldoType::Alpha],
        }
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(0)
    }
}
