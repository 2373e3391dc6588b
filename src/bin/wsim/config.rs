use anyhow::{Context, Result};

use waldo_sim::io::load_config;
use waldo_sim::{ActiveWaldos, InputSelection, SimulationConfig};

use crate::cli::SimulationOptions;

/// Loads the config file if one was given, then applies flag overrides.
pub fn build_simulation_config(opts: &SimulationOptions) -> Result<SimulationConfig> {
    let mut config = match &opts.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load simulation config: {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    apply_overrides(&mut config, opts);
    Ok(config)
}

fn apply_overrides(config: &mut SimulationConfig, opts: &SimulationOptions) {
    if let Some(mode) = opts.collision {
        config.collision_rule = mode.into();
    }
    if opts.alpha_only {
        config.active_waldos = ActiveWaldos::AlphaOnly;
    }
    if opts.weighted_inputs {
        config.input_selection = InputSelection::Weighted;
    }
    if opts.seed.is_some() {
        config.seed = opts.seed;
    }
}

pub fn describe(config: &SimulationConfig) -> Vec<String> {
    let collision = match config.collision_rule {
        waldo_sim::CollisionRule::Either => "either condition",
        waldo_sim::CollisionRule::Both => "both conditions",
    };
    let waldos = match config.active_waldos {
        ActiveWaldos::Both => "alpha + beta",
        ActiveWaldos::AlphaOnly => "alpha only",
    };
    let inputs = match config.input_selection {
        InputSelection::First => "first option".to_string(),
        InputSelection::Weighted => format!("weighted (seed {})", config.effective_seed()),
    };

    vec![
        format!("Collision rule: {}", collision),
        format!("Active waldos: {}", waldos),
        format!("Input selection: {}", inputs),
    ]
}
