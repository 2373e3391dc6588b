use std::sync::Arc;

use anyhow::{Result, bail};
use tracing::info;

use waldo_sim::{GameState, StepOutcome};

use crate::cli::RunArgs;
use crate::config::{build_simulation_config, describe};
use crate::display::{Context, Progress, print_reactor_info, print_run_report};
use crate::io::{open_reactor, resolve_format};

const TOTAL_STEPS: u8 = 2;

/// Spinner refresh interval, in cycles.
const UPDATE_EVERY: u64 = 64;

pub fn run_simulation(args: RunArgs, ctx: Context) -> Result<()> {
    let format = resolve_format(&args.io)?;
    let config = build_simulation_config(&args.sim)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading reactor");
    let reactor = Arc::new(open_reactor(&args.io.reactor, format)?);
    let load_substeps = vec![
        format!("Parse {} description", format),
        format!("Grid {} × {}", reactor.width(), reactor.height()),
    ];
    let load_substeps_ref: Vec<&str> = load_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Loading reactor", &load_substeps_ref);

    if ctx.interactive {
        print_reactor_info(&reactor);
    }

    progress.step("Running simulation");
    let config_substeps = describe(&config);
    let mut game = GameState::with_config(reactor, config);
    let outcome = run_cycles(&mut game, args.cycles, &mut progress)?;

    let mut run_substeps = config_substeps;
    run_substeps.push(format!("{} of {} cycles completed", game.cycles(), args.cycles));
    let run_substeps_ref: Vec<&str> = run_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Running simulation", &run_substeps_ref);

    print_run_report(&game, &outcome);
    progress.finish(!outcome.is_completed());

    info!(
        cycles = game.cycles(),
        completed = outcome.is_completed(),
        "run finished"
    );

    if let StepOutcome::Halted { waldo, reason } = outcome {
        bail!(
            "Simulation halted at cycle {}: the {} waldo stopped ({})",
            game.cycles(),
            waldo,
            reason
        );
    }

    Ok(())
}

/// Steps until the budget is spent, a halt occurs, or every output target is met.
fn run_cycles(game: &mut GameState, budget: u64, progress: &mut Progress) -> Result<StepOutcome> {
    let mut outcome = StepOutcome::Completed;

    while game.cycles() < budget {
        outcome = game.step()?;
        if !outcome.is_completed() || game.is_complete() {
            break;
        }
        if game.cycles() % UPDATE_EVERY == 0 {
            progress.update(&format!("Cycle {}/{}", game.cycles(), budget));
        }
    }

    Ok(outcome)
}
