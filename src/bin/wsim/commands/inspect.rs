use anyhow::Result;

use crate::cli::InspectArgs;
use crate::display::{Context, Progress, print_blueprints, print_reactor_info, print_tiles};
use crate::io::{open_reactor, resolve_format};

const TOTAL_STEPS: u8 = 1;

pub fn run_inspect(args: InspectArgs, ctx: Context) -> Result<()> {
    let format = resolve_format(&args.io)?;
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Loading reactor");
    let reactor = open_reactor(&args.io.reactor, format)?;
    let substep = format!("Parse {} description", format);
    progress.complete_step(
        "Loading reactor",
        &[substep.as_str(), "Validate zones and molecules"],
    );

    print_reactor_info(&reactor);
    print_tiles(&reactor);
    print_blueprints(&reactor);

    progress.finish(false);
    Ok(())
}
