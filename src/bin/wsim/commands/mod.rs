mod inspect;
mod run;

use inspect::run_inspect;
use run::run_simulation;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Run(args) => run_simulation(args, ctx),
        Command::Inspect(args) => run_inspect(args, ctx),
    }
}
