use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "wsim",
    about = "Step-cycle simulator for waldo reactors",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a reactor for a number of cycles
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// Describe a reactor without running it
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

/// Reactor input and output options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Reactor description file (.json or .toml)
    #[arg(value_name = "REACTOR")]
    pub reactor: PathBuf,

    /// Reactor file format (inferred from the extension if omitted)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<ReactorFormat>,

    /// Suppress banner and progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Maximum number of cycles to run
    #[arg(short, long, value_name = "N", default_value = "100")]
    pub cycles: u64,

    #[command(flatten)]
    pub sim: SimulationOptions,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub io: IoOptions,
}

/// Simulation rule options, layered over an optional config file.
#[derive(Args)]
#[command(next_help_heading = "Simulation Options")]
pub struct SimulationOptions {
    /// Simulation config file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Collision rule for a waldo entering an occupied cell
    #[arg(long, value_name = "RULE")]
    pub collision: Option<CollisionMode>,

    /// Step only the alpha waldo each cycle
    #[arg(long)]
    pub alpha_only: bool,

    /// Pick input molecules by their probability weights
    #[arg(long)]
    pub weighted_inputs: bool,

    /// Seed for weighted input selection
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReactorFormat {
    Json,
    Toml,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CollisionMode {
    /// Collide when the cell holds a foreign atom or the other waldo's molecule
    Either,
    /// Collide only when both conditions hold
    Both,
}

impl From<ReactorFormat> for waldo_sim::io::Format {
    fn from(format: ReactorFormat) -> Self {
        match format {
            ReactorFormat::Json => Self::Json,
            ReactorFormat::Toml => Self::Toml,
        }
    }
}

impl From<CollisionMode> for waldo_sim::CollisionRule {
    fn from(mode: CollisionMode) -> Self {
        match mode {
            CollisionMode::Either => Self::Either,
            CollisionMode::Both => Self::Both,
        }
    }
}

impl Command {
    pub fn io(&self) -> &IoOptions {
        match self {
            Command::Run(args) => &args.io,
            Command::Inspect(args) => &args.io,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
