use std::io::{self, Write};

use anyhow::Error;

use waldo_sim::ReactorError;
use waldo_sim::io::{Error as IoError, Format};
use waldo_sim::sim::BlueprintError;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        if let Some(io_err) = err.downcast_ref::<IoError>() {
            collector.mark_typed();
            collector.collect_io_hints(io_err);
        } else if let Some(reactor_err) = err.downcast_ref::<ReactorError>() {
            collector.mark_typed();
            collector.collect_reactor_hints(reactor_err);
        } else if let Some(source) = err.downcast_ref::<std::io::Error>() {
            collector.mark_typed();
            collector.collect_std_io_hints(source);
        }

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &IoError) {
        match err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { format, .. } => {
                self.add(format!("The file is not a valid {} reactor document", format));
                self.add("Everything must live under a top-level `reactor` key");
                match format {
                    Format::Json => self.add("Check for trailing commas and unquoted keys"),
                    Format::Toml => {
                        self.add("Use [reactor.starts.alpha] style tables for nested sections")
                    }
                }
                self.add("Unknown fields are rejected; check key spelling");
            }

            IoError::UnsupportedFormat(_) => {
                self.add("Supported reactor formats: json, toml");
                self.add("Pass --format to override extension-based detection");
            }

            IoError::Config(_) => {
                self.add("Simulation configs accept: collision_rule, active_waldos, input_selection, seed");
                self.add("Values are kebab-case, e.g. active_waldos = \"alpha-only\"");
            }

            IoError::Reactor(reactor_err) => self.collect_reactor_hints(reactor_err),
        }
    }

    fn collect_reactor_hints(&mut self, err: &ReactorError) {
        match err {
            ReactorError::InvalidDimensions { .. } => {
                self.add("Input and output zones are four columns wide on each side");
                self.add("Use a grid of at least 8 columns and 2 rows");
                self.add("Grids are capped at 1048576 tiles in total");
            }

            ReactorError::InvalidStart { .. } => {
                self.add("Starts must lie inside the grid");
                self.add("Start directions must be up, down, left, or right");
            }

            ReactorError::TileOutsideGrid(_) | ReactorError::TileOutOfBounds(_) => {
                self.add("Tile coordinates run from (0, 0) to (width-1, height-1)");
            }

            ReactorError::InvalidBlueprint { role, source, .. } => {
                self.add(format!("The {} molecule description cannot be built", role));
                self.collect_blueprint_hints(source);
            }

            ReactorError::InvalidProbability { .. } => {
                self.add("Input probabilities must be finite and non-negative");
            }

            ReactorError::UnknownToken { kind, .. } => {
                self.add(format!("Check the spelling of the {} value", kind));
                self.add(match *kind {
                    "instruction" => {
                        "Instructions: in-alpha, out-alpha, in-beta, out-beta, grab, drop, grab-drop, sync, add-bond, remove-bond, rotate-clockwise, rotate-counter-clockwise, empty"
                    }
                    "direction" => "Directions: up, down, left, right, continue",
                    _ => "Waldos: alpha, beta",
                });
            }

            ReactorError::Element(_) => {
                self.add("Supported elements: H (hydrogen), O (oxygen), N (nitrogen)");
                self.add("Names accept the symbol or the full name in any case");
            }

            ReactorError::TokenTable { .. } => {
                self.add("Built-in token tables are inconsistent; please report this");
            }

            ReactorError::Model(_) => {
                self.add("The atom graph rejected an operation on this reactor");
            }
        }
    }

    fn collect_blueprint_hints(&mut self, err: &BlueprintError) {
        match err {
            BlueprintError::Empty => self.add("List at least one atom"),
            BlueprintError::DuplicateAtom(_) => self.add("Each cell holds at most one atom"),
            BlueprintError::MissingAtom(_) => {
                self.add("Every bond endpoint must name a listed atom")
            }
            BlueprintError::NotAdjacent { .. } => {
                self.add("Bonds join orthogonally adjacent cells only")
            }
            BlueprintError::DuplicateBond { .. } => {
                self.add("List each bonded pair once and set its strength there")
            }
            BlueprintError::ZeroStrength { .. } => self.add("Bond strength starts at 1"),
            BlueprintError::Unsatisfiable { .. } => {
                self.add("Bond capacities: H 1, O 2, N 4 across all of an atom's bonds")
            }
            BlueprintError::OutsideZone { zone, .. } => {
                self.add(format!("Input atoms must lie inside their input zone {}", zone))
            }
            BlueprintError::Disconnected(_) => {
                self.add("Bond the pieces together or list them as separate inputs")
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8 text");
                self.add("Reactor descriptions must be plain JSON or TOML");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check the file path and permissions");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("halted") {
            self.add("Run `wsim inspect` to review tiles and zones");
            self.add("Use -vv to log every cycle");
            return;
        }

        if msg.contains("infer reactor format") {
            self.add("Supported reactor formats: json, toml");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
