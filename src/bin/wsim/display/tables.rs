use std::io::{self, Write};

use waldo_sim::{GameState, MoleculeBlueprint, Reactor, StepOutcome, WaldoType};

use crate::util::text::{join_or, truncate};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_TILE_ROWS: usize = 20;

pub fn print_reactor_info(reactor: &Reactor) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        (
            "Grid",
            format!("{} × {}", reactor.width(), reactor.height()),
        ),
        (
            "Programmed Tiles",
            format!("{}", reactor.tiles().filter(|t| is_programmed(t)).count()),
        ),
        (
            "Bonders",
            format!("{}", reactor.tiles().filter(|t| t.is_bonder()).count()),
        ),
    ];

    for kind in WaldoType::ALL {
        let start = reactor.start(kind);
        rows.push((
            start_label(kind),
            format!("{} heading {}", start.position, start.direction),
        ));
    }

    for kind in WaldoType::ALL {
        let (input_label, output_label) = zone_labels(kind);
        rows.push((input_label, format!("{}", reactor.layout().input(kind))));
        rows.push((output_label, format!("{}", reactor.layout().output(kind))));
    }

    print_kv_table(&mut out, "Reactor Summary", &rows);
}

pub fn print_tiles(reactor: &Reactor) {
    let mut rows = Vec::new();

    for tile in reactor.tiles().filter(|t| is_programmed(t)) {
        for kind in WaldoType::ALL {
            let command = tile.command(kind);
            if command.is_empty() {
                continue;
            }
            rows.push(vec![
                tile.position().to_string(),
                kind.to_string(),
                command.direction.to_string(),
                command.instruction.to_string(),
            ]);
        }
    }

    if rows.is_empty() {
        return;
    }

    let total = rows.len();
    rows.truncate(MAX_TILE_ROWS);
    if total > MAX_TILE_ROWS {
        rows.push(vec![
            "...".to_string(),
            String::new(),
            String::new(),
            format!("({} more)", total - MAX_TILE_ROWS),
        ]);
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();
    print_column_table(
        &mut out,
        "Tile Program",
        &["Tile", "Waldo", "Arrow", "Instruction"],
        &rows,
    );
}

pub fn print_blueprints(reactor: &Reactor) {
    let mut rows = Vec::new();

    for kind in WaldoType::ALL {
        for (index, option) in reactor.input_factory(kind).options().iter().enumerate() {
            rows.push(vec![
                format!("{} in #{}", kind, index + 1),
                format!("p={:.2}", option.probability),
                describe_blueprint(&option.blueprint),
            ]);
        }
    }

    for kind in WaldoType::ALL {
        if let Some(output) = reactor.output(kind) {
            rows.push(vec![
                format!("{} out", kind),
                format!("×{}", output.target),
                describe_blueprint(&output.blueprint),
            ]);
        }
    }

    if rows.is_empty() {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();
    print_column_table(&mut out, "Molecules", &["Slot", "Rate", "Signature"], &rows);
}

pub fn print_run_report(game: &GameState, outcome: &StepOutcome) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let status = match outcome {
        StepOutcome::Completed if game.is_complete() => "targets met".to_string(),
        StepOutcome::Completed => "running".to_string(),
        StepOutcome::Halted { waldo, reason } => format!("halted ({}: {})", waldo, reason),
    };

    let mut rows = vec![
        ("Status", status),
        ("Cycles", format!("{}", game.cycles())),
        ("Atoms Live", format!("{}", game.atoms().len())),
    ];

    for kind in WaldoType::ALL {
        let waldo = game.waldo(kind);
        let grip = if waldo.is_holding() { ", holding" } else { "" };
        rows.push((
            waldo_label(kind),
            format!("{} heading {}{}", waldo.position(), waldo.heading(), grip),
        ));
    }

    let mut deliveries = Vec::new();
    for kind in WaldoType::ALL {
        if let Some(output) = game.reactor().output(kind) {
            deliveries.push(format!(
                "{} {}/{}",
                kind,
                game.delivered(kind),
                output.target
            ));
        }
    }
    rows.push(("Delivered", join_or(&deliveries, "no outputs")));

    print_kv_table(&mut out, "Run Report", &rows);
}

fn is_programmed(tile: &waldo_sim::Tile) -> bool {
    WaldoType::ALL
        .into_iter()
        .any(|kind| !tile.command(kind).is_empty())
}

fn describe_blueprint(blueprint: &MoleculeBlueprint) -> String {
    let first = blueprint
        .positions()
        .next()
        .map(|p| format!(" @ {}", p))
        .unwrap_or_default();
    format!("{}{}", blueprint.molecule(), first)
}

fn start_label(kind: WaldoType) -> &'static str {
    match kind {
        WaldoType::Alpha => "Alpha Start",
        WaldoType::Beta => "Beta Start",
    }
}

fn waldo_label(kind: WaldoType) -> &'static str {
    match kind {
        WaldoType::Alpha => "Alpha Waldo",
        WaldoType::Beta => "Beta Waldo",
    }
}

fn zone_labels(kind: WaldoType) -> (&'static str, &'static str) {
    match kind {
        WaldoType::Alpha => ("Alpha In Zone", "Alpha Out Zone"),
        WaldoType::Beta => ("Beta In Zone", "Beta Out Zone"),
    }
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

/// Sizes every column to its widest cell; the last column takes the slack.
fn print_column_table(out: &mut impl Write, title: &str, headers: &[&str], rows: &[Vec<String>]) {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let sep_overhead = 3 * columns + 1;
    let fixed: usize = widths[..columns - 1].iter().sum();
    widths[columns - 1] = SAFE_TABLE_WIDTH.saturating_sub(fixed + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule(&widths, "┌", "┬", "┐"));
    let _ = writeln!(out, "{}", cells(&widths, headers.iter().copied()));
    let _ = writeln!(out, "{}", rule(&widths, "├", "┼", "┤"));
    for row in rows {
        let _ = writeln!(out, "{}", cells(&widths, row.iter().map(String::as_str)));
    }
    let _ = writeln!(out, "{}", rule(&widths, "└", "┴", "┘"));
}

fn rule(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let body = widths
        .iter()
        .map(|w| "─".repeat(w + 2))
        .collect::<Vec<_>>()
        .join(mid);
    format!("{}{}{}{}", INDENT, left, body, right)
}

fn cells<'a>(widths: &[usize], values: impl Iterator<Item = &'a str>) -> String {
    let body = values
        .zip(widths)
        .map(|(cell, w)| format!(" {:<w$} ", truncate(cell, *w), w = *w))
        .collect::<Vec<_>>()
        .join("│");
    format!("{}│{}│", INDENT, body)
}
