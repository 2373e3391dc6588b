use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Numbered spinner lines on stderr; a no-op when not interactive.
pub struct Progress {
    enabled: bool,
    total: u8,
    current: u8,
    started: Instant,
    step_started: Instant,
    spinner: Option<ProgressBar>,
}

impl Progress {
    pub fn new(enabled: bool, total: u8) -> Self {
        let now = Instant::now();
        Self {
            enabled,
            total,
            current: 0,
            started: now,
            step_started: now,
            spinner: None,
        }
    }

    pub fn step(&mut self, description: &str) {
        if !self.enabled {
            return;
        }
        self.clear();
        self.current += 1;
        self.step_started = Instant::now();

        let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(TICKS);
        let spinner = ProgressBar::new_spinner()
            .with_style(style)
            .with_message(self.label(&format!("{description}...")));
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Replaces the spinner message while a step is running.
    pub fn update(&mut self, detail: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(self.label(detail));
        }
    }

    pub fn complete_step(&mut self, description: &str, notes: &[&str]) {
        if !self.enabled {
            return;
        }
        self.clear();
        eprintln!(
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            description,
            self.step_started.elapsed().as_secs_f64()
        );
        for note in notes {
            eprintln!("      \x1b[2m·\x1b[0m {note}");
        }
    }

    pub fn finish(mut self, halted: bool) {
        if !self.enabled {
            return;
        }
        self.clear();
        let (mark, verb) = if halted {
            ("\x1b[33m■\x1b[0m", "Halted after")
        } else {
            ("\x1b[32m✓\x1b[0m", "Finished in")
        };
        eprintln!();
        eprintln!(
            "  {mark} {verb} {:.2}s",
            self.started.elapsed().as_secs_f64()
        );
        eprintln!();
    }

    fn label(&self, text: &str) -> String {
        format!("[{}/{}] {}", self.current, self.total, text)
    }

    fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
