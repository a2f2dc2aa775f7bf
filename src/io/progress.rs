//! Phase-by-phase progress display for a generation run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::puzzle::generator::Phase;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Steps shown on the bar: every generation phase plus export
const TOTAL_STEPS: u64 = Phase::ALL.len() as u64 + 1;

/// Single progress bar advancing once per pipeline phase
pub struct ProgressManager {
    bar: ProgressBar,
    started: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress bar drawn to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(TOTAL_STEPS);
        bar.set_style(Self::phase_style());
        Self { bar, started: false }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        let bar = ProgressBar::with_draw_target(Some(TOTAL_STEPS), ProgressDrawTarget::hidden());
        Self { bar, started: false }
    }

    /// Announce the rows x cols puzzle being generated
    pub fn initialize(&self, rows: usize, cols: usize) {
        self.bar.set_prefix(format!("{rows}x{cols}"));
        self.bar.set_position(0);
    }

    /// Advance past the previous phase and show the one starting now
    pub fn start_phase(&mut self, phase: Phase) {
        self.advance(phase.label());
    }

    /// Show the export step
    pub fn start_export(&mut self) {
        self.advance("writing csv");
    }

    /// Number of completed steps
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of steps
    pub const fn total_steps() -> u64 {
        TOTAL_STEPS
    }

    /// Complete the bar and clear it from the terminal
    pub fn finish(&self) {
        self.bar.set_position(TOTAL_STEPS);
        self.bar.finish_and_clear();
    }

    fn advance(&mut self, message: &'static str) {
        if self.started {
            self.bar.inc(1);
        }
        self.started = true;
        self.bar.set_message(message);
    }

    fn phase_style() -> ProgressStyle {
        let template = format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
