//! Command-line interface for generating a puzzle and writing its CSV views

use crate::io::error::Result;
use crate::io::export::{PuzzleViews, export_views, write_views};
use crate::io::progress::ProgressManager;
use crate::puzzle::generator::{GenerationConfig, PuzzleGenerator};
use clap::Parser;
use rand::Rng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "puzzgen")]
#[command(
    author,
    version,
    about = "Generate a jigsaw puzzle as solution and problem CSV files"
)]
/// Command-line arguments for the puzzle generator
pub struct Cli {
    /// Number of piece rows
    #[arg(short, long, allow_negative_numbers = true)]
    pub rows: i64,

    /// Number of piece columns
    #[arg(short, long, allow_negative_numbers = true)]
    pub cols: i64,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory receiving solution.csv and problem.csv
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Print both views to stdout instead of writing files
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.print
    }

    /// Seed from the command line, or a fresh one from the thread RNG
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}

/// Runs a single generation from parsed CLI arguments
pub struct PuzzleRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl PuzzleRunner {
    /// Create a runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Validate dimensions, generate the puzzle and export both views
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid, generation fails, or
    /// the output cannot be written
    pub fn run(&mut self) -> Result<()> {
        let config = GenerationConfig::from_signed(self.cli.rows, self.cli.cols)?;
        let seed = self.cli.resolve_seed();
        info!(seed, "using seed");

        self.progress_manager.initialize(config.rows(), config.cols());

        let mut generator = PuzzleGenerator::new(config, seed);
        let progress = &mut self.progress_manager;
        let puzzle = generator.generate_with(|phase| progress.start_phase(phase))?;

        self.progress_manager.start_export();
        let views = PuzzleViews::new(&puzzle, generator.rng())?;

        if self.cli.print {
            write_views(std::io::stdout().lock(), &views)?;
        } else {
            export_views(&self.cli.output_dir, &views)?;
        }

        self.progress_manager.finish();
        Ok(())
    }
}
