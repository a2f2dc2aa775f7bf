//! End-to-end puzzle generation pipeline
//!
//! Ids are supplied and shuffled, laid out on the grid, each piece is turned
//! to a random facing, and finally every shared edge is tagged. A single
//! seeded generator drives every random choice.

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::ids::supplier::{IdSupplier, PrimeSupplier, shuffled_ids};
use crate::io::configuration::MAX_PIECES;
use crate::io::error::{Result, invalid_dimension};
use crate::puzzle::board::Puzzle;
use crate::puzzle::grid::build_grid;
use crate::puzzle::resolver::resolve_edges;
use crate::puzzle::rotation::rotate_randomly;
use crate::puzzle::validation::verify_interlocks;

/// Validated puzzle dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    rows: usize,
    cols: usize,
}

impl GenerationConfig {
    /// Validate grid dimensions
    ///
    /// # Errors
    ///
    /// Returns [`crate::PuzzleError::InvalidDimension`] if either dimension
    /// is zero or the piece count exceeds [`MAX_PIECES`]
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_positive("rows", rows)?;
        check_positive("cols", cols)?;

        let pieces = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if pieces > MAX_PIECES {
            let (parameter, value) = if cols > rows {
                ("cols", cols)
            } else {
                ("rows", rows)
            };
            return Err(invalid_dimension(
                parameter,
                i64::try_from(value).unwrap_or(i64::MAX),
                &format!("{rows}x{cols} grid exceeds {MAX_PIECES} pieces"),
            ));
        }

        Ok(Self { rows, cols })
    }

    /// Validate signed dimensions as typed on the command line
    ///
    /// # Errors
    ///
    /// Returns [`crate::PuzzleError::InvalidDimension`] for non-positive
    /// values, then applies the checks of [`GenerationConfig::new`]
    pub fn from_signed(rows: i64, cols: i64) -> Result<Self> {
        Self::new(to_dimension("rows", rows)?, to_dimension("cols", cols)?)
    }

    /// Number of grid rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of pieces
    pub const fn piece_count(&self) -> usize {
        self.rows * self.cols
    }
}

fn check_positive(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_dimension(parameter, 0, &"must be at least 1"));
    }
    Ok(())
}

fn to_dimension(parameter: &'static str, value: i64) -> Result<usize> {
    if value < 1 {
        return Err(invalid_dimension(parameter, value, &"must be at least 1"));
    }
    usize::try_from(value)
        .map_err(|_| invalid_dimension(parameter, value, &"does not fit the platform's usize"))
}

/// Stage of the pipeline about to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Supplying and shuffling piece ids
    SupplyIds,
    /// Laying out pieces and computing raw edge ids
    BuildGrid,
    /// Turning pieces to random facings
    Rotate,
    /// Tagging every shared edge as tab or blank
    Resolve,
}

impl Phase {
    /// Pipeline stages in execution order
    pub const ALL: [Self; 4] = [Self::SupplyIds, Self::BuildGrid, Self::Rotate, Self::Resolve];

    /// Short human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::SupplyIds => "supplying ids",
            Self::BuildGrid => "building grid",
            Self::Rotate => "rotating pieces",
            Self::Resolve => "resolving edges",
        }
    }
}

/// Seeded puzzle generator
///
/// Owns the random source; generating twice from the same seed yields the
/// same puzzle.
pub struct PuzzleGenerator<S: IdSupplier = PrimeSupplier> {
    config: GenerationConfig,
    supplier: S,
    rng: StdRng,
}

impl PuzzleGenerator<PrimeSupplier> {
    /// Create a generator backed by prime ids
    pub fn new(config: GenerationConfig, seed: u64) -> Self {
        Self::with_supplier(config, PrimeSupplier::new(), seed)
    }
}

impl<S: IdSupplier> PuzzleGenerator<S> {
    /// Create a generator with a custom id supplier
    pub fn with_supplier(config: GenerationConfig, supplier: S, seed: u64) -> Self {
        Self {
            config,
            supplier,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Dimensions this generator builds
    pub const fn config(&self) -> GenerationConfig {
        self.config
    }

    /// Random source shared by generation and export redaction
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Generate a complete, resolved puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id supplier is exhausted
    /// - A neighbour product overflows
    /// - An internal edge is not shared by exactly two slots
    pub fn generate(&mut self) -> Result<Puzzle> {
        self.generate_with(|_| {})
    }

    /// Generate a puzzle, reporting each phase before it runs
    ///
    /// # Errors
    ///
    /// Same as [`PuzzleGenerator::generate`]
    pub fn generate_with<F: FnMut(Phase)>(&mut self, mut on_phase: F) -> Result<Puzzle> {
        let (rows, cols) = (self.config.rows, self.config.cols);
        info!(rows, cols, "generating puzzle");

        on_phase(Phase::SupplyIds);
        let ids = shuffled_ids(&self.supplier, self.config.piece_count(), &mut self.rng)?;

        on_phase(Phase::BuildGrid);
        let built = build_grid(rows, cols, &ids)?;
        debug!(
            internal_edges = built.internal_edge_count(),
            boundary_slots = built.boundary_slot_count(),
            "grid built"
        );

        on_phase(Phase::Rotate);
        let rotated = rotate_randomly(built, &mut self.rng);

        on_phase(Phase::Resolve);
        let resolved = resolve_edges(rotated, &mut self.rng)?;
        verify_interlocks(&resolved)?;

        info!(
            pieces = resolved.len(),
            internal_edges = resolved.internal_edge_count(),
            "puzzle generated"
        );
        Ok(resolved)
    }
}
