//! Solution and problem views of a puzzle and their CSV serialization

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::info;

use crate::io::configuration::{CSV_HEADER, PROBLEM_FILE_NAME, SOLUTION_FILE_NAME};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::puzzle::board::Puzzle;
use crate::puzzle::piece::{Edges, Orientation, Piece};

/// One exported row; solution fields are `None` when redacted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    /// Piece id
    pub id: u64,
    /// Edge slots as the piece currently faces
    pub edges: Edges,
    /// Rotation state, hidden in the problem view
    pub orientation: Option<Orientation>,
    /// Solved row, hidden in the problem view
    pub row: Option<usize>,
    /// Solved column, hidden in the problem view
    pub col: Option<usize>,
}

impl PieceRecord {
    /// Fully populated record for a piece
    pub const fn solved(piece: &Piece) -> Self {
        Self {
            id: piece.id,
            edges: piece.edges,
            orientation: Some(piece.orientation),
            row: Some(piece.row),
            col: Some(piece.col),
        }
    }

    /// Record with orientation and position removed
    pub const fn redacted(piece: &Piece) -> Self {
        Self {
            id: piece.id,
            edges: piece.edges,
            orientation: None,
            row: None,
            col: None,
        }
    }

    /// Whether orientation and position are present
    pub const fn is_solved(&self) -> bool {
        self.orientation.is_some() && self.row.is_some() && self.col.is_some()
    }

    /// Fields in [`CSV_HEADER`] order; absent values are empty strings
    pub fn to_fields(&self) -> [String; 8] {
        [
            self.id.to_string(),
            self.edges.top.to_string(),
            self.edges.right.to_string(),
            self.edges.bottom.to_string(),
            self.edges.left.to_string(),
            optional(self.orientation),
            optional(self.row),
            optional(self.col),
        ]
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// The two exported listings of one puzzle
#[derive(Debug, Clone)]
pub struct PuzzleViews {
    /// Every field populated
    pub solution: Vec<PieceRecord>,
    /// Only the reference piece keeps orientation and position
    pub problem: Vec<PieceRecord>,
    /// Index of the reference piece in both listings
    pub reference_index: usize,
}

impl PuzzleViews {
    /// Build both views, picking the reference piece uniformly at random
    ///
    /// # Errors
    ///
    /// Returns [`crate::PuzzleError::InvalidParameter`] if the puzzle has
    /// no pieces
    pub fn new<R: Rng + ?Sized>(puzzle: &Puzzle, rng: &mut R) -> Result<Self> {
        if puzzle.is_empty() {
            return Err(invalid_parameter(
                "puzzle",
                &0,
                &"cannot pick a reference piece from an empty puzzle",
            ));
        }
        let reference_index = rng.random_range(0..puzzle.len());
        Self::with_reference(puzzle, reference_index)
    }

    /// Build both views around a known reference piece
    ///
    /// # Errors
    ///
    /// Returns [`crate::PuzzleError::InvalidParameter`] if `reference_index`
    /// does not name a piece of the puzzle
    pub fn with_reference(puzzle: &Puzzle, reference_index: usize) -> Result<Self> {
        if reference_index >= puzzle.len() {
            return Err(invalid_parameter(
                "reference_index",
                &reference_index,
                &format!("puzzle has {} pieces", puzzle.len()),
            ));
        }

        let solution = puzzle.pieces().iter().map(PieceRecord::solved).collect();
        let problem = puzzle
            .pieces()
            .iter()
            .enumerate()
            .map(|(index, piece)| {
                if index == reference_index {
                    PieceRecord::solved(piece)
                } else {
                    PieceRecord::redacted(piece)
                }
            })
            .collect();

        Ok(Self {
            solution,
            problem,
            reference_index,
        })
    }
}

/// Write records as CSV with a header row
///
/// # Errors
///
/// Returns [`crate::PuzzleError::Export`] if serialization or flushing fails
pub fn write_records<W: Write>(writer: W, records: &[PieceRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(record.to_fields())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the solution view, a blank line, then the problem view
///
/// # Errors
///
/// Returns an error if either listing cannot be serialized or written
pub fn write_views<W: Write>(mut writer: W, views: &PuzzleViews) -> Result<()> {
    write_records(&mut writer, &views.solution)?;
    writeln!(writer)?;
    write_records(&mut writer, &views.problem)
}

/// Write records to a CSV file, replacing any existing file
///
/// # Errors
///
/// Returns an error naming `path` if the file cannot be created or written
pub fn write_csv_file(path: &Path, records: &[PieceRecord]) -> Result<()> {
    let file = File::create(path).with_path(path, "create")?;
    write_records(BufWriter::new(file), records).with_path(path, "write")
}

/// Locations of the two written views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// Fully populated listing
    pub solution: PathBuf,
    /// Redacted listing
    pub problem: PathBuf,
}

impl ExportPaths {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            solution: dir.join(SOLUTION_FILE_NAME),
            problem: dir.join(PROBLEM_FILE_NAME),
        }
    }
}

/// Write both views into `dir`, creating the directory if needed
///
/// # Errors
///
/// Returns an error if the directory or either file cannot be written
pub fn export_views(dir: &Path, views: &PuzzleViews) -> Result<ExportPaths> {
    std::fs::create_dir_all(dir).with_path(dir, "create directory")?;

    let paths = ExportPaths::in_dir(dir);
    write_csv_file(&paths.solution, &views.solution)?;
    write_csv_file(&paths.problem, &views.problem)?;

    info!(
        solution = %paths.solution.display(),
        problem = %paths.problem.display(),
        reference_index = views.reference_index,
        "puzzle exported"
    );
    Ok(paths)
}
