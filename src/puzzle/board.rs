//! Ordered piece collection owned by a single puzzle

use crate::puzzle::edge::EdgeSlot;
use crate::puzzle::piece::Piece;

/// All pieces of a rows x cols puzzle, stored row-major
///
/// Each generation phase consumes a puzzle and yields a new one, so the
/// output of every phase can be inspected on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    rows: usize,
    cols: usize,
    pieces: Vec<Piece>,
}

impl Puzzle {
    /// Wrap pieces produced by one of the generation phases
    pub const fn from_pieces(rows: usize, cols: usize, pieces: Vec<Piece>) -> Self {
        Self { rows, cols, pieces }
    }

    /// Number of grid rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Pieces in row-major order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Number of pieces
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether the puzzle holds no pieces
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Piece whose solved position is `(row, col)`
    pub fn piece_at(&self, row: usize, col: usize) -> Option<&Piece> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.pieces.get(row * self.cols + col)
    }

    /// Consume the puzzle, yielding its pieces
    pub fn into_pieces(self) -> Vec<Piece> {
        self.pieces
    }

    /// Number of distinct internal edges
    ///
    /// Each internal edge is held by two slots.
    pub fn internal_edge_count(&self) -> usize {
        self.slots().filter(|slot| !slot.is_boundary()).count() / 2
    }

    /// Number of slots on the grid perimeter
    pub fn boundary_slot_count(&self) -> usize {
        self.slots().filter(EdgeSlot::is_boundary).count()
    }

    fn slots(&self) -> impl Iterator<Item = EdgeSlot> + '_ {
        self.pieces
            .iter()
            .flat_map(|piece| piece.edges.iter().map(|(_, slot)| slot))
    }
}

impl<'a> IntoIterator for &'a Puzzle {
    type Item = &'a Piece;
    type IntoIter = std::slice::Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}
