//! Clockwise piece rotation and random facing assignment

use rand::Rng;

use crate::puzzle::board::Puzzle;
use crate::puzzle::piece::{Edges, Piece};

/// Rotate a piece one quarter turn clockwise
///
/// The side that faced right now faces up, and so on around the piece.
/// Four rotations return the original piece.
pub const fn rotate_clockwise(piece: &Piece) -> Piece {
    let edges = piece.edges;
    Piece {
        id: piece.id,
        orientation: piece.orientation.clockwise(),
        row: piece.row,
        col: piece.col,
        edges: Edges {
            top: edges.right,
            right: edges.bottom,
            bottom: edges.left,
            left: edges.top,
        },
    }
}

/// Rotate a piece clockwise `turns` times
pub fn rotate_times(piece: &Piece, turns: usize) -> Piece {
    (0..turns).fold(*piece, |current, _| rotate_clockwise(&current))
}

/// Give every piece an independent uniform 0 to 3 quarter turns
pub fn rotate_randomly<R: Rng + ?Sized>(puzzle: Puzzle, rng: &mut R) -> Puzzle {
    let (rows, cols) = (puzzle.rows(), puzzle.cols());
    let pieces = puzzle
        .into_pieces()
        .iter()
        .map(|piece| rotate_times(piece, rng.random_range(0..4)))
        .collect();
    Puzzle::from_pieces(rows, cols, pieces)
}
