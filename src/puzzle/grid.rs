//! Grid construction with neighbour-product edge ids
//!
//! Piece ids are laid out column-major (`index(r, c) = c * rows + r`). Each
//! internal edge id is the product of the two ids it separates, so both
//! neighbours compute the same value independently and, with prime ids, no
//! two edges collide.

use ndarray::{Array2, ShapeBuilder};

use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::puzzle::board::Puzzle;
use crate::puzzle::edge::{EdgeSlot, Side};
use crate::puzzle::piece::Piece;

/// Build an unrotated, untagged puzzle from `rows * cols` ids
///
/// # Errors
///
/// Returns an error if:
/// - `ids` does not hold exactly `rows * cols` values
/// - A neighbour product overflows `u64`
pub fn build_grid(rows: usize, cols: usize, ids: &[u64]) -> Result<Puzzle> {
    let expected = rows
        .checked_mul(cols)
        .ok_or_else(|| invalid_parameter("ids", &ids.len(), &"rows * cols overflows usize"))?;
    if ids.len() != expected {
        return Err(invalid_parameter(
            "ids",
            &ids.len(),
            &format!("expected exactly {expected} ids for a {rows}x{cols} grid"),
        ));
    }

    let layout = Array2::from_shape_vec((rows, cols).f(), ids.to_vec())
        .map_err(|e| invalid_parameter("ids", &ids.len(), &e))?;

    let mut pieces = Vec::with_capacity(expected);
    for row in 0..rows {
        for col in 0..cols {
            let id = id_at(&layout, row, col)?;
            let mut piece = Piece::new(id, row, col);
            for side in Side::ALL {
                *piece.edges.get_mut(side) = match neighbour(&layout, row, col, side) {
                    Some(other) => EdgeSlot::Raw(edge_id(id, other)?),
                    None => EdgeSlot::Boundary,
                };
            }
            pieces.push(piece);
        }
    }

    Ok(Puzzle::from_pieces(rows, cols, pieces))
}

/// Raw id of the edge between two pieces
///
/// # Errors
///
/// Returns [`PuzzleError::EdgeIdOverflow`] if the product does not fit `u64`
pub fn edge_id(left: u64, right: u64) -> Result<u64> {
    left
        .checked_mul(right)
        .ok_or(PuzzleError::EdgeIdOverflow { left, right })
}

fn id_at(layout: &Array2<u64>, row: usize, col: usize) -> Result<u64> {
    layout.get((row, col)).copied().ok_or_else(|| {
        invalid_parameter("ids", &format!("({row}, {col})"), &"cell outside id layout")
    })
}

/// Id of the neighbour on `side`, if it lies inside the grid
fn neighbour(layout: &Array2<u64>, row: usize, col: usize, side: Side) -> Option<u64> {
    let (d_row, d_col) = side.offset();
    let n_row = row.checked_add_signed(d_row)?;
    let n_col = col.checked_add_signed(d_col)?;
    layout.get((n_row, n_col)).copied()
}
