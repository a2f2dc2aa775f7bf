//! Structural checks on generated puzzles
//!
//! The generator runs [`verify_interlocks`] after resolution; the remaining
//! checks target individual phases.

use std::collections::{BTreeMap, HashSet};

use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::puzzle::board::Puzzle;
use crate::puzzle::edge::{EdgeKind, Side};

/// Check that no two pieces share an id
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidParameter`] naming the first repeated id
pub fn verify_unique_ids(puzzle: &Puzzle) -> Result<()> {
    let mut seen = HashSet::with_capacity(puzzle.len());
    for piece in puzzle {
        if !seen.insert(piece.id) {
            return Err(invalid_parameter(
                "id",
                &piece.id,
                &"id assigned to more than one piece",
            ));
        }
    }
    Ok(())
}

/// Check that perimeter sides, and only those, are boundary slots
///
/// Only meaningful before rotation, while every piece still faces north.
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidParameter`] describing the first piece
/// whose boundary slots do not match its grid position
pub fn verify_boundaries(puzzle: &Puzzle) -> Result<()> {
    let last_row = puzzle.rows().saturating_sub(1);
    let last_col = puzzle.cols().saturating_sub(1);

    for piece in puzzle {
        for side in Side::ALL {
            let on_perimeter = match side {
                Side::Top => piece.row == 0,
                Side::Right => piece.col == last_col,
                Side::Bottom => piece.row == last_row,
                Side::Left => piece.col == 0,
            };
            if piece.edge(side).is_boundary() != on_perimeter {
                return Err(invalid_parameter(
                    "edges",
                    &format!("piece {} at ({}, {})", piece.id, piece.row, piece.col),
                    &format!("{side:?} slot disagrees with grid perimeter"),
                ));
            }
        }
    }
    Ok(())
}

/// Check that every internal edge is one tab facing one blank
///
/// # Errors
///
/// Returns [`PuzzleError::InvariantViolation`] if an edge is unresolved,
/// held by other than two slots, or tagged with two equal shapes
pub fn verify_interlocks(puzzle: &Puzzle) -> Result<()> {
    let mut kinds: BTreeMap<u64, Vec<Option<EdgeKind>>> = BTreeMap::new();
    for piece in puzzle {
        for (_, slot) in piece.edges.iter() {
            if let Some(edge_id) = slot.edge_id() {
                kinds.entry(edge_id).or_default().push(slot.kind());
            }
        }
    }

    for (edge_id, tags) in kinds {
        let violation = |reason: &str| PuzzleError::InvariantViolation {
            edge_id,
            occurrences: tags.len(),
            reason: reason.to_string(),
        };
        match tags.as_slice() {
            [Some(a), Some(b)] if a.complement() == *b => {}
            [Some(_), Some(_)] => return Err(violation("both sides carry the same shape")),
            [_, _] => return Err(violation("edge left unresolved")),
            _ => return Err(violation("internal edge must be shared by exactly two slots")),
        }
    }
    Ok(())
}
