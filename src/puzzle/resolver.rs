//! Tab/blank resolution of shared edges
//!
//! Every raw edge id must be held by exactly two slots. One of them becomes
//! a tab and the other a blank, chosen uniformly per edge.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::board::Puzzle;
use crate::puzzle::edge::{EdgeKind, EdgeSlot, Side};

/// Location of one edge slot: piece index and side
pub type SlotRef = (usize, Side);

/// Group the slots of every unresolved edge by raw id, in ascending id order
pub fn collect_raw_edges(puzzle: &Puzzle) -> BTreeMap<u64, Vec<SlotRef>> {
    let mut occurrences: BTreeMap<u64, Vec<SlotRef>> = BTreeMap::new();
    for (index, piece) in puzzle.pieces().iter().enumerate() {
        for (side, slot) in piece.edges.iter() {
            if let Some(edge_id) = slot.raw_id() {
                occurrences.entry(edge_id).or_default().push((index, side));
            }
        }
    }
    occurrences
}

/// Tag every raw edge as a complementary tab/blank pair
///
/// Boundary slots and already tagged slots pass through unchanged. Edges
/// are visited in ascending id order so a seeded generator gives the same
/// tags on every run.
///
/// # Errors
///
/// Returns [`PuzzleError::InvariantViolation`] if any raw edge id is held by
/// a number of slots other than two
pub fn resolve_edges<R: Rng + ?Sized>(puzzle: Puzzle, rng: &mut R) -> Result<Puzzle> {
    let occurrences = collect_raw_edges(&puzzle);
    let (rows, cols) = (puzzle.rows(), puzzle.cols());
    let mut pieces = puzzle.into_pieces();

    for (edge_id, slots) in &occurrences {
        let [first, second] = slots.as_slice() else {
            return Err(PuzzleError::InvariantViolation {
                edge_id: *edge_id,
                occurrences: slots.len(),
                reason: "internal edge must be shared by exactly two slots".to_string(),
            });
        };

        let first_kind = if rng.random_bool(0.5) {
            EdgeKind::Tab
        } else {
            EdgeKind::Blank
        };

        for (&(index, side), kind) in [(first, first_kind), (second, first_kind.complement())] {
            let slot = pieces
                .get_mut(index)
                .map(|piece| piece.edges.get_mut(side))
                .ok_or_else(|| PuzzleError::InvariantViolation {
                    edge_id: *edge_id,
                    occurrences: slots.len(),
                    reason: format!("slot refers to missing piece {index}"),
                })?;
            *slot = EdgeSlot::Tagged {
                kind,
                edge_id: *edge_id,
            };
        }
    }

    debug!(edges = occurrences.len(), "resolved internal edges");
    Ok(Puzzle::from_pieces(rows, cols, pieces))
}
