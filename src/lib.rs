//! Procedural jigsaw puzzle generation with interlocking tab/blank edges
//!
//! Pieces receive unique prime ids, edges are identified by the product of
//! the two ids they separate, every piece is turned to a random facing, and
//! each shared edge is resolved into one tab and one blank. The result is
//! exported as a full solution listing and a problem listing that reveals a
//! single reference piece.

#![forbid(unsafe_code)]

/// Unique id supply for pieces
pub mod ids;
/// Input/output operations and error handling
pub mod io;
/// Puzzle model and generation phases
pub mod puzzle;

pub use io::error::{PuzzleError, Result};
pub use puzzle::{GenerationConfig, Puzzle, PuzzleGenerator};
