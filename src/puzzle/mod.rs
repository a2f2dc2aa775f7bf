//! Puzzle model and generation phases
//!
//! This module contains:
//! - Piece, edge and puzzle data structures
//! - Grid construction, rotation and edge resolution
//! - Structural validation and the end-to-end generator

/// Ordered piece collection
pub mod board;
/// Edge slot states and sides
pub mod edge;
/// Generation pipeline and dimension validation
pub mod generator;
/// Grid construction with neighbour-product edge ids
pub mod grid;
/// Pieces and orientation
pub mod piece;
/// Tab/blank resolution of shared edges
pub mod resolver;
/// Clockwise rotation of pieces
pub mod rotation;
/// Structural checks on generated puzzles
pub mod validation;

pub use board::Puzzle;
pub use edge::{EdgeKind, EdgeSlot, Side};
pub use generator::{GenerationConfig, Phase, PuzzleGenerator};
pub use piece::{Edges, Orientation, Piece};
