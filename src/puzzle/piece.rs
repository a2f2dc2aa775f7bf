//! Puzzle pieces and their orientation

use std::fmt;

use crate::puzzle::edge::{EdgeSlot, Side};

/// Facing of a piece relative to its solved orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Solved facing
    #[default]
    N,
    /// One clockwise quarter turn
    E,
    /// Half turn
    S,
    /// Three clockwise quarter turns
    W,
}

impl Orientation {
    /// Next orientation in the cycle N, E, S, W
    pub const fn clockwise(self) -> Self {
        match self {
            Self::N => Self::E,
            Self::E => Self::S,
            Self::S => Self::W,
            Self::W => Self::N,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::N => "N",
            Self::E => "E",
            Self::S => "S",
            Self::W => "W",
        };
        f.write_str(label)
    }
}

/// The four edge slots of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edges {
    /// Upper edge
    pub top: EdgeSlot,
    /// Right-hand edge
    pub right: EdgeSlot,
    /// Lower edge
    pub bottom: EdgeSlot,
    /// Left-hand edge
    pub left: EdgeSlot,
}

impl Edges {
    /// All four slots set to boundary
    pub const fn boundary() -> Self {
        Self {
            top: EdgeSlot::Boundary,
            right: EdgeSlot::Boundary,
            bottom: EdgeSlot::Boundary,
            left: EdgeSlot::Boundary,
        }
    }

    /// Slot on the given side
    pub const fn get(&self, side: Side) -> EdgeSlot {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Mutable slot on the given side
    pub const fn get_mut(&mut self, side: Side) -> &mut EdgeSlot {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }

    /// Slots paired with their side, top first
    pub fn iter(&self) -> impl Iterator<Item = (Side, EdgeSlot)> + '_ {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
    }
}

/// A single grid cell of the puzzle
///
/// `row` and `col` are the solved position; they never change once the
/// piece is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Unique id of the piece
    pub id: u64,
    /// Current rotation state
    pub orientation: Orientation,
    /// Solved row
    pub row: usize,
    /// Solved column
    pub col: usize,
    /// Edge slots as currently facing
    pub edges: Edges,
}

impl Piece {
    /// Unrotated piece with all-boundary edges
    pub const fn new(id: u64, row: usize, col: usize) -> Self {
        Self {
            id,
            orientation: Orientation::N,
            row,
            col,
            edges: Edges::boundary(),
        }
    }

    /// Slot on the given side
    pub const fn edge(&self, side: Side) -> EdgeSlot {
        self.edges.get(side)
    }

    /// Number of boundary slots
    pub fn boundary_count(&self) -> usize {
        self.edges.iter().filter(|(_, slot)| slot.is_boundary()).count()
    }
}
