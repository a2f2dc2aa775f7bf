//! Edge slot states and piece sides

use std::fmt;

/// One of the four sides of a piece, in clockwise order from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Upper side
    Top,
    /// Right-hand side
    Right,
    /// Lower side
    Bottom,
    /// Left-hand side
    Left,
}

impl Side {
    /// All sides in export column order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Side facing this one on the neighbouring piece
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Grid offset `(row, col)` towards the neighbour on this side
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Top => (-1, 0),
            Self::Right => (0, 1),
            Self::Bottom => (1, 0),
            Self::Left => (0, -1),
        }
    }
}

/// Interlock shape of one side of an internal edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Protruding knob
    Tab,
    /// Recess receiving a tab
    Blank,
}

impl EdgeKind {
    /// The shape that interlocks with this one
    pub const fn complement(self) -> Self {
        match self {
            Self::Tab => Self::Blank,
            Self::Blank => Self::Tab,
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab => f.write_str("tab"),
            Self::Blank => f.write_str("blank"),
        }
    }
}

/// State of a single edge slot through the generation pipeline
///
/// Slots start as [`EdgeSlot::Raw`] (or [`EdgeSlot::Boundary`] on the grid
/// perimeter) and become [`EdgeSlot::Tagged`] once the edge is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSlot {
    /// No neighbour on this side
    Boundary,
    /// Shared edge id before tab/blank resolution
    Raw(u64),
    /// Resolved edge with its interlock shape
    Tagged {
        /// Shape of this side of the edge
        kind: EdgeKind,
        /// Raw id shared with the neighbouring slot
        edge_id: u64,
    },
}

impl EdgeSlot {
    /// Whether this slot lies on the grid perimeter
    pub const fn is_boundary(&self) -> bool {
        matches!(self, Self::Boundary)
    }

    /// Raw id of the shared edge, tagged or not
    pub const fn edge_id(&self) -> Option<u64> {
        match self {
            Self::Boundary => None,
            Self::Raw(edge_id) | Self::Tagged { edge_id, .. } => Some(*edge_id),
        }
    }

    /// Edge id if the slot still awaits resolution
    pub const fn raw_id(&self) -> Option<u64> {
        match self {
            Self::Raw(edge_id) => Some(*edge_id),
            _ => None,
        }
    }

    /// Interlock shape if the slot has been resolved
    pub const fn kind(&self) -> Option<EdgeKind> {
        match self {
            Self::Tagged { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Renders boundary slots as an empty string and tagged slots as `kind-id`
impl fmt::Display for EdgeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boundary => Ok(()),
            Self::Raw(edge_id) => write!(f, "{edge_id}"),
            Self::Tagged { kind, edge_id } => write!(f, "{kind}-{edge_id}"),
        }
    }
}
