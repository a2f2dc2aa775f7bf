//! Tests for orientation cycling and piece edge access

#[cfg(test)]
mod tests {
    use puzzgen::puzzle::{EdgeSlot, Edges, Orientation, Piece, Side};

    // Tests the clockwise cycle N, E, S, W
    // Verified by skipping S in the cycle
    #[test]
    fn test_orientation_cycle() {
        assert_eq!(Orientation::N.clockwise(), Orientation::E);
        assert_eq!(Orientation::E.clockwise(), Orientation::S);
        assert_eq!(Orientation::S.clockwise(), Orientation::W);
        assert_eq!(Orientation::W.clockwise(), Orientation::N);
        assert_eq!(Orientation::default(), Orientation::N);
    }

    // Tests orientation labels
    // Verified by rendering full compass names
    #[test]
    fn test_orientation_display() {
        let labels: Vec<String> = [Orientation::N, Orientation::E, Orientation::S, Orientation::W]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(labels, vec!["N", "E", "S", "W"]);
    }

    // Tests side lookup and mutation hit the matching field
    // Verified by swapping Right and Left in get_mut
    #[test]
    fn test_edges_get_and_set() {
        let mut edges = Edges::boundary();
        *edges.get_mut(Side::Right) = EdgeSlot::Raw(6);
        *edges.get_mut(Side::Bottom) = EdgeSlot::Raw(10);

        assert_eq!(edges.right, EdgeSlot::Raw(6));
        assert_eq!(edges.get(Side::Bottom), EdgeSlot::Raw(10));
        assert_eq!(edges.get(Side::Left), EdgeSlot::Boundary);

        let sides: Vec<Side> = edges.iter().map(|(side, _)| side).collect();
        assert_eq!(sides, Side::ALL.to_vec());
    }

    // Tests a new piece is unrotated with four boundary sides
    // Verified by initialising orientation to E
    #[test]
    fn test_new_piece() {
        let piece = Piece::new(13, 2, 4);
        assert_eq!(piece.id, 13);
        assert_eq!((piece.row, piece.col), (2, 4));
        assert_eq!(piece.orientation, Orientation::N);
        assert_eq!(piece.boundary_count(), 4);
        assert_eq!(piece.edge(Side::Top), EdgeSlot::Boundary);
    }
}
