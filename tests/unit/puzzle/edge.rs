//! Tests for sides, interlock shapes and edge slot states

#[cfg(test)]
mod tests {
    use puzzgen::puzzle::{EdgeKind, EdgeSlot, Side};

    // Tests opposite sides pair up
    // Verified by mapping Top to Top
    #[test]
    fn test_side_opposite() {
        for side in Side::ALL {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    // Tests offsets of opposite sides cancel
    // Verified by flipping the Bottom offset
    #[test]
    fn test_side_offsets_cancel() {
        for side in Side::ALL {
            let (a_row, a_col) = side.offset();
            let (b_row, b_col) = side.opposite().offset();
            assert_eq!((a_row + b_row, a_col + b_col), (0, 0));
        }
        assert_eq!(Side::Top.offset(), (-1, 0));
    }

    // Tests tab and blank complement each other
    // Verified by returning self from complement
    #[test]
    fn test_kind_complement() {
        assert_eq!(EdgeKind::Tab.complement(), EdgeKind::Blank);
        assert_eq!(EdgeKind::Blank.complement(), EdgeKind::Tab);
    }

    // Tests slot accessors per state
    // Verified by returning the id from raw_id for tagged slots
    #[test]
    fn test_slot_accessors() {
        let tagged = EdgeSlot::Tagged {
            kind: EdgeKind::Tab,
            edge_id: 21,
        };

        assert!(EdgeSlot::Boundary.is_boundary());
        assert_eq!(EdgeSlot::Boundary.edge_id(), None);
        assert_eq!(EdgeSlot::Raw(15).edge_id(), Some(15));
        assert_eq!(EdgeSlot::Raw(15).raw_id(), Some(15));
        assert_eq!(EdgeSlot::Raw(15).kind(), None);
        assert_eq!(tagged.edge_id(), Some(21));
        assert_eq!(tagged.raw_id(), None);
        assert_eq!(tagged.kind(), Some(EdgeKind::Tab));
    }

    // Tests export rendering of every slot state
    // Verified by rendering boundary as "None"
    #[test]
    fn test_slot_display() {
        assert_eq!(EdgeSlot::Boundary.to_string(), "");
        assert_eq!(EdgeSlot::Raw(77).to_string(), "77");
        assert_eq!(
            EdgeSlot::Tagged {
                kind: EdgeKind::Tab,
                edge_id: 77
            }
            .to_string(),
            "tab-77"
        );
        assert_eq!(
            EdgeSlot::Tagged {
                kind: EdgeKind::Blank,
                edge_id: 15
            }
            .to_string(),
            "blank-15"
        );
    }
}
