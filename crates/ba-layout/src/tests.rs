//! Unit tests for ba-layout.

use ba_core::{GridPos, UnitId};

use crate::{GridLayout, GridLayoutBuilder, Layout, LayoutError, MUSICAL_GROUP, StaticCatalog, UnitCatalog};

#[cfg(test)]
mod grid_tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn rectangle_is_row_major() {
        let layout = GridLayout::rectangle(4, 3).unwrap();
        assert_eq!(layout.len(), 12);
        assert_eq!(layout.width(), 4);
        assert_eq!(layout.height(), 3);
        assert_eq!(layout.position_of(UnitId(0)), Some(GridPos::new(0, 0)));
        assert_eq!(layout.position_of(UnitId(5)), Some(GridPos::new(1, 1)));
        assert_eq!(layout.position_of(UnitId(11)), Some(GridPos::new(3, 2)));
    }

    #[test]
    fn out_of_range_unit_has_no_position() {
        let layout = GridLayout::rectangle(2, 2).unwrap();
        assert_eq!(layout.position_of(UnitId(4)), None);
        assert_eq!(layout.position_of(UnitId::INVALID), None);
    }

    #[test]
    fn unit_at_inverts_position_of() {
        let layout = GridLayout::rectangle(5, 5).unwrap();
        for (unit, pos) in layout.units() {
            assert_eq!(layout.unit_at(pos), Some(unit));
        }
        assert_eq!(layout.unit_at(GridPos::new(-1, 0)), None);
    }

    #[test]
    fn builder_sparse_layout() {
        let mut b = GridLayoutBuilder::new();
        let a = b.add_unit(GridPos::new(0, 0));
        let c = b.add_unit(GridPos::new(10, 10));
        let layout = b.build().unwrap();
        assert_eq!((a, c), (UnitId(0), UnitId(1)));
        assert_eq!(layout.width(), 11);
        assert_eq!(layout.height(), 11);
        assert_eq!(layout.unit_at(GridPos::new(5, 5)), None);
    }

    #[test]
    fn duplicate_position_rejected() {
        let mut b = GridLayoutBuilder::new();
        b.add_unit(GridPos::new(1, 1));
        b.add_unit(GridPos::new(1, 1));
        assert_eq!(
            b.build().unwrap_err(),
            LayoutError::DuplicatePosition {
                pos:    GridPos::new(1, 1),
                first:  UnitId(0),
                second: UnitId(1),
            }
        );
    }

    #[test]
    fn empty_layout_rejected() {
        assert_eq!(GridLayoutBuilder::new().build().unwrap_err(), LayoutError::Empty);
        assert_eq!(GridLayout::rectangle(0, 3).unwrap_err(), LayoutError::Empty);
    }

    #[test]
    fn shared_layout_is_a_layout() {
        let layout: Arc<dyn Layout> = Arc::new(GridLayout::rectangle(2, 1).unwrap());
        assert_eq!(layout.position_of(UnitId(1)), Some(GridPos::new(1, 0)));
    }
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[test]
    fn group_preserves_order() {
        let catalog = StaticCatalog::new().with_group(MUSICAL_GROUP, [UnitId(9), UnitId(2), UnitId(5)]);
        assert_eq!(catalog.units_in_group(MUSICAL_GROUP), vec![UnitId(9), UnitId(2), UnitId(5)]);
    }

    #[test]
    fn unknown_group_is_empty() {
        let catalog = StaticCatalog::new();
        assert!(catalog.units_in_group("percussion").is_empty());
    }

    #[test]
    fn with_group_replaces() {
        let catalog = StaticCatalog::new()
            .with_group("a", [UnitId(1)])
            .with_group("a", [UnitId(2)]);
        assert_eq!(catalog.group_count(), 1);
        assert_eq!(catalog.units_in_group("a"), vec![UnitId(2)]);
    }
}
