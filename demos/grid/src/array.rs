//! The demo installation: a 16 × 8 grid with a checkerboard of speakers.

use anyhow::Result;

use ba_core::UnitId;
use ba_layout::{GridLayout, Layout, MUSICAL_GROUP, StaticCatalog};

pub const WIDTH:  u32 = 16;
pub const HEIGHT: u32 = 8;

/// Build the grid layout and a catalog whose musical group is every unit on
/// an even `(x + y)` cell.
pub fn build_array() -> Result<(GridLayout, StaticCatalog)> {
    let layout = GridLayout::rectangle(WIDTH, HEIGHT)?;

    let musical: Vec<UnitId> = layout
        .units()
        .filter(|(_, pos)| (pos.x + pos.y) % 2 == 0)
        .map(|(unit, _)| unit)
        .collect();
    debug_assert!(musical.iter().all(|&u| layout.position_of(u).is_some()));

    let catalog = StaticCatalog::new().with_group(MUSICAL_GROUP, musical);
    Ok((layout, catalog))
}
