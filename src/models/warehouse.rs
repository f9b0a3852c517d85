// Warehouse model representing the simulated grid and item placement

use crate::models::{GridPoint, ItemId, ItemLocationMap};
use std::collections::HashSet;

/// A rectangular warehouse grid with shelf cells and stored items
///
/// The shelf set is used only for bounds checks and visualization; the
/// routers read nothing but the item-to-cell mapping and the packing
/// station. Distances are unobstructed grid distances, so shelves are
/// never treated as obstacles.
#[derive(Debug, Clone)]
pub struct Warehouse {
    /// Grid width in cells
    pub width: u32,

    /// Grid height in cells
    pub height: u32,

    /// Cells occupied by shelves
    pub shelves: HashSet<GridPoint>,

    /// Mapping from item identifier to its shelf cell
    pub item_locations: ItemLocationMap,

    /// Cell where every picking tour starts and ends
    pub packing_station: GridPoint,
}

impl Warehouse {
    /// Creates a new warehouse from its parts
    pub fn new(
        width: u32,
        height: u32,
        shelves: HashSet<GridPoint>,
        item_locations: ItemLocationMap,
        packing_station: GridPoint,
    ) -> Self {
        Self {
            width,
            height,
            shelves,
            item_locations,
            packing_station,
        }
    }

    /// Checks whether a cell lies inside the grid
    pub fn contains(&self, point: &GridPoint) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Checks whether a cell holds a shelf
    pub fn is_shelf(&self, point: &GridPoint) -> bool {
        self.shelves.contains(point)
    }

    /// Looks up the shelf cell of an item, if the item is stored here
    pub fn item_location(&self, item: &str) -> Option<&GridPoint> {
        self.item_locations.get(item)
    }

    /// Number of distinct stored items
    pub fn item_count(&self) -> usize {
        self.item_locations.len()
    }

    /// All item identifiers in unspecified order
    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.item_locations.keys()
    }
}
