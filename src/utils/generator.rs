// Seedable random generation of warehouses and pick lists
//
// All randomness flows through an explicit seed, so any simulation run can
// be reproduced exactly. Nothing here keeps process-wide state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use thiserror::Error;

use crate::models::{GridPoint, ItemId, ItemLocationMap, Warehouse};

/// Parameters for warehouse generation
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Grid width in cells
    pub width: u32,

    /// Grid height in cells
    pub height: u32,

    /// Number of shelf cells to place
    pub num_shelves: usize,

    /// Number of stored items; two items are assigned per shelf
    pub num_items: usize,

    /// Length of the generated pick list
    pub pick_list_len: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            num_shelves: 50,
            num_items: 100,
            pick_list_len: 10,
        }
    }
}

/// Errors raised for configurations the generator cannot satisfy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// More shelves requested than grid cells available
    #[error("cannot place {requested} shelves on a grid of {capacity} cells")]
    TooManyShelves { requested: usize, capacity: usize },

    /// Two items go on each shelf, so item count is capped at twice the
    /// shelf count
    #[error("cannot assign {num_items} items to {num_shelves} shelves (two items per shelf)")]
    NotEnoughShelves {
        num_items: usize,
        num_shelves: usize,
    },

    /// A non-empty pick list cannot be drawn from zero items
    #[error("pick list of length {0} requested but the warehouse stores no items")]
    NoItemsToPick(usize),
}

/// Generates a warehouse and a pick list from an explicit seed
///
/// Shelf cells are sampled without replacement, items `item_0 .. item_{n-1}`
/// are assigned pairwise to shelves, and the pick list draws items uniformly
/// with replacement, so duplicates are expected. The same seed and config
/// always produce the same warehouse and pick list.
pub fn generate_warehouse(
    config: &GeneratorConfig,
    seed: u64,
) -> Result<(Warehouse, Vec<ItemId>), GeneratorError> {
    let capacity = (config.width as usize) * (config.height as usize);
    if config.num_shelves > capacity {
        return Err(GeneratorError::TooManyShelves {
            requested: config.num_shelves,
            capacity,
        });
    }
    if config.num_items > config.num_shelves * 2 {
        return Err(GeneratorError::NotEnoughShelves {
            num_items: config.num_items,
            num_shelves: config.num_shelves,
        });
    }
    if config.num_items == 0 && config.pick_list_len > 0 {
        return Err(GeneratorError::NoItemsToPick(config.pick_list_len));
    }

    let mut rng = StdRng::seed_from_u64(seed);

    // Sample distinct shelf cells from the full grid
    let shelf_cells: Vec<GridPoint> = rand::seq::index::sample(&mut rng, capacity, config.num_shelves)
        .into_iter()
        .map(|cell| {
            GridPoint::new(
                (cell % config.width as usize) as u32,
                (cell / config.width as usize) as u32,
            )
        })
        .collect();

    // Two items per shelf, in item-index order
    let mut item_locations = ItemLocationMap::new();
    for i in 0..config.num_items {
        item_locations.insert(format!("item_{}", i), shelf_cells[i / 2]);
    }

    let pick_list: Vec<ItemId> = (0..config.pick_list_len)
        .map(|_| format!("item_{}", rng.gen_range(0..config.num_items)))
        .collect();

    let shelves: HashSet<GridPoint> = shelf_cells.into_iter().collect();
    let warehouse = Warehouse::new(
        config.width,
        config.height,
        shelves,
        item_locations,
        GridPoint::new(0, 0),
    );

    Ok((warehouse, pick_list))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_shape() {
        let (warehouse, pick_list) =
            generate_warehouse(&GeneratorConfig::default(), 42).unwrap();

        assert_eq!(warehouse.shelves.len(), 50);
        assert_eq!(warehouse.item_count(), 100);
        assert_eq!(pick_list.len(), 10);
        assert!(warehouse
            .shelves
            .iter()
            .all(|cell| warehouse.contains(cell)));
    }

    #[test]
    fn test_same_seed_reproduces() {
        let config = GeneratorConfig::default();
        let (w1, p1) = generate_warehouse(&config, 7).unwrap();
        let (w2, p2) = generate_warehouse(&config, 7).unwrap();

        assert_eq!(w1.shelves, w2.shelves);
        assert_eq!(w1.item_locations, w2.item_locations);
        assert_eq!(p1, p2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = GeneratorConfig::default();
        let (w1, _) = generate_warehouse(&config, 1).unwrap();
        let (w2, _) = generate_warehouse(&config, 2).unwrap();

        assert_ne!(w1.shelves, w2.shelves);
    }

    #[test]
    fn test_items_assigned_pairwise() {
        let config = GeneratorConfig {
            width: 4,
            height: 4,
            num_shelves: 3,
            num_items: 6,
            pick_list_len: 0,
        };
        let (warehouse, _) = generate_warehouse(&config, 0).unwrap();

        assert_eq!(
            warehouse.item_location("item_0"),
            warehouse.item_location("item_1")
        );
        assert_eq!(
            warehouse.item_location("item_4"),
            warehouse.item_location("item_5")
        );
    }

    #[test]
    fn test_pick_list_entries_resolve() {
        let (warehouse, pick_list) =
            generate_warehouse(&GeneratorConfig::default(), 99).unwrap();

        for item in &pick_list {
            assert!(warehouse.item_location(item).is_some());
        }
    }

    #[test]
    fn test_rejects_too_many_shelves() {
        let config = GeneratorConfig {
            width: 3,
            height: 3,
            num_shelves: 10,
            num_items: 0,
            pick_list_len: 0,
        };

        assert_eq!(
            generate_warehouse(&config, 0).unwrap_err(),
            GeneratorError::TooManyShelves {
                requested: 10,
                capacity: 9,
            }
        );
    }

    #[test]
    fn test_rejects_items_exceeding_shelf_pairs() {
        let config = GeneratorConfig {
            num_shelves: 40,
            num_items: 100,
            ..GeneratorConfig::default()
        };

        assert_eq!(
            generate_warehouse(&config, 0).unwrap_err(),
            GeneratorError::NotEnoughShelves {
                num_items: 100,
                num_shelves: 40,
            }
        );
    }

    #[test]
    fn test_rejects_picks_without_items() {
        let config = GeneratorConfig {
            num_items: 0,
            pick_list_len: 5,
            ..GeneratorConfig::default()
        };

        assert_eq!(
            generate_warehouse(&config, 0).unwrap_err(),
            GeneratorError::NoItemsToPick(5)
        );
    }
}
