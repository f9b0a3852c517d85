// Models module - exports all model types

mod grid_point;
mod route;
mod warehouse;

// Re-export model types
pub use self::grid_point::GridPoint;
pub use self::route::{PickRoute, RouteComparison};
pub use self::warehouse::Warehouse;

use std::collections::HashMap;

// Common type aliases for improved code readability
pub type Distance = u64;
pub type ItemId = String;
pub type ItemLocationMap = HashMap<ItemId, GridPoint>;
