// Distance calculation utilities

use crate::models::{Distance, GridPoint};

/// Calculate the Manhattan distance between two grid cells
///
/// Models unobstructed axis-aligned travel on the grid; shelves are not
/// treated as obstacles. Both routers use this metric exclusively.
pub fn manhattan_distance(a: &GridPoint, b: &GridPoint) -> Distance {
    (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as Distance
}
