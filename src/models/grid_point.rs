// Grid point model representing a cell in the warehouse grid

use serde::{Deserialize, Serialize};

/// A warehouse grid cell identified by (x, y) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    /// Creates a new grid point at the given coordinates
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(GridPoint::new(3, 4), GridPoint::new(3, 4));
        assert_ne!(GridPoint::new(3, 4), GridPoint::new(4, 3));
    }

    #[test]
    fn test_hashable_by_value() {
        let mut cells = std::collections::HashSet::new();
        cells.insert(GridPoint::new(1, 2));
        cells.insert(GridPoint::new(1, 2));
        assert_eq!(cells.len(), 1);
    }
}
