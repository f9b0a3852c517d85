// Route models for representing picking tours and their comparison

use crate::models::{Distance, GridPoint};
use crate::utils::distance::manhattan_distance;
use serde::Serialize;

/// A complete picking tour: the ordered stops and the travel distance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickRoute {
    /// Sequence of grid cells visited, starting and ending at the start point
    pub stops: Vec<GridPoint>,

    /// Total travel distance over consecutive stops
    pub total_distance: Distance,
}

impl PickRoute {
    /// Creates a new pick route
    pub fn new(stops: Vec<GridPoint>, total_distance: Distance) -> Self {
        Self {
            stops,
            total_distance,
        }
    }

    /// Number of item stops, excluding the start and the return leg
    pub fn stop_count(&self) -> usize {
        self.stops.len().saturating_sub(2)
    }

    /// Whether the route starts and ends at the same cell
    pub fn is_closed_loop(&self) -> bool {
        match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Re-derives the travel distance from the stop sequence
    ///
    /// Returns the sum of the grid metric over consecutive stop pairs; equal
    /// to `total_distance` for any route produced by the routers.
    pub fn recomputed_distance(&self) -> Distance {
        self.stops
            .windows(2)
            .map(|pair| manhattan_distance(&pair[0], &pair[1]))
            .sum()
    }
}

/// Side-by-side result of running both routing strategies on one pick list
#[derive(Debug, Clone, Serialize)]
pub struct RouteComparison {
    /// Route visiting items in pick-list order
    pub baseline: PickRoute,

    /// Route built with the nearest-neighbor heuristic
    pub optimized: PickRoute,
}

impl RouteComparison {
    /// Creates a new comparison from the two routes
    pub fn new(baseline: PickRoute, optimized: PickRoute) -> Self {
        Self {
            baseline,
            optimized,
        }
    }

    /// Percentage improvement of the optimized route over the baseline
    ///
    /// Defined as 0.0 when the baseline distance is 0 (nothing to improve),
    /// so a zero-travel pick list never divides by zero. Negative when the
    /// heuristic loses to the baseline.
    pub fn improvement_percent(&self) -> f64 {
        if self.baseline.total_distance == 0 {
            return 0.0;
        }
        let baseline = self.baseline.total_distance as f64;
        let optimized = self.optimized.total_distance as f64;
        (baseline - optimized) / baseline * 100.0
    }
}
