// Public modules
pub mod algorithms;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::{baseline_route, greedy_route, RoutingError};
pub use models::{GridPoint, PickRoute, RouteComparison, Warehouse};
