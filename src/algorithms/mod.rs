pub mod baseline;
pub mod greedy;

pub use self::baseline::baseline_route;
pub use self::greedy::greedy_route;

use thiserror::Error;

/// Errors raised while constructing a picking route
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// A pick-list entry has no shelf in the item-location mapping
    #[error("unknown item in pick list: {0:?}")]
    UnknownItem(String),
}
