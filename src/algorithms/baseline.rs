// Baseline router: visit pick-list items in the order they were requested

use crate::algorithms::RoutingError;
use crate::models::{GridPoint, ItemId, ItemLocationMap, PickRoute};
use crate::utils::distance::manhattan_distance;

/// Builds the reference route that walks the pick list in input order
///
/// Starts at `start`, visits the shelf of every requested item strictly in
/// pick-list order, then returns to `start`. No reordering happens, which
/// makes this the yardstick the greedy router is measured against.
///
/// An empty pick list yields the degenerate closed loop `[start, start]`
/// with distance 0. Fails with [`RoutingError::UnknownItem`] if any entry
/// is missing from `item_locations`.
pub fn baseline_route(
    pick_list: &[ItemId],
    item_locations: &ItemLocationMap,
    start: GridPoint,
) -> Result<PickRoute, RoutingError> {
    let mut stops = Vec::with_capacity(pick_list.len() + 2);
    stops.push(start);

    let mut total_distance = 0;
    let mut current = start;

    for item in pick_list {
        let next = *item_locations
            .get(item)
            .ok_or_else(|| RoutingError::UnknownItem(item.clone()))?;
        total_distance += manhattan_distance(&current, &next);
        stops.push(next);
        current = next;
    }

    total_distance += manhattan_distance(&current, &start);
    stops.push(start);

    Ok(PickRoute::new(stops, total_distance))
}
