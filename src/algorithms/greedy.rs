// Greedy router: nearest-neighbor construction over the pick list

use crate::algorithms::RoutingError;
use crate::models::{GridPoint, ItemId, ItemLocationMap, PickRoute};
use crate::utils::distance::manhattan_distance;

/// Builds a route by repeatedly walking to the nearest unvisited item
///
/// Keeps a private working copy of the pick list in which duplicate entries
/// count as distinct pending visits. Each step scans the remaining entries,
/// moves to the one whose shelf is closest to the current position, and
/// removes exactly that one occurrence. Ties go to the earliest remaining
/// pick-list entry, so the result is deterministic. The loop is closed back
/// to `start` at the end.
///
/// This is a nearest-neighbor heuristic, not a TSP solver: there is no
/// lookahead, and a nearby item can pull the walk away from a cluster,
/// producing a tour worse than the baseline. The scan is O(k²) in the
/// pick-list length, which is fine for the small lists this simulation
/// generates but does not scale to large ones.
///
/// Fails with [`RoutingError::UnknownItem`] like the baseline; the caller's
/// pick list is never mutated.
pub fn greedy_route(
    pick_list: &[ItemId],
    item_locations: &ItemLocationMap,
    start: GridPoint,
) -> Result<PickRoute, RoutingError> {
    // Indices into pick_list, so duplicates stay distinct pending visits
    let mut unvisited: Vec<usize> = (0..pick_list.len()).collect();

    let mut stops = Vec::with_capacity(pick_list.len() + 2);
    stops.push(start);

    let mut total_distance = 0;
    let mut current = start;

    while !unvisited.is_empty() {
        let mut best: Option<(usize, GridPoint, u64)> = None;

        for (pos, &idx) in unvisited.iter().enumerate() {
            let item = &pick_list[idx];
            let location = *item_locations
                .get(item)
                .ok_or_else(|| RoutingError::UnknownItem(item.clone()))?;
            let d = manhattan_distance(&current, &location);

            // Strict < keeps the first entry encountered on ties
            match best {
                Some((_, _, best_d)) if d >= best_d => {}
                _ => best = Some((pos, location, d)),
            }
        }

        let (pos, next, d) = best.expect("unvisited is non-empty");
        total_distance += d;
        stops.push(next);
        current = next;
        unvisited.remove(pos);
    }

    total_distance += manhattan_distance(&current, &start);
    stops.push(start);

    Ok(PickRoute::new(stops, total_distance))
}
