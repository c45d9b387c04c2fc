use crate::geo::haversine_km;
use crate::models::route::{Route, RouteStop};
use crate::models::stop::{DeliveryStop, GeoPoint};

/// Orders delivery stops into a single trip that starts and ends at the
/// depot, using a greedy nearest-neighbor pass: from the current position,
/// always drive to the closest unvisited stop.
///
/// The comparison is strict less-than, so stops at equal distance resolve
/// to the one earlier in the input list. Given the same input order the
/// result is bit-for-bit reproducible.
///
/// Not optimal, but O(n²) and more than good enough for daily delivery
/// counts in the tens.
pub fn compute_route(
    depot: &GeoPoint,
    stops: Vec<DeliveryStop>,
    fuel_efficiency_km_per_l: f64,
) -> Route {
    let mut remaining = stops;
    let mut ordered: Vec<RouteStop> = Vec::with_capacity(remaining.len());
    let mut current = *depot;
    let mut total_distance_km = 0.0;

    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_km = haversine_km(&current, &remaining[0].position);

        for (idx, stop) in remaining.iter().enumerate().skip(1) {
            let km = haversine_km(&current, &stop.position);
            if km < best_km {
                best_idx = idx;
                best_km = km;
            }
        }

        let stop = remaining.remove(best_idx);
        current = stop.position;
        total_distance_km += best_km;

        ordered.push(RouteStop {
            sequence: ordered.len() as u32 + 1,
            leg_distance_km: best_km,
            stop,
        });
    }

    // Return leg back to the depot.
    if let Some(last) = ordered.last() {
        total_distance_km += haversine_km(&last.stop.position, depot);
    }

    Route {
        stops: ordered,
        total_distance_km,
        fuel_liters: total_distance_km / fuel_efficiency_km_per_l,
    }
}
