use serde::{Deserialize, Serialize};

use crate::models::stop::DeliveryStop;

/// One entry in a planned route: the stop, its 1-based visiting position
/// and the distance of the leg that ends at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStop {
    pub sequence: u32,
    pub leg_distance_km: f64,
    pub stop: DeliveryStop,
}

/// A planned delivery trip, starting and ending at the depot. Computed on
/// demand and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub stops: Vec<RouteStop>,
    pub total_distance_km: f64,
    pub fuel_liters: f64,
}
