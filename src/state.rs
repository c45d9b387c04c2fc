use dashmap::DashMap;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::config::Config;
use crate::models::stop::{DeliveryStop, GeoPoint};
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub stops: DashMap<Uuid, DeliveryStop>,
    pub stop_events_tx: broadcast::Sender<DeliveryStop>,
    pub metrics: Metrics,
    pub depot: GeoPoint,
    pub fuel_efficiency_km_per_l: f64,
    pub fuel_price_per_l: f64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let (stop_events_tx, _unused_rx) = broadcast::channel(config.event_buffer_size);

        Self {
            stops: DashMap::new(),
            stop_events_tx,
            metrics: Metrics::new(),
            depot: config.depot,
            fuel_efficiency_km_per_l: config.fuel_efficiency_km_per_l,
            fuel_price_per_l: config.fuel_price_per_l,
        }
    }
}
