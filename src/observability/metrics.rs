use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub routes_planned_total: IntCounter,
    pub route_distance_km: Histogram,
    pub route_stops: Histogram,
    pub delivery_stops: IntGauge,
    pub status_updates_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let routes_planned_total =
            IntCounter::new("routes_planned_total", "Total route plans computed")
                .expect("valid routes_planned_total metric");

        let route_distance_km = Histogram::with_opts(HistogramOpts::new(
            "route_distance_km",
            "Total trip distance of planned routes in km",
        ))
        .expect("valid route_distance_km metric");

        let route_stops = Histogram::with_opts(HistogramOpts::new(
            "route_stops",
            "Number of stops per planned route",
        ))
        .expect("valid route_stops metric");

        let delivery_stops =
            IntGauge::new("delivery_stops", "Current number of registered delivery stops")
                .expect("valid delivery_stops metric");

        let status_updates_total = IntCounterVec::new(
            Opts::new("status_updates_total", "Stop status updates by new status"),
            &["status"],
        )
        .expect("valid status_updates_total metric");

        registry
            .register(Box::new(routes_planned_total.clone()))
            .expect("register routes_planned_total");
        registry
            .register(Box::new(route_distance_km.clone()))
            .expect("register route_distance_km");
        registry
            .register(Box::new(route_stops.clone()))
            .expect("register route_stops");
        registry
            .register(Box::new(delivery_stops.clone()))
            .expect("register delivery_stops");
        registry
            .register(Box::new(status_updates_total.clone()))
            .expect("register status_updates_total");

        Self {
            registry,
            routes_planned_total,
            route_distance_km,
            route_stops,
            delivery_stops,
            status_updates_total,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
