use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tracing::info;

use crate::api::rest::stops::StopFilter;
use crate::engine::sequencer::compute_route;
use crate::models::route::RouteStop;
use crate::models::stop::{DeliveryStop, GeoPoint};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/route/plan", get(plan_route))
}

#[derive(Serialize)]
pub struct RoutePlanResponse {
    pub depot: GeoPoint,
    pub stops: Vec<RouteStop>,
    pub total_distance_km: f64,
    pub fuel_liters: f64,
    pub fuel_cost: f64,
}

async fn plan_route(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<StopFilter>,
) -> Json<RoutePlanResponse> {
    let mut snapshot: Vec<DeliveryStop> = state
        .stops
        .iter()
        .filter(|entry| {
            let stop = entry.value();
            filter.date.is_none_or(|date| stop.scheduled_for == date)
                && filter.status.is_none_or(|status| stop.status == status)
        })
        .map(|entry| entry.value().clone())
        .collect();

    // DashMap iteration order is unspecified; fix the input order so the
    // nearest-neighbor tie-break gives the same plan on every request.
    snapshot.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

    let route = compute_route(&state.depot, snapshot, state.fuel_efficiency_km_per_l);
    let fuel_cost = route.fuel_liters * state.fuel_price_per_l;

    state.metrics.routes_planned_total.inc();
    state.metrics.route_distance_km.observe(route.total_distance_km);
    state.metrics.route_stops.observe(route.stops.len() as f64);

    info!(
        stops = route.stops.len(),
        distance_km = route.total_distance_km,
        fuel_liters = route.fuel_liters,
        "route planned"
    );

    Json(RoutePlanResponse {
        depot: state.depot,
        stops: route.stops,
        total_distance_km: route.total_distance_km,
        fuel_liters: route.fuel_liters,
        fuel_cost,
    })
}
