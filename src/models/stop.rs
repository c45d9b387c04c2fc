use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Delivery lifecycle as driven by the operator; the route planner only
/// reads this for filtering and never transitions it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopStatus {
    Pending,
    Paid,
    OutForDelivery,
    Shipped,
    Delivered,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryStop {
    pub id: Uuid,
    pub customer_name: String,
    pub address: String,
    pub amount: f64,
    pub position: GeoPoint,
    pub status: StopStatus,
    pub scheduled_for: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
