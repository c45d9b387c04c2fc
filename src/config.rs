use std::env;

use crate::error::AppError;
use crate::models::stop::GeoPoint;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub event_buffer_size: usize,
    pub depot: GeoPoint,
    pub fuel_efficiency_km_per_l: f64,
    pub fuel_price_per_l: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        let fuel_efficiency_km_per_l = parse_or_default("FUEL_EFFICIENCY_KM_PER_L", 13.0)?;
        if fuel_efficiency_km_per_l <= 0.0 {
            return Err(AppError::Internal(
                "FUEL_EFFICIENCY_KM_PER_L must be > 0".to_string(),
            ));
        }

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            event_buffer_size: parse_or_default("EVENT_BUFFER_SIZE", 1024)?,
            depot: GeoPoint {
                lat: parse_or_default("DEPOT_LAT", 0.0)?,
                lng: parse_or_default("DEPOT_LNG", 0.0)?,
            },
            fuel_efficiency_km_per_l,
            fuel_price_per_l: parse_or_default("FUEL_PRICE_PER_L", 1.5)?,
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
