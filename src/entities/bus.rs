use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where newly created buses are placed until live telemetry exists.
pub const DEFAULT_LOCATION: GeoPoint = GeoPoint {
    lat: 11.2760,
    lng: 77.5932,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusStatus {
    Active,
    Breakdown,
    Accident,
    Traffic,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<String>,
    /// Kilometres from the route origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: String,
    pub number: String,
    pub status: BusStatus,
    pub current_location: GeoPoint,
    pub stops: Vec<Stop>,
}

impl Bus {
    pub fn new(number: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            number: number.to_string(),
            status: BusStatus::Active,
            current_location: DEFAULT_LOCATION,
            stops: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bus_starts_active_at_default_location() {
        let bus = Bus::new("LSS5");
        assert_eq!(bus.number, "LSS5");
        assert_eq!(bus.status, BusStatus::Active);
        assert_eq!(bus.current_location, DEFAULT_LOCATION);
        assert!(bus.stops.is_empty());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BusStatus::Breakdown).unwrap(),
            "\"breakdown\""
        );
    }
}
