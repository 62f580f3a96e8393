use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A per-day binding of one driver account to one bus. The store keeps at
/// most one assignment per (driver, date); a later same-day assignment
/// replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub driver_id: String,
    pub bus_id: String,
    /// Calendar day, serialized as ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
}

impl Assignment {
    pub fn new(driver_id: &str, bus_id: &str, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            driver_id: driver_id.to_string(),
            bus_id: bus_id.to_string(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_serializes_as_iso_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let assignment = Assignment::new("driver-1", "bus-1", date);
        let json = serde_json::to_string(&assignment).unwrap();
        assert!(json.contains("\"date\":\"2026-03-14\""));
        assert!(json.contains("\"driverId\":\"driver-1\""));
    }
}
