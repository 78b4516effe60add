//! Station metadata rows.

use serde::Serialize;
use sqlx::FromRow;

/// A weather station as stored in the `station` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Station {
    /// Station identifier code, e.g. `USC00519281`
    pub station: String,
    /// Human-readable station name and location
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Elevation in meters
    pub elevation: Option<f64>,
}

/// Observation count for a single station, used to rank station activity.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StationActivity {
    pub station: String,
    pub observation_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_serializes_missing_coordinates_as_null() {
        let station = Station {
            station: "USC00519281".to_string(),
            name: "WAIHEE 837.5, HI US".to_string(),
            latitude: Some(21.451_67),
            longitude: Some(-157.848_89),
            elevation: None,
        };

        let json = serde_json::to_value(&station).expect("serialize station");
        assert_eq!(json["station"], "USC00519281");
        assert_eq!(json["elevation"], serde_json::Value::Null);
    }

    #[test]
    fn test_station_activity_serializes_count() {
        let activity = StationActivity {
            station: "USC00519281".to_string(),
            observation_count: 2772,
        };

        let json = serde_json::to_value(&activity).expect("serialize activity");
        assert_eq!(json["observation_count"], 2772);
    }
}
