//! Measurement projections returned by the query layer.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One `(date, prcp)` precipitation reading.
///
/// `prcp` is NULL for days the gauge did not report, and stays `null` on
/// the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyPrecipitation {
    pub date: NaiveDate,
    pub prcp: Option<f64>,
}

/// One temperature observation at a station.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemperatureObservation {
    pub date: NaiveDate,
    pub tobs: f64,
}

/// Per-date temperature aggregate over a query window.
///
/// All stats are NULL when every observation on that date lacked a
/// temperature reading.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyTemperatureStats {
    pub date: NaiveDate,
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}

impl DailyTemperatureStats {
    /// Spread between the day's max and min, when both are present.
    #[must_use]
    pub fn range(&self) -> Option<f64> {
        match (self.tmin, self.tmax) {
            (Some(lo), Some(hi)) => Some(hi - lo),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
    }

    #[test]
    fn test_precipitation_serializes_null_reading() {
        let reading = DailyPrecipitation {
            date: date("2017-08-23"),
            prcp: None,
        };

        let json = serde_json::to_value(&reading).expect("serialize reading");
        assert_eq!(json["date"], "2017-08-23");
        assert_eq!(json["prcp"], serde_json::Value::Null);
    }

    #[test]
    fn test_temperature_observation_serializes_date_as_iso() {
        let observation = TemperatureObservation {
            date: date("2016-08-23"),
            tobs: 77.0,
        };

        let json = serde_json::to_value(&observation).expect("serialize observation");
        assert_eq!(json["date"], "2016-08-23");
        assert_eq!(json["tobs"], 77.0);
    }

    #[test]
    fn test_stats_range() {
        let stats = DailyTemperatureStats {
            date: date("2017-08-23"),
            tmin: Some(71.0),
            tavg: Some(76.0),
            tmax: Some(81.0),
        };
        assert_eq!(stats.range(), Some(10.0));

        let empty = DailyTemperatureStats {
            date: date("2017-08-24"),
            tmin: None,
            tavg: None,
            tmax: None,
        };
        assert_eq!(empty.range(), None);
    }
}
