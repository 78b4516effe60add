//! Query layer over the observation dataset.
//!
//! Each endpoint maps onto one of these async functions, which in turn map
//! onto a single SQL statement against the read-only pool. Dates are stored
//! as ISO-8601 day strings, so lexicographic comparison in SQL is
//! chronological.

use chrono::{Months, NaiveDate};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::Result;
use crate::models::{
    DailyPrecipitation, DailyTemperatureStats, Station, StationActivity, TemperatureObservation,
};

/// Every `(date, prcp)` reading in the dataset, ordered by date.
#[instrument(skip(pool))]
pub async fn all_precipitation(pool: &SqlitePool) -> Result<Vec<DailyPrecipitation>> {
    let readings = sqlx::query_as::<_, DailyPrecipitation>(
        "SELECT date, prcp FROM measurement ORDER BY date",
    )
    .fetch_all(pool)
    .await?;

    Ok(readings)
}

/// Every station record, ordered by station code.
#[instrument(skip(pool))]
pub async fn all_stations(pool: &SqlitePool) -> Result<Vec<Station>> {
    let stations = sqlx::query_as::<_, Station>(
        "SELECT station, name, latitude, longitude, elevation
         FROM station
         ORDER BY station",
    )
    .fetch_all(pool)
    .await?;

    Ok(stations)
}

/// The station with the most measurement rows, or `None` on an empty table.
///
/// Ties break on station code so the result is deterministic.
#[instrument(skip(pool))]
pub async fn most_active_station(pool: &SqlitePool) -> Result<Option<StationActivity>> {
    let activity = sqlx::query_as::<_, StationActivity>(
        "SELECT station, COUNT(station) AS observation_count
         FROM measurement
         GROUP BY station
         ORDER BY observation_count DESC, station
         LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    Ok(activity)
}

/// Most recent measurement date recorded at one station.
#[instrument(skip(pool))]
pub async fn latest_observation_date(
    pool: &SqlitePool,
    station: &str,
) -> Result<Option<NaiveDate>> {
    let latest = sqlx::query_scalar(
        "SELECT date FROM measurement
         WHERE station = ?1
         ORDER BY date DESC
         LIMIT 1",
    )
    .bind(station)
    .fetch_optional(pool)
    .await?;

    Ok(latest)
}

/// Temperature observations at one station strictly after `cutoff`,
/// ordered by date. Rows without a temperature reading are skipped.
#[instrument(skip(pool))]
pub async fn observations_since(
    pool: &SqlitePool,
    station: &str,
    cutoff: NaiveDate,
) -> Result<Vec<TemperatureObservation>> {
    let observations = sqlx::query_as::<_, TemperatureObservation>(
        "SELECT date, tobs FROM measurement
         WHERE station = ?1 AND date > ?2 AND tobs IS NOT NULL
         ORDER BY date",
    )
    .bind(station)
    .bind(cutoff)
    .fetch_all(pool)
    .await?;

    Ok(observations)
}

/// Temperature record of the most active station over the final year of its
/// data. `None` when the measurement table is empty.
#[instrument(skip(pool))]
pub async fn most_active_station_last_year(
    pool: &SqlitePool,
) -> Result<Option<(StationActivity, Vec<TemperatureObservation>)>> {
    let Some(activity) = most_active_station(pool).await? else {
        return Ok(None);
    };
    let Some(latest) = latest_observation_date(pool, &activity.station).await? else {
        return Ok(None);
    };

    let cutoff = trailing_year_cutoff(latest);
    let observations = observations_since(pool, &activity.station, cutoff).await?;

    Ok(Some((activity, observations)))
}

/// Per-date MIN/AVG/MAX of temperature over `[start, end]`, or `[start, ∞)`
/// when `end` is `None`. Both bounds are inclusive; the grouping keys every
/// row by its date.
#[instrument(skip(pool))]
pub async fn temperature_stats(
    pool: &SqlitePool,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Result<Vec<DailyTemperatureStats>> {
    let stats = match end {
        Some(end) => {
            sqlx::query_as::<_, DailyTemperatureStats>(
                "SELECT date, MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
                 FROM measurement
                 WHERE date >= ?1 AND date <= ?2
                 GROUP BY date
                 ORDER BY date",
            )
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, DailyTemperatureStats>(
                "SELECT date, MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
                 FROM measurement
                 WHERE date >= ?1
                 GROUP BY date
                 ORDER BY date",
            )
            .bind(start)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(stats)
}

/// Station and measurement row counts, for the startup banner and `check`.
#[instrument(skip(pool))]
pub async fn dataset_counts(pool: &SqlitePool) -> Result<(i64, i64)> {
    let stations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM station")
        .fetch_one(pool)
        .await?;
    let measurements: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM measurement")
        .fetch_one(pool)
        .await?;

    Ok((stations, measurements))
}

/// Cutoff for the trailing-year window ending at `latest`: twelve calendar
/// months earlier, clamped to a valid day (a Feb 29 anchor lands on Feb 28).
fn trailing_year_cutoff(latest: NaiveDate) -> NaiveDate {
    latest - Months::new(12)
}
