// JSON series loader
use crate::domain::time_series::{TimeSeries, TimeSeriesPoint};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SeriesRecord {
    time: String,
    value: f64,
}

/// Load a series from a JSON array of `{ "time": <RFC 3339>, "value": <number> }`.
pub fn load_series(path: &Path) -> Result<TimeSeries> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read series file {}", path.display()))?;

    parse_series(&body).with_context(|| format!("Failed to parse series file {}", path.display()))
}

pub fn parse_series(body: &str) -> Result<TimeSeries> {
    let records: Vec<SeriesRecord> = serde_json::from_str(body)?;

    let mut points = Vec::with_capacity(records.len());
    for record in records {
        match chrono::DateTime::parse_from_rfc3339(&record.time) {
            Ok(time) => points.push(TimeSeriesPoint::new(time.timestamp_millis(), record.value)),
            Err(e) => {
                tracing::warn!("Skipping record with unparseable time {:?}: {}", record.time, e);
            }
        }
    }

    tracing::debug!("Parsed {} points", points.len());
    Ok(TimeSeries::new(points))
}
