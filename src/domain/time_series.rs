// Time series domain models
use chrono::DateTime;

const DATE_AXIS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub time_ms: i64,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(time_ms: i64, value: f64) -> Self {
        Self { time_ms, value }
    }

    /// Timestamp as a date-axis string (UTC). Out-of-range timestamps fall
    /// back to the raw millisecond count.
    pub fn axis_label(&self) -> String {
        match DateTime::from_timestamp_millis(self.time_ms) {
            Some(time) => time.format(DATE_AXIS_FORMAT).to_string(),
            None => self.time_ms.to_string(),
        }
    }
}

/// An ordered, time-indexed series of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub fn new(points: Vec<TimeSeriesPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_values(&self) -> Vec<String> {
        self.points.iter().map(TimeSeriesPoint::axis_label).collect()
    }

    pub fn y_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

impl FromIterator<(i64, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(time_ms, value)| TimeSeriesPoint::new(time_ms, value))
                .collect(),
        )
    }
}
