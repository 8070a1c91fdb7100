// Per-role color configuration
use serde::Deserialize;

pub const DEFAULT_TRAINING_COLOR: &str = "#0072B2";
pub const DEFAULT_TEST_COLOR: &str = "#000000";
pub const DEFAULT_FORECAST_COLOR: &str = "#FF0000";

/// The role a series plays in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesRole {
    Training,
    Test,
    Forecast,
}

impl SeriesRole {
    pub fn trace_name(&self) -> &'static str {
        match self {
            SeriesRole::Training => "Training Data",
            SeriesRole::Test => "Test Data",
            SeriesRole::Forecast => "Point Forecast",
        }
    }
}

/// Colors for every series role. All three are required: a caller either
/// supplies the whole mapping or gets the defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SeriesColors {
    pub training: String,
    pub test: String,
    pub forecast: String,
}

impl SeriesColors {
    pub fn new(training: String, test: String, forecast: String) -> Self {
        Self {
            training,
            test,
            forecast,
        }
    }

    pub fn color_for(&self, role: SeriesRole) -> &str {
        match role {
            SeriesRole::Training => &self.training,
            SeriesRole::Test => &self.test,
            SeriesRole::Forecast => &self.forecast,
        }
    }
}

impl Default for SeriesColors {
    fn default() -> Self {
        Self::new(
            DEFAULT_TRAINING_COLOR.to_string(),
            DEFAULT_TEST_COLOR.to_string(),
            DEFAULT_FORECAST_COLOR.to_string(),
        )
    }
}
