// Display mode for the test series
use super::error::PlotError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TestDisplayMode {
    /// Discrete points.
    #[default]
    Markers,
    /// Connected line.
    Lines,
}

impl TestDisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestDisplayMode::Markers => "markers",
            TestDisplayMode::Lines => "lines",
        }
    }
}

impl FromStr for TestDisplayMode {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markers" => Ok(TestDisplayMode::Markers),
            "lines" => Ok(TestDisplayMode::Lines),
            other => Err(PlotError::InvalidDisplayMode(other.to_string())),
        }
    }
}

impl fmt::Display for TestDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
