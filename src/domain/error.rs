//! Plotting error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    /// The test series display mode was neither `markers` nor `lines`.
    #[error("Invalid value for test_mode '{0}'. Choose 'markers' or 'lines'.")]
    InvalidDisplayMode(String),

    /// The display surface could not be written.
    #[error("Failed to present chart: {0}")]
    Io(#[from] std::io::Error),
}
