// Domain layer - Plain values with no rendering dependencies
pub mod colors;
pub mod display_mode;
pub mod error;
pub mod time_series;
