//! Render a univariate time series (training data, optional test data,
//! optional point forecast) as an interactive plotly chart.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::chart_presenter::ChartPresenter;
pub use application::plot_service::{PlotRequest, SeriesPlotter};
pub use domain::colors::{SeriesColors, SeriesRole};
pub use domain::display_mode::TestDisplayMode;
pub use domain::error::PlotError;
pub use domain::time_series::{TimeSeries, TimeSeriesPoint};
pub use infrastructure::presenters::{BrowserPresenter, HtmlFilePresenter};
