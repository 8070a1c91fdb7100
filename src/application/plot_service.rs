// Series plotter - Use case for rendering training/test/forecast series
use crate::application::chart_presenter::ChartPresenter;
use crate::domain::colors::SeriesColors;
use crate::domain::display_mode::TestDisplayMode;
use crate::domain::error::PlotError;
use crate::domain::time_series::TimeSeries;
use crate::infrastructure::plotly_mapper::{
    chart_layout, forecast_trace, test_trace, training_trace, DEFAULT_TITLE,
};
use plotly::Plot;
use std::sync::Arc;

pub const DEFAULT_Y_LABEL: &str = "Value";

/// Everything one render call needs, with the same defaults as
/// [`SeriesPlotter::render`] callers get by passing `None`.
#[derive(Debug, Clone)]
pub struct PlotRequest {
    pub training: TimeSeries,
    pub test: Option<TimeSeries>,
    pub forecast: Option<TimeSeries>,
    pub test_mode: String,
    pub y_label: String,
    pub colors: Option<SeriesColors>,
    pub title: String,
}

impl PlotRequest {
    pub fn new(training: TimeSeries) -> Self {
        Self {
            training,
            test: None,
            forecast: None,
            test_mode: TestDisplayMode::default().to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            colors: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_test(mut self, test: TimeSeries) -> Self {
        self.test = Some(test);
        self
    }

    pub fn with_forecast(mut self, forecast: TimeSeries) -> Self {
        self.forecast = Some(forecast);
        self
    }

    pub fn with_test_mode(mut self, test_mode: impl Into<String>) -> Self {
        self.test_mode = test_mode.into();
        self
    }

    pub fn with_y_label(mut self, y_label: impl Into<String>) -> Self {
        self.y_label = y_label.into();
        self
    }

    pub fn with_colors(mut self, colors: SeriesColors) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[derive(Clone)]
pub struct SeriesPlotter {
    presenter: Arc<dyn ChartPresenter>,
}

impl SeriesPlotter {
    pub fn new(presenter: Arc<dyn ChartPresenter>) -> Self {
        Self { presenter }
    }

    /// Render training data plus optional test data and forecast, then hand
    /// the chart to the presenter.
    ///
    /// `test_mode` must be exactly `"markers"` or `"lines"`; anything else
    /// fails before any series is read or the presenter is touched.
    pub fn render(
        &self,
        training: &TimeSeries,
        test: Option<&TimeSeries>,
        forecast: Option<&TimeSeries>,
        test_mode: &str,
        y_label: &str,
        colors: Option<&SeriesColors>,
    ) -> Result<(), PlotError> {
        let plot = self.build_plot(training, test, forecast, test_mode, y_label, colors)?;
        self.presenter.present(&plot)
    }

    pub fn render_request(&self, request: &PlotRequest) -> Result<(), PlotError> {
        let plot = self.build_request_plot(request)?;
        self.presenter.present(&plot)
    }

    /// Build the chart without presenting it.
    pub fn build_plot(
        &self,
        training: &TimeSeries,
        test: Option<&TimeSeries>,
        forecast: Option<&TimeSeries>,
        test_mode: &str,
        y_label: &str,
        colors: Option<&SeriesColors>,
    ) -> Result<Plot, PlotError> {
        let mode: TestDisplayMode = test_mode.parse()?;
        Ok(assemble(training, test, forecast, mode, DEFAULT_TITLE, y_label, colors))
    }

    pub fn build_request_plot(&self, request: &PlotRequest) -> Result<Plot, PlotError> {
        let mode: TestDisplayMode = request.test_mode.parse()?;
        Ok(assemble(
            &request.training,
            request.test.as_ref(),
            request.forecast.as_ref(),
            mode,
            &request.title,
            &request.y_label,
            request.colors.as_ref(),
        ))
    }
}

fn assemble(
    training: &TimeSeries,
    test: Option<&TimeSeries>,
    forecast: Option<&TimeSeries>,
    mode: TestDisplayMode,
    title: &str,
    y_label: &str,
    colors: Option<&SeriesColors>,
) -> Plot {
    let default_colors;
    let colors = match colors {
        Some(colors) => colors,
        None => {
            default_colors = SeriesColors::default();
            &default_colors
        }
    };

    let mut plot = Plot::new();

    tracing::debug!("Adding training trace with {} points", training.len());
    plot.add_trace(training_trace(training, colors));

    if let Some(test) = test {
        tracing::debug!("Adding test trace with {} points as {}", test.len(), mode);
        plot.add_trace(test_trace(test, mode, colors));
    }

    if let Some(forecast) = forecast {
        tracing::debug!("Adding forecast trace with {} points", forecast.len());
        plot.add_trace(forecast_trace(forecast, colors));
    }

    plot.set_layout(chart_layout(title, y_label));
    plot
}
