// Main entry point - Configuration, dependency injection and a single render
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use timeseries_plot::application::chart_presenter::ChartPresenter;
use timeseries_plot::application::plot_service::{PlotRequest, SeriesPlotter};
use timeseries_plot::infrastructure::config::load_plot_config;
use timeseries_plot::infrastructure::presenters::{BrowserPresenter, HtmlFilePresenter};
use timeseries_plot::infrastructure::series_loader::load_series;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_plot_config().context("Failed to load plot configuration")?;

    // Load series (infrastructure layer)
    let training = load_series(&config.data.training)?;
    let mut request = PlotRequest::new(training)
        .with_title(config.plot.title)
        .with_y_label(config.plot.y_label)
        .with_test_mode(config.plot.test_mode);

    if let Some(path) = &config.data.test {
        request = request.with_test(load_series(path)?);
    }
    if let Some(path) = &config.data.forecast {
        request = request.with_forecast(load_series(path)?);
    }
    if let Some(colors) = config.colors {
        request = request.with_colors(colors);
    }

    // Pick the display surface
    let presenter: Arc<dyn ChartPresenter> = match config.plot.output {
        Some(path) => Arc::new(HtmlFilePresenter::new(path)),
        None => Arc::new(BrowserPresenter),
    };

    tracing::info!(
        "Rendering {} training points (test: {}, forecast: {})",
        request.training.len(),
        request.test.is_some(),
        request.forecast.is_some()
    );

    SeriesPlotter::new(presenter).render_request(&request)?;

    Ok(())
}
