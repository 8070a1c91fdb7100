// Presenter trait for the chart display surface
use crate::domain::error::PlotError;
use plotly::Plot;

pub trait ChartPresenter: Send + Sync {
    /// Hand a finished chart to the display surface (browser, file, ...)
    fn present(&self, plot: &Plot) -> Result<(), PlotError>;
}
