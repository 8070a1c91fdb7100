// Display surfaces for rendered charts
use crate::application::chart_presenter::ChartPresenter;
use crate::domain::error::PlotError;
use plotly::Plot;
use std::fs;
use std::path::{Path, PathBuf};

/// Opens the chart with plotly's default viewer (the system browser).
#[derive(Debug, Clone, Default)]
pub struct BrowserPresenter;

impl ChartPresenter for BrowserPresenter {
    fn present(&self, plot: &Plot) -> Result<(), PlotError> {
        tracing::info!("Opening chart in browser");
        plot.show();
        Ok(())
    }
}

/// Writes the chart as a standalone HTML page.
#[derive(Debug, Clone)]
pub struct HtmlFilePresenter {
    path: PathBuf,
}

impl HtmlFilePresenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartPresenter for HtmlFilePresenter {
    fn present(&self, plot: &Plot) -> Result<(), PlotError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, plot.to_html())?;
        tracing::info!("Chart written to {}", self.path().display());
        Ok(())
    }
}
