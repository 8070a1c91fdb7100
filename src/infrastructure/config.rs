use crate::application::plot_service::DEFAULT_Y_LABEL;
use crate::domain::colors::SeriesColors;
use crate::infrastructure::plotly_mapper::DEFAULT_TITLE;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config/plot";
pub const CONFIG_PATH_ENV: &str = "PLOT_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct PlotConfig {
    pub plot: PlotSettings,
    pub data: DataSettings,
    #[serde(default)]
    pub colors: Option<SeriesColors>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlotSettings {
    pub title: String,
    pub y_label: String,
    pub test_mode: String,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub training: PathBuf,
    #[serde(default)]
    pub test: Option<PathBuf>,
    #[serde(default)]
    pub forecast: Option<PathBuf>,
}

/// Load plot settings from `config/plot` (or the path in `PLOT_CONFIG`).
pub fn load_plot_config() -> anyhow::Result<PlotConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_plot_config_from(&path)
}

pub fn load_plot_config_from(path: &str) -> anyhow::Result<PlotConfig> {
    let settings = config::Config::builder()
        .set_default("plot.title", DEFAULT_TITLE)?
        .set_default("plot.y_label", DEFAULT_Y_LABEL)?
        .set_default("plot.test_mode", "markers")?
        .add_source(config::File::with_name(path))
        .build()?;

    Ok(settings.try_deserialize()?)
}
