// Mapper to convert domain series into plotly traces and layout
use crate::domain::colors::{SeriesColors, SeriesRole};
use crate::domain::display_mode::TestDisplayMode;
use crate::domain::time_series::TimeSeries;
use plotly::common::{Anchor, DashType, Line, Marker, Mode, Orientation, Title};
use plotly::layout::themes::PLOTLY_WHITE;
use plotly::layout::{Axis, HoverMode, Layout, Legend, SpikeMode, SpikeSnap};
use plotly::Scatter;

pub const DEFAULT_TITLE: &str = "Univariate Time Series Visualization";
pub const X_AXIS_TITLE: &str = "Date";

const TEST_MARKER_SIZE: usize = 6;
const SPIKE_COLOR: &str = "gray";
const SPIKE_THICKNESS: usize = 2;

type SeriesTrace = Box<Scatter<String, f64>>;

pub fn training_trace(series: &TimeSeries, colors: &SeriesColors) -> SeriesTrace {
    line_trace(series, SeriesRole::Training, colors)
}

pub fn test_trace(series: &TimeSeries, mode: TestDisplayMode, colors: &SeriesColors) -> SeriesTrace {
    let color = colors.color_for(SeriesRole::Test).to_string();
    let trace = base_trace(series, SeriesRole::Test);

    match mode {
        TestDisplayMode::Markers => trace
            .mode(Mode::Markers)
            .marker(Marker::new().color(color).size(TEST_MARKER_SIZE)),
        TestDisplayMode::Lines => trace.mode(Mode::Lines).line(Line::new().color(color)),
    }
}

pub fn forecast_trace(series: &TimeSeries, colors: &SeriesColors) -> SeriesTrace {
    let color = colors.color_for(SeriesRole::Forecast).to_string();
    base_trace(series, SeriesRole::Forecast)
        .mode(Mode::Lines)
        .line(Line::new().color(color).dash(DashType::Dash))
}

/// Fixed chart styling: x-axis hover spikes across all traces, no y-axis
/// spikes, and a horizontal legend above the top-right corner of the plot.
pub fn chart_layout(title: &str, y_label: &str) -> Layout {
    let x_axis = Axis::new()
        .title(Title::with_text(X_AXIS_TITLE))
        .show_spikes(true)
        .spike_mode(SpikeMode::Across)
        .spike_snap(SpikeSnap::Cursor)
        .spike_dash(DashType::Dot)
        .spike_thickness(SPIKE_THICKNESS)
        .spike_color(SPIKE_COLOR);

    let y_axis = Axis::new().title(Title::with_text(y_label)).show_spikes(false);

    let legend = Legend::new()
        .orientation(Orientation::Horizontal)
        .y_anchor(Anchor::Bottom)
        .y(1.02)
        .x_anchor(Anchor::Right)
        .x(1.0);

    Layout::new()
        .title(Title::with_text(title))
        .x_axis(x_axis)
        .y_axis(y_axis)
        .hover_mode(HoverMode::X)
        .template(&*PLOTLY_WHITE)
        .legend(legend)
}

fn line_trace(series: &TimeSeries, role: SeriesRole, colors: &SeriesColors) -> SeriesTrace {
    let color = colors.color_for(role).to_string();
    base_trace(series, role)
        .mode(Mode::Lines)
        .line(Line::new().color(color))
}

fn base_trace(series: &TimeSeries, role: SeriesRole) -> SeriesTrace {
    Scatter::new(series.x_values(), series.y_values()).name(role.trace_name())
}
