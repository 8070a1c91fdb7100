use plotly::Plot;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use timeseries_plot::{
    ChartPresenter, PlotError, PlotRequest, SeriesColors, SeriesPlotter, TimeSeries,
};

#[derive(Default)]
struct CountingPresenter {
    calls: Mutex<usize>,
}

impl ChartPresenter for CountingPresenter {
    fn present(&self, _plot: &Plot) -> Result<(), PlotError> {
        *self.calls.lock().unwrap() += 1;
        Ok(())
    }
}

const DAY_MS: i64 = 86_400_000;

fn daily(start_day: i64, values: &[f64]) -> TimeSeries {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| ((start_day + i as i64) * DAY_MS, *v))
        .collect()
}

fn plotter() -> (SeriesPlotter, Arc<CountingPresenter>) {
    let presenter = Arc::new(CountingPresenter::default());
    (SeriesPlotter::new(presenter.clone()), presenter)
}

fn chart_json(plot: &Plot) -> Value {
    serde_json::from_str(&plot.to_json()).unwrap()
}

fn traces(json: &Value) -> &Vec<Value> {
    json["data"].as_array().unwrap()
}

fn title_text(title: &Value) -> Option<&str> {
    title.as_str().or_else(|| title["text"].as_str())
}

fn all_series() -> (TimeSeries, TimeSeries, TimeSeries) {
    (
        daily(0, &[10.0, 12.0, 11.0, 13.0]),
        daily(4, &[14.0, 15.0]),
        daily(4, &[13.5, 14.5]),
    )
}

#[test]
fn invalid_mode_fails_without_presenting() {
    let (plotter, presenter) = plotter();
    let (training, test, forecast) = all_series();

    for mode in ["bars", "Markers", "", "line"] {
        let err = plotter
            .render(&training, Some(&test), Some(&forecast), mode, "Value", None)
            .unwrap_err();
        assert!(matches!(err, PlotError::InvalidDisplayMode(_)));
    }

    assert_eq!(*presenter.calls.lock().unwrap(), 0);
}

#[test]
fn invalid_mode_is_rejected_even_without_test_data() {
    let (plotter, presenter) = plotter();

    let request = PlotRequest::new(TimeSeries::default()).with_test_mode("dots");
    assert!(matches!(
        plotter.render_request(&request),
        Err(PlotError::InvalidDisplayMode(_))
    ));
    assert_eq!(*presenter.calls.lock().unwrap(), 0);
}

#[test]
fn training_only_renders_a_single_line() {
    let (plotter, presenter) = plotter();
    let training = daily(0, &[1.0, 2.0, 3.0]);

    plotter
        .render(&training, None, None, "markers", "Value", None)
        .unwrap();
    assert_eq!(*presenter.calls.lock().unwrap(), 1);

    let json = chart_json(
        &plotter
            .build_plot(&training, None, None, "markers", "Value", None)
            .unwrap(),
    );
    let data = traces(&json);
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["mode"], "lines");
    assert_eq!(data[0]["name"], "Training Data");
    assert_eq!(
        data[0]["x"],
        json!(["1970-01-01 00:00:00.000", "1970-01-02 00:00:00.000", "1970-01-03 00:00:00.000"])
    );
}

#[test]
fn markers_mode_draws_test_points() {
    let (plotter, _) = plotter();
    let (training, test, _) = all_series();

    let json = chart_json(
        &plotter
            .build_plot(&training, Some(&test), None, "markers", "Value", None)
            .unwrap(),
    );
    let data = traces(&json);

    assert_eq!(data.len(), 2);
    let test_trace = &data[1];
    assert_eq!(test_trace["name"], "Test Data");
    assert_eq!(test_trace["mode"], "markers");
    assert_eq!(test_trace["marker"]["color"], "#000000");
    assert_eq!(test_trace["marker"]["size"], 6);
    assert!(test_trace.get("line").is_none());
}

#[test]
fn lines_mode_draws_connected_test_line() {
    let (plotter, _) = plotter();
    let (training, test, _) = all_series();

    let json = chart_json(
        &plotter
            .build_plot(&training, Some(&test), None, "lines", "Value", None)
            .unwrap(),
    );
    let test_trace = &traces(&json)[1];

    assert_eq!(test_trace["mode"], "lines");
    assert_eq!(test_trace["line"]["color"], "#000000");
    assert!(test_trace.get("marker").is_none());
}

#[test]
fn all_three_series_with_dashed_forecast() {
    let (plotter, _) = plotter();
    let (training, test, forecast) = all_series();

    let json = chart_json(
        &plotter
            .build_plot(&training, Some(&test), Some(&forecast), "markers", "Value", None)
            .unwrap(),
    );
    let data = traces(&json);

    assert_eq!(data.len(), 3);
    let names: Vec<&str> = data.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Training Data", "Test Data", "Point Forecast"]);

    let forecast_trace = &data[2];
    assert_eq!(forecast_trace["mode"], "lines");
    assert_eq!(forecast_trace["line"]["dash"], "dash");
    assert_eq!(forecast_trace["y"], json!([13.5, 14.5]));
}

#[test]
fn forecast_without_test_is_second_trace() {
    let (plotter, _) = plotter();
    let (training, _, forecast) = all_series();

    let json = chart_json(
        &plotter
            .build_plot(&training, None, Some(&forecast), "lines", "Value", None)
            .unwrap(),
    );
    let data = traces(&json);

    assert_eq!(data.len(), 2);
    assert_eq!(data[1]["name"], "Point Forecast");
}

#[test]
fn default_colors_apply_when_none_supplied() {
    let (plotter, _) = plotter();
    let (training, test, forecast) = all_series();

    let json = chart_json(
        &plotter
            .build_plot(&training, Some(&test), Some(&forecast), "lines", "Value", None)
            .unwrap(),
    );
    let data = traces(&json);

    assert_eq!(data[0]["line"]["color"], "#0072B2");
    assert_eq!(data[1]["line"]["color"], "#000000");
    assert_eq!(data[2]["line"]["color"], "#FF0000");
}

#[test]
fn supplied_colors_override_every_trace() {
    let (plotter, _) = plotter();
    let (training, test, forecast) = all_series();
    let colors = SeriesColors::new(
        "#00AA00".to_string(),
        "#AA00AA".to_string(),
        "#FFA500".to_string(),
    );

    let json = chart_json(
        &plotter
            .build_plot(&training, Some(&test), Some(&forecast), "markers", "Value", Some(&colors))
            .unwrap(),
    );
    let data = traces(&json);

    assert_eq!(data[0]["line"]["color"], "#00AA00");
    assert_eq!(data[1]["marker"]["color"], "#AA00AA");
    assert_eq!(data[2]["line"]["color"], "#FFA500");
}

#[test]
fn axis_captions() {
    let (plotter, _) = plotter();
    let training = daily(0, &[1.0]);

    for label in ["Value", "Passengers (thousands)", ""] {
        let json = chart_json(
            &plotter
                .build_plot(&training, None, None, "markers", label, None)
                .unwrap(),
        );
        let layout = &json["layout"];

        assert_eq!(title_text(&layout["xaxis"]["title"]), Some("Date"));
        assert_eq!(title_text(&layout["yaxis"]["title"]), Some(label));
    }
}

#[test]
fn hover_spikes_and_legend_layout() {
    let (plotter, _) = plotter();

    let json = chart_json(
        &plotter
            .build_plot(&daily(0, &[1.0, 2.0]), None, None, "markers", "Value", None)
            .unwrap(),
    );
    let layout = &json["layout"];

    assert_eq!(layout["hovermode"], "x");

    let x_axis = &layout["xaxis"];
    assert_eq!(x_axis["showspikes"], true);
    assert_eq!(x_axis["spikemode"], "across");
    assert_eq!(x_axis["spikesnap"], "cursor");
    assert_eq!(x_axis["spikedash"], "dot");
    assert_eq!(x_axis["spikecolor"], "gray");
    assert_eq!(layout["yaxis"]["showspikes"], false);

    let legend = &layout["legend"];
    assert_eq!(legend["orientation"], "h");
    assert_eq!(legend["yanchor"], "bottom");
    assert_eq!(legend["y"], 1.02);
    assert_eq!(legend["xanchor"], "right");
    assert_eq!(legend["x"], 1.0);

    assert_eq!(x_axis["spikethickness"], 2);
    assert_eq!(layout["template"]["layout"]["plot_bgcolor"], "white");
}
