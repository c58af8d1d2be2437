// File: crates/linechart-core/tests/layout.rs
// Purpose: Validate the measurement pass: reserved margins, plot rectangle,
// tick spacing, and label placement through the widget API.

use linechart_core::layout::{compute, MeasuredAxis};
use linechart_core::projection::project;
use linechart_core::{
    AxisConfig, AxisPosition, AxisRanges, Chart, SeriesConfig,
};

fn ranges() -> AxisRanges {
    AxisRanges {
        left_max: 100.0,
        left_step: 20.0,
        bottom_min: 0.0,
        bottom_max: 100.0,
        bottom_step: 25.0,
        ..AxisRanges::default()
    }
}

#[test]
fn no_axes_reserve_no_margins() {
    let layout = compute(400.0, 300.0, 5.0, &ranges(), &[]);
    assert_eq!(layout.plot.left, 0.0);
    assert_eq!(layout.plot.top, 0.0);
    assert_eq!(layout.plot.right, 400.0);
    assert_eq!(layout.plot.bottom, 300.0);
    assert_eq!(layout.row_height, 300.0 / 5.0);
    assert_eq!(layout.col_width, 400.0 / 4.0);
}

#[test]
fn left_axis_reserves_widest_label_plus_margin() {
    let left = MeasuredAxis {
        position: AxisPosition::Left,
        label_widths: vec![30.0, 20.0, 10.0],
        text_height: 12.0,
    };
    let layout = compute(400.0, 300.0, 5.0, &ranges(), &[left]);
    assert_eq!(layout.left_axis_width, 35.0);
    assert_eq!(layout.top_axis_height, 12.0);
    assert_eq!(layout.plot.top, 6.0, "half the left text height of headroom");
    assert_eq!(layout.plot.left, 35.0);
}

#[test]
fn bottom_labels_widen_side_margins() {
    let bottom = MeasuredAxis {
        position: AxisPosition::Bottom,
        label_widths: vec![40.0, 10.0, 60.0],
        text_height: 10.0,
    };
    let layout = compute(400.0, 300.0, 5.0, &ranges(), &[bottom]);
    // no left/right axes, so halves of the outermost bottom labels win
    assert_eq!(layout.left_axis_width, 20.0);
    assert_eq!(layout.right_axis_width, 30.0);
    assert_eq!(layout.bottom_axis_height, 15.0);
    assert_eq!(layout.plot.bottom, 285.0);
}

#[test]
fn wider_left_axis_beats_half_bottom_label() {
    let left = MeasuredAxis {
        position: AxisPosition::Left,
        label_widths: vec![30.0],
        text_height: 12.0,
    };
    let bottom = MeasuredAxis {
        position: AxisPosition::Bottom,
        label_widths: vec![40.0, 40.0],
        text_height: 10.0,
    };
    let layout = compute(400.0, 300.0, 5.0, &ranges(), &[left, bottom]);
    assert_eq!(layout.left_axis_width, 35.0, "30 + margin beats 40 / 2");
    assert_eq!(layout.right_axis_width, 20.0);
}

#[test]
fn right_axis_reserves_its_own_margin() {
    let right = MeasuredAxis {
        position: AxisPosition::Right,
        label_widths: vec![12.0, 18.0],
        text_height: 12.0,
    };
    let layout = compute(400.0, 300.0, 5.0, &ranges(), &[right]);
    assert_eq!(layout.right_axis_width, 23.0);
    assert_eq!(layout.plot.right, 377.0);
}

#[test]
fn populated_chart_has_positive_plot_and_monotone_pixels() {
    let mut chart = Chart::new();
    chart.set_axis_ranges(ranges()).unwrap();
    chart.add_axis(AxisConfig::new(AxisPosition::Left));
    chart.add_axis(AxisConfig::new(AxisPosition::Bottom));
    chart.add_series(SeriesConfig::with_values(vec![
        (0.0, 0.0),
        (50.0, 50.0),
        (100.0, 100.0),
    ]));
    chart.resize(640.0, 480.0);
    chart.refresh_layout();

    let plot = chart.plot_rect().expect("layout ran");
    assert!(plot.width() > 0.0);
    assert!(plot.height() > 0.0);

    let r = *chart.ranges();
    let xs: Vec<f32> = [0.0f32, 50.0, 100.0]
        .iter()
        .map(|&x| project(x, x, &plot, &r).x)
        .collect();
    assert!(xs[0] < xs[1] && xs[1] < xs[2], "{xs:?}");
}

#[test]
fn left_labels_descend_top_to_bottom() {
    let mut chart = Chart::new();
    chart.set_axis_ranges(ranges()).unwrap();
    chart.add_axis(AxisConfig::new(AxisPosition::Left));
    chart.resize(640.0, 480.0);

    let labels = chart.axis_labels(0).expect("left axis present");
    assert_eq!(labels.len(), 6, "left_ticks + 1 labels");
    assert_eq!(labels[0].text, "100");
    assert_eq!(labels[5].text, "0");
    assert!(
        labels.windows(2).all(|w| w[0].y < w[1].y),
        "pixel y grows as values descend"
    );
}

#[test]
fn resize_recomputes_label_positions() {
    let mut chart = Chart::new();
    chart.set_axis_ranges(ranges()).unwrap();
    chart.add_axis(AxisConfig::new(AxisPosition::Left));
    chart.resize(640.0, 480.0);
    let before = chart.axis_labels(0).unwrap();

    chart.resize(640.0, 960.0);
    let after = chart.axis_labels(0).unwrap();
    assert_ne!(
        before.last().unwrap().y,
        after.last().unwrap().y,
        "stale cached positions must not survive a resize"
    );
}
