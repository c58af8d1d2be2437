// File: crates/linechart-core/tests/projection.rs
// Purpose: Validate data-to-pixel mapping, inversion, and endpoint behavior.

use linechart_core::projection::{project, unproject};
use linechart_core::{AxisRanges, PlotRect};

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
fn y_endpoints_map_to_plot_edges() {
    let plot = PlotRect::from_ltrb(50.0, 10.0, 450.0, 310.0);
    let r = ranges();

    // value == left_max lands on the plot top, value == 0 on the bottom
    let top = project(0.0, 100.0, &plot, &r);
    let bottom = project(0.0, 0.0, &plot, &r);
    assert!((top.y - plot.top).abs() < 1e-3, "top: {}", top.y);
    assert!((bottom.y - plot.bottom).abs() < 1e-3, "bottom: {}", bottom.y);
}

#[test]
fn y_is_inverted() {
    let plot = PlotRect::from_ltrb(0.0, 0.0, 100.0, 100.0);
    let r = ranges();
    let low = project(0.0, 10.0, &plot, &r);
    let high = project(0.0, 90.0, &plot, &r);
    assert!(high.y < low.y, "larger data values must sit higher on screen");
}

#[test]
fn x_is_monotone_in_data() {
    let plot = PlotRect::from_ltrb(50.0, 10.0, 450.0, 310.0);
    let r = ranges();
    let points: Vec<f32> = [0.0f32, 25.0, 50.0, 75.0, 100.0]
        .iter()
        .map(|&x| project(x, 0.0, &plot, &r).x)
        .collect();
    assert!(points.windows(2).all(|w| w[0] < w[1]), "{points:?}");
    assert!((points[0] - plot.left).abs() < 1e-3);
    assert!((points[4] - plot.right).abs() < 1e-3);
}

#[test]
fn round_trip_recovers_data_values() {
    let plot = PlotRect::from_ltrb(37.5, 12.25, 612.0, 441.0);
    let r = AxisRanges {
        left_max: 500.0,
        left_step: 100.0,
        bottom_min: 1000.0,
        bottom_max: 2000.0,
        bottom_step: 250.0,
        ..AxisRanges::default()
    };
    for &(x, y) in &[(1000.0f32, 0.0f32), (1250.0, 125.0), (1777.0, 499.5), (2000.0, 500.0)] {
        let p = project(x, y, &plot, &r);
        let (rx, ry) = unproject(p.x, p.y, &plot, &r);
        assert!((rx - x).abs() < 1e-2, "x: {x} -> {rx}");
        assert!((ry - y).abs() < 1e-2, "y: {y} -> {ry}");
    }
}

#[test]
fn nonzero_bottom_min_offsets_x() {
    let plot = PlotRect::from_ltrb(0.0, 0.0, 200.0, 100.0);
    let r = AxisRanges {
        bottom_min: 50.0,
        bottom_max: 150.0,
        bottom_step: 25.0,
        ..AxisRanges::default()
    };
    let p = project(100.0, 0.0, &plot, &r);
    assert!((p.x - 100.0).abs() < 1e-3, "midpoint of 50..150 is the plot center");
}
