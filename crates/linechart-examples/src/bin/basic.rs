// File: crates/linechart-examples/src/bin/basic.rs
// Summary: Minimal example that renders a smoothed line chart to PNG.

use linechart_core::{
    AxisConfig, AxisPosition, AxisRanges, Chart, RenderOptions, SeriesConfig,
};

fn main() {
    let mut chart = Chart::new();
    chart
        .set_axis_ranges(AxisRanges {
            left_max: 100.0,
            left_step: 20.0,
            bottom_min: 0.0,
            bottom_max: 10.0,
            bottom_step: 2.0,
            ..AxisRanges::default()
        })
        .expect("valid ranges");
    chart.add_axis(AxisConfig::new(AxisPosition::Left));
    chart.add_axis(AxisConfig::new(AxisPosition::Bottom));
    chart.add_series(SeriesConfig::with_values(vec![
        (0.0, 10.0),
        (2.0, 45.0),
        (4.0, 30.0),
        (6.0, 75.0),
        (8.0, 55.0),
        (10.0, 90.0),
    ]));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/out/example_basic.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    chart.render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
