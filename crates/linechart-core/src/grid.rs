// File: crates/linechart-core/src/grid.rs
// Summary: Gridline positions with edge pixel snapping.

use crate::geometry::PlotRect;

/// Y positions of the `count + 1` horizontal gridlines.
///
/// The first and last lines are pulled half a stroke width inside the top
/// and bottom edges so the border lines stay crisp under anti-aliasing;
/// intermediate lines use the raw tick position.
pub fn horizontal_positions(plot: &PlotRect, count: usize, stroke_width: f32) -> Vec<f32> {
    let step = plot.height() / count as f32;
    (0..=count)
        .map(|i| {
            if i == 0 {
                plot.top + stroke_width / 2.0
            } else if i == count {
                plot.bottom - stroke_width / 2.0
            } else {
                plot.top + step * i as f32
            }
        })
        .collect()
}

/// X positions of the `count + 1` vertical gridlines, snapped like
/// [`horizontal_positions`].
pub fn vertical_positions(plot: &PlotRect, count: usize, stroke_width: f32) -> Vec<f32> {
    let step = plot.width() / count as f32;
    (0..=count)
        .map(|i| {
            if i == 0 {
                plot.left + stroke_width / 2.0
            } else if i == count {
                plot.right - stroke_width / 2.0
            } else {
                plot.left + step * i as f32
            }
        })
        .collect()
}
