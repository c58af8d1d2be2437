// File: crates/linechart-core/src/projection.rs
// Summary: Data-space to pixel-space mapping and its inverse.

use skia_safe as skia;

use crate::geometry::PlotRect;
use crate::ranges::AxisRanges;

/// Map a data-space point into pixel space.
///
/// X spans `bottom_min..bottom_max` across the plot width. Y is inverted
/// (data grows up, pixels grow down) and is scaled against `0..left_max`
/// only; the left axis has no nonzero floor by design.
///
/// Callers must hold validated [`AxisRanges`]; degenerate spans are rejected
/// at configuration time, never here.
#[inline]
pub fn project(x: f32, y: f32, plot: &PlotRect, ranges: &AxisRanges) -> skia::Point {
    let px = plot.width() * (x - ranges.bottom_min) / ranges.bottom_span() + plot.left;
    let py = plot.height() - plot.height() * y / ranges.left_max + plot.top;
    skia::Point::new(px, py)
}

/// Inverse of [`project`]: recover the data-space value for a pixel.
#[inline]
pub fn unproject(px: f32, py: f32, plot: &PlotRect, ranges: &AxisRanges) -> (f32, f32) {
    let x = (px - plot.left) / plot.width() * ranges.bottom_span() + ranges.bottom_min;
    let y = (plot.height() - (py - plot.top)) * ranges.left_max / plot.height();
    (x, y)
}
