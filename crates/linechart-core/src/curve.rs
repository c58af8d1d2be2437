// File: crates/linechart-core/src/curve.rs
// Summary: Smoothed path construction from projected points.

use skia_safe as skia;

/// One cubic piece of a smoothed polyline: two control points and the
/// segment end. The start is the previous segment's end (or the first
/// input point).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub c1: skia::Point,
    pub c2: skia::Point,
    pub to: skia::Point,
}

/// Build the cubic segments smoothing an ordered point sequence.
///
/// For each consecutive pair both control points sit at the horizontal
/// midpoint, the first at the start's y and the second at the end's y,
/// giving a horizontally symmetric S-curve per pair. This is deliberate
/// smoothing, not a spline: no derivative continuity across segments.
///
/// Fewer than two points yield no segments.
pub fn smooth_segments(points: &[skia::Point]) -> Vec<CubicSegment> {
    points
        .windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            let mid_x = (start.x + end.x) / 2.0;
            CubicSegment {
                c1: skia::Point::new(mid_x, start.y),
                c2: skia::Point::new(mid_x, end.y),
                to: end,
            }
        })
        .collect()
}

/// Assemble the stroke path for a point sequence, or `None` when there is
/// nothing to draw (0 or 1 points).
pub fn stroke_path(points: &[skia::Point]) -> Option<skia::Path> {
    if points.len() < 2 {
        return None;
    }
    let mut path = skia::Path::new();
    path.move_to(points[0]);
    for segment in smooth_segments(points) {
        path.cubic_to(segment.c1, segment.c2, segment.to);
    }
    Some(path)
}

/// Close the stroke path down to the plot's bottom edge for gradient fill:
/// straight down from the last point, across to the first point's x, and
/// back up to the first point.
pub fn fill_path(points: &[skia::Point], plot_bottom: f32) -> Option<skia::Path> {
    let mut path = stroke_path(points)?;
    let first = points[0];
    let last = points[points.len() - 1];
    path.line_to((last.x, plot_bottom));
    path.line_to((first.x, plot_bottom));
    path.close();
    Some(path)
}
