// File: crates/linechart-core/src/layout.rs
// Summary: Measurement pass computing the plot rectangle and tick spacing.

use crate::axis::AxisPosition;
use crate::geometry::PlotRect;
use crate::ranges::AxisRanges;

/// Label extents of one axis, as produced by the axis label engine.
#[derive(Clone, Debug)]
pub struct MeasuredAxis {
    pub position: AxisPosition,
    /// Pixel width of every tick label, in tick order.
    pub label_widths: Vec<f32>,
    /// Full line height of the axis font.
    pub text_height: f32,
}

/// Result of the layout pass: the plot rectangle, the margins reserved for
/// each axis, and the pixel distance between adjacent ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub plot: PlotRect,
    pub left_axis_width: f32,
    pub right_axis_width: f32,
    pub bottom_axis_height: f32,
    pub top_axis_height: f32,
    pub row_height: f32,
    pub col_width: f32,
}

/// Compute the layout for the given widget size and measured axis labels.
///
/// Must run before every draw and after every resize or range mutation;
/// drawing against a stale layout places every element wrong. The chart
/// drives this through its geometry dirty flag.
///
/// The left/right margins are widened to at least half the first/last
/// bottom label's width so the outermost bottom labels, which are centered
/// on their ticks, do not get clipped at the widget edges.
pub fn compute(
    view_width: f32,
    view_height: f32,
    margin: f32,
    ranges: &AxisRanges,
    axes: &[MeasuredAxis],
) -> Layout {
    let mut left_axis_width = 0.0f32;
    let mut right_axis_width = 0.0f32;
    let mut bottom_axis_height = 0.0f32;
    let mut top_axis_height = 0.0f32;

    for axis in axes {
        let widest = axis.label_widths.iter().fold(0.0f32, |a, &w| a.max(w));
        match axis.position {
            AxisPosition::Left => {
                top_axis_height = axis.text_height;
                left_axis_width = widest;
                if left_axis_width != 0.0 {
                    left_axis_width += margin;
                }
            }
            AxisPosition::Right => {
                right_axis_width = widest;
                if right_axis_width != 0.0 {
                    right_axis_width += margin;
                }
            }
            AxisPosition::Bottom => {
                bottom_axis_height = axis.text_height + margin;
            }
        }
    }

    let bottom = axes.iter().find(|a| a.position == AxisPosition::Bottom);
    let first_bottom_width = bottom
        .and_then(|a| a.label_widths.first())
        .copied()
        .unwrap_or(0.0);
    let last_bottom_width = bottom
        .and_then(|a| a.label_widths.last())
        .copied()
        .unwrap_or(0.0);
    left_axis_width = left_axis_width.max(first_bottom_width / 2.0);
    right_axis_width = right_axis_width.max(last_bottom_width / 2.0);

    let plot = PlotRect::from_ltrb(
        left_axis_width,
        top_axis_height / 2.0,
        view_width - right_axis_width,
        view_height - bottom_axis_height,
    );

    // Tick counts are >= 1 for validated ranges, so the divisions are safe.
    let row_height = plot.height() / ranges.left_ticks() as f32;
    let col_width = plot.width() / ranges.bottom_ticks() as f32;

    Layout {
        plot,
        left_axis_width,
        right_axis_width,
        bottom_axis_height,
        top_axis_height,
        row_height,
        col_width,
    }
}
