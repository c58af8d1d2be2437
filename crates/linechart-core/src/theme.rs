// File: crates/linechart-core/src/theme.rs
// Summary: Chart chrome styling (grid, background, empty-state placeholder).

use skia_safe as skia;

use crate::types::{AXIS_MARGIN, GRID_STROKE_WIDTH};

/// Colors and metrics for everything that is not an axis or a series.
#[derive(Clone, Debug)]
pub struct ChartStyle {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub grid_stroke_width: f32,
    /// Gap between axis labels and the plot rectangle.
    pub axis_margin: f32,
    /// Message shown while no series is configured.
    pub placeholder: String,
    pub placeholder_color: skia::Color,
    pub placeholder_size: f32,
}

impl ChartStyle {
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(0x3a, 0x3c, 0x3c, 0x43),
            grid_stroke_width: GRID_STROKE_WIDTH,
            axis_margin: AXIS_MARGIN,
            placeholder: "No Chart data available".to_string(),
            placeholder_color: skia::Color::from_argb(255, 0, 0, 0),
            placeholder_size: 16.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(0x50, 0xc3, 0xc3, 0xcd),
            grid_stroke_width: GRID_STROKE_WIDTH,
            axis_margin: AXIS_MARGIN,
            placeholder: "No Chart data available".to_string(),
            placeholder_color: skia::Color::from_argb(255, 235, 235, 245),
            placeholder_size: 16.0,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::light()
    }
}
