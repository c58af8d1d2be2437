// File: crates/linechart-core/src/series.rs
// Summary: Series model with style, dash/gradient options, and the cached
// pixel-point projection.

use skia_safe as skia;

use crate::geometry::PlotRect;
use crate::projection;
use crate::ranges::AxisRanges;
use crate::types::CacheState;

/// Dash pattern for a series stroke: on/off intervals plus phase offset,
/// all in pixels. Intervals must have even length for Skia to accept them.
#[derive(Clone, Debug, PartialEq)]
pub struct DashPattern {
    pub intervals: Vec<f32>,
    pub phase: f32,
}

impl DashPattern {
    pub fn new(intervals: Vec<f32>) -> Self {
        Self { intervals, phase: 0.0 }
    }

    pub(crate) fn to_effect(&self) -> Option<skia::PathEffect> {
        skia::PathEffect::dash(&self.intervals, self.phase)
    }
}

/// Two-stop vertical gradient used to fill the area between a series and
/// the plot's bottom edge. `start` paints the plot top, `end` the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientFill {
    pub start: skia::Color,
    pub end: skia::Color,
}

impl GradientFill {
    pub fn new(start: skia::Color, end: skia::Color) -> Self {
        Self { start, end }
    }

    pub(crate) fn to_shader(&self, plot: &PlotRect) -> Option<skia::Shader> {
        skia::gradient_shader::linear(
            (
                skia::Point::new(plot.left, plot.top),
                skia::Point::new(plot.left, plot.bottom),
            ),
            [self.start, self.end].as_ref(),
            None,
            skia::TileMode::Clamp,
            None,
            None,
        )
    }
}

/// Immutable configuration for one line: ordered data points plus style.
/// Later series draw on top of earlier ones.
#[derive(Clone, Debug)]
pub struct SeriesConfig {
    pub values: Vec<(f32, f32)>,
    pub color: skia::Color,
    pub stroke_width: f32,
    pub dash: Option<DashPattern>,
    pub fill: Option<GradientFill>,
}

impl SeriesConfig {
    pub fn with_values(values: Vec<(f32, f32)>) -> Self {
        Self {
            values,
            color: skia::Color::from_argb(255, 0, 0, 0),
            stroke_width: 2.0,
            dash: None,
            fill: None,
        }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn with_gradient_fill(mut self, fill: GradientFill) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// Render-time series: caches the projected pixel points behind a
/// Clean/Dirty tag so a resize or range change forces reprojection.
pub(crate) struct Series {
    pub config: SeriesConfig,
    points: Vec<skia::Point>,
    cache: CacheState,
}

impl Series {
    pub fn new(config: SeriesConfig) -> Self {
        Self { config, points: Vec::new(), cache: CacheState::Dirty }
    }

    pub fn invalidate(&mut self) {
        self.points.clear();
        self.cache = CacheState::Dirty;
    }

    /// Pixel points for the current geometry, projecting lazily.
    pub fn pixel_points(&mut self, plot: &PlotRect, ranges: &AxisRanges) -> &[skia::Point] {
        if self.cache == CacheState::Dirty {
            self.points = self
                .config
                .values
                .iter()
                .map(|&(x, y)| projection::project(x, y, plot, ranges))
                .collect();
            self.cache = CacheState::Clean;
        }
        &self.points
    }

    pub fn stroke_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.config.stroke_width);
        paint.set_color(self.config.color);
        if let Some(dash) = &self.config.dash {
            paint.set_path_effect(dash.to_effect());
        }
        paint
    }

    pub fn fill_paint(&self, plot: &PlotRect) -> Option<skia::Paint> {
        let fill = self.config.fill.as_ref()?;
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_shader(fill.to_shader(plot));
        Some(paint)
    }
}
