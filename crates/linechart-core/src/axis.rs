// File: crates/linechart-core/src/axis.rs
// Summary: Axis configuration, label formatting, and the cached label engine.

use std::fmt;
use std::sync::Arc;

use skia_safe as skia;

use crate::layout::{Layout, MeasuredAxis};
use crate::ranges::AxisRanges;
use crate::text::LabelFont;
use crate::types::CacheState;

/// Which edge of the plot rectangle an axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisPosition {
    Left,
    Bottom,
    Right,
}

/// Capability turning a tick (index, value) into display text.
///
/// The default method stringifies the value; implementors override it to
/// render units, clock times, or positional captions.
pub trait LabelFormat: Send + Sync {
    fn label(&self, index: usize, value: f32) -> String {
        let _ = index;
        format!("{value}")
    }
}

/// The default formatter: decimal string of the raw value.
pub struct DefaultLabels;

impl LabelFormat for DefaultLabels {}

/// Adapter for closure-based formatters.
pub struct FormatWith<F>(pub F);

impl<F> LabelFormat for FormatWith<F>
where
    F: Fn(usize, f32) -> String + Send + Sync,
{
    fn label(&self, index: usize, value: f32) -> String {
        (self.0)(index, value)
    }
}

/// Formats tick values as wall-clock times. The value is interpreted as
/// unix seconds (UTC) and rendered with a chrono format pattern such as
/// `"%H:%M"`.
pub struct ClockLabels {
    pattern: String,
}

impl ClockLabels {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into() }
    }
}

impl LabelFormat for ClockLabels {
    fn label(&self, _index: usize, value: f32) -> String {
        match chrono::DateTime::from_timestamp(value as i64, 0) {
            Some(dt) => dt.format(&self.pattern).to_string(),
            None => format!("{value}"),
        }
    }
}

/// Immutable configuration for one axis. A chart holds its axes in
/// insertion order; there is no remove or replace operation.
#[derive(Clone)]
pub struct AxisConfig {
    pub position: AxisPosition,
    pub color: skia::Color,
    pub text_size: f32,
    /// Tick interval in data units. Kept for API parity; the tick math
    /// reads the chart-level [`AxisRanges`] steps.
    pub step: f32,
    pub formatter: Arc<dyn LabelFormat>,
}

impl AxisConfig {
    pub fn new(position: AxisPosition) -> Self {
        Self {
            position,
            color: skia::Color::from_argb(255, 0, 0, 0),
            text_size: 12.0,
            step: 100.0,
            formatter: Arc::new(DefaultLabels),
        }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn LabelFormat>) -> Self {
        self.formatter = formatter;
        self
    }
}

impl fmt::Debug for AxisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisConfig")
            .field("position", &self.position)
            .field("color", &self.color)
            .field("text_size", &self.text_size)
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}

/// (index, value) pairs for every tick of an axis, inclusive of both ends.
/// Left and right axes descend from their max so index 0 labels the topmost
/// gridline; the bottom axis ascends from its min.
pub fn tick_values(position: AxisPosition, ranges: &AxisRanges) -> Vec<(usize, f32)> {
    match position {
        AxisPosition::Left => (0..=ranges.left_ticks())
            .map(|i| (i, ranges.left_max - i as f32 * ranges.left_step))
            .collect(),
        AxisPosition::Bottom => (0..=ranges.bottom_ticks())
            .map(|i| (i, ranges.bottom_min + i as f32 * ranges.bottom_step))
            .collect(),
        AxisPosition::Right => (0..=ranges.right_ticks())
            .map(|i| (i, ranges.right_max - i as f32 * ranges.right_step))
            .collect(),
    }
}

/// One formatted label with its final baseline draw position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Render-time axis: owns the font derived from its config and caches
/// formatted labels with their draw positions behind a Clean/Dirty tag.
pub(crate) struct Axis {
    pub config: AxisConfig,
    font: LabelFont,
    labels: Vec<PlacedLabel>,
    cache: CacheState,
}

impl Axis {
    pub fn new(config: AxisConfig) -> Self {
        let font = LabelFont::new(config.color, config.text_size);
        Self { config, font, labels: Vec::new(), cache: CacheState::Dirty }
    }

    pub fn tick_values(&self, ranges: &AxisRanges) -> Vec<(usize, f32)> {
        tick_values(self.config.position, ranges)
    }

    /// Measure label extents for the layout pass.
    pub fn measure(&self, ranges: &AxisRanges) -> MeasuredAxis {
        let label_widths = self
            .tick_values(ranges)
            .iter()
            .map(|&(i, v)| self.font.measure(&self.config.formatter.label(i, v)))
            .collect();
        MeasuredAxis {
            position: self.config.position,
            label_widths,
            text_height: self.font.text_height(),
        }
    }

    /// Drop cached positions; the next [`Self::placed_labels`] recomputes.
    pub fn invalidate(&mut self) {
        self.labels.clear();
        self.cache = CacheState::Dirty;
    }

    /// Final draw positions for every label, recomputed when dirty.
    ///
    /// Left labels are right-aligned against the reserved left margin and
    /// vertically centered on their gridline (the text_height/4 nudge).
    /// Bottom labels are horizontally centered on their tick and sit on the
    /// widget's bottom edge. Right labels start just outside the plot.
    pub fn placed_labels(
        &mut self,
        ranges: &AxisRanges,
        layout: &Layout,
        view_height: f32,
        margin: f32,
    ) -> &[PlacedLabel] {
        if self.cache == CacheState::Clean {
            return &self.labels;
        }
        let plot = layout.plot;
        let text_height = self.font.text_height();
        self.labels = self
            .tick_values(ranges)
            .into_iter()
            .map(|(i, value)| {
                let text = self.config.formatter.label(i, value);
                let (x, y) = match self.config.position {
                    AxisPosition::Left => {
                        let width = self.font.measure(&text);
                        (
                            layout.left_axis_width - width - margin,
                            i as f32 * layout.row_height + text_height / 4.0 + plot.top,
                        )
                    }
                    AxisPosition::Bottom => {
                        let width = self.font.measure(&text);
                        (
                            i as f32 * layout.col_width + plot.left - width / 2.0,
                            view_height - self.font.descent(),
                        )
                    }
                    AxisPosition::Right => (
                        plot.right + margin,
                        i as f32 * layout.row_height + text_height / 4.0 + plot.top,
                    ),
                };
                PlacedLabel { text, x, y }
            })
            .collect();
        self.cache = CacheState::Clean;
        &self.labels
    }

    pub fn draw(&self, canvas: &skia::Canvas) {
        for label in &self.labels {
            self.font.draw(canvas, &label.text, label.x, label.y);
        }
    }
}
