// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the public widget API.

pub use skia_safe as skia;

pub mod axis;
pub mod chart;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod projection;
pub mod ranges;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{
    AxisConfig, AxisPosition, ClockLabels, DefaultLabels, FormatWith, LabelFormat, PlacedLabel,
};
pub use chart::{Chart, RenderOptions};
pub use curve::{smooth_segments, CubicSegment};
pub use error::ChartError;
pub use geometry::PlotRect;
pub use layout::{Layout, MeasuredAxis};
pub use ranges::AxisRanges;
pub use series::{DashPattern, GradientFill, SeriesConfig};
pub use theme::ChartStyle;
