// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, cache tags).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Gap between axis labels and the plot rectangle, in pixels.
pub const AXIS_MARGIN: f32 = 5.0;

/// Gridline stroke width in pixels.
pub const GRID_STROKE_WIDTH: f32 = 1.0;

/// Explicit validity tag for derived, cached artifacts (label positions,
/// projected series points, the plot layout). Mutations mark the owner
/// `Dirty`; the next access recomputes and flips back to `Clean`.
/// Emptiness of a cache is never used as a validity signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheState {
    Clean,
    Dirty,
}
