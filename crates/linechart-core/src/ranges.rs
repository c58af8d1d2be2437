// File: crates/linechart-core/src/ranges.rs
// Summary: Chart-level axis ranges with validation and tick-count math.

use crate::error::ChartError;

/// Value ranges and tick steps for the three axes, set atomically via
/// [`crate::Chart::set_axis_ranges`].
///
/// The left axis is linear from 0 to `left_max` (no nonzero floor); the
/// bottom axis spans `bottom_min..bottom_max`; the right axis is linear from
/// 0 to `right_max` and only affects its own labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRanges {
    pub left_max: f32,
    pub left_step: f32,
    pub bottom_min: f32,
    pub bottom_max: f32,
    pub bottom_step: f32,
    pub right_max: f32,
    pub right_step: f32,
}

impl Default for AxisRanges {
    fn default() -> Self {
        Self {
            left_max: 500.0,
            left_step: 100.0,
            bottom_min: 0.0,
            bottom_max: 24.0,
            bottom_step: 4.0,
            right_max: 5.0,
            right_step: 1.0,
        }
    }
}

impl AxisRanges {
    /// Check every precondition the projection and layout math relies on.
    ///
    /// Steps must be strictly positive and no larger than their axis span,
    /// which guarantees at least one tick interval per axis and rules out
    /// every division-by-zero in later stages.
    pub fn validate(&self) -> Result<(), ChartError> {
        let fields = [
            self.left_max,
            self.left_step,
            self.bottom_min,
            self.bottom_max,
            self.bottom_step,
            self.right_max,
            self.right_step,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidRange { axis: "any", reason: "non-finite value" });
        }
        if self.left_max <= 0.0 {
            return Err(ChartError::InvalidRange { axis: "left", reason: "max must be positive" });
        }
        if self.left_step <= 0.0 {
            return Err(ChartError::InvalidRange { axis: "left", reason: "step must be positive" });
        }
        if self.left_step > self.left_max {
            return Err(ChartError::InvalidRange { axis: "left", reason: "step exceeds span" });
        }
        if self.bottom_max <= self.bottom_min {
            return Err(ChartError::InvalidRange { axis: "bottom", reason: "max must exceed min" });
        }
        if self.bottom_step <= 0.0 {
            return Err(ChartError::InvalidRange { axis: "bottom", reason: "step must be positive" });
        }
        if self.bottom_step > self.bottom_span() {
            return Err(ChartError::InvalidRange { axis: "bottom", reason: "step exceeds span" });
        }
        if self.right_max <= 0.0 {
            return Err(ChartError::InvalidRange { axis: "right", reason: "max must be positive" });
        }
        if self.right_step <= 0.0 {
            return Err(ChartError::InvalidRange { axis: "right", reason: "step must be positive" });
        }
        if self.right_step > self.right_max {
            return Err(ChartError::InvalidRange { axis: "right", reason: "step exceeds span" });
        }
        Ok(())
    }

    pub fn bottom_span(&self) -> f32 {
        self.bottom_max - self.bottom_min
    }

    /// Number of tick intervals on the left axis. Truncating: a span not
    /// evenly divisible by the step drops the final partial interval, and
    /// labels/gridlines share this count so they can never disagree.
    pub fn left_ticks(&self) -> usize {
        (self.left_max / self.left_step).floor() as usize
    }

    /// Number of tick intervals on the bottom axis (truncating, see
    /// [`Self::left_ticks`]).
    pub fn bottom_ticks(&self) -> usize {
        (self.bottom_span() / self.bottom_step).floor() as usize
    }

    /// Number of tick intervals on the right axis (truncating).
    pub fn right_ticks(&self) -> usize {
        (self.right_max / self.right_step).floor() as usize
    }
}
