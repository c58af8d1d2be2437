// File: crates/linechart-core/src/error.rs
// Summary: Library error type for configuration-time precondition failures.

use thiserror::Error;

/// Errors surfaced synchronously at mutating calls.
///
/// Rendering itself never errors: degenerate series are skipped during draw.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    /// An axis range/step combination would produce NaN or infinite geometry.
    #[error("invalid {axis} axis range: {reason}")]
    InvalidRange {
        axis: &'static str,
        reason: &'static str,
    },
}
