//! Area error types.

use glam::IVec2;

/// Errors raised by area construction and coordinate-taking operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AreaError {
    /// A position (or window corner) lies outside the area's rectangle.
    #[error("position {position} is out of bounds {min}..={max}")]
    OutOfBounds {
        position: IVec2,
        min: IVec2,
        max: IVec2,
    },

    /// An area was requested with a non-positive width or height.
    #[error("invalid area dimensions {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },
}
