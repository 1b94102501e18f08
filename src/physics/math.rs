//! Scalar and vector types for the 2D physics core

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for positions, velocities and accelerations
///
/// Addition, subtraction and scaling are the operator impls; `length`, `dot`
/// and `normalize_or_zero` cover the rest. Normalizing a zero-length vector
/// yields the zero vector rather than NaN.
pub type Vector = bevy::math::DVec2;

/// Unit vector along `offset`, or `None` when the offset is degenerate
#[inline]
pub fn direction(offset: Vector) -> Option<Vector> {
    let length = offset.length();
    if length > 0.0 && length.is_finite() {
        Some(offset / length)
    } else {
        None
    }
}
