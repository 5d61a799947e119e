//! Vector algebra used throughout the engine.
//!
//! Addition, subtraction, scaling, negation and the dot product are the plain [glam] operators
//! on [Vector3] (`a + b`, `a - b`, `a * s`, `-a`, `a.dot(b)`). The functions here cover the
//! operations that need an explicit policy for degenerate input.

use crate::core::types::{Matrix3, Number, Point3, Transform3, Vector3};

/// Length of a vector: the square root of its dot product with itself
#[inline]
pub fn magnitude(v: Vector3) -> Number { Vector3::dot(v, v).sqrt() }

/// Scales a vector to unit length.
///
/// A vector that can't be normalised (zero length, or non-finite length) gives back [Vector3::ZERO]
/// instead of spreading NaN/infinity into later calculations.
#[inline]
pub fn normalize(v: Vector3) -> Vector3 {
    let len = magnitude(v);
    if len == 0. || !len.is_finite() {
        return Vector3::ZERO;
    }
    v / len
}

pub fn deg_to_rad(deg: Number) -> Number { deg.to_radians() }

/// Rotation about the vertical (`+Y`) axis. Positive angles turn `-Z` (forwards) towards `-X` (left)
pub fn rotation_y(angle: Number) -> Matrix3 { Matrix3::from_rotation_y(angle) }

/// The transform taking camera-space points into world space.
///
/// The camera looks down its local `-Z` axis with `+Y` up; it is rotated by `rotation` radians
/// about the vertical axis, and then moved to `pos`.
pub fn camera_to_world(pos: Point3, rotation: Number) -> Transform3 {
    Transform3::from_mat3_translation(rotation_y(rotation), pos)
}
