//! Small fixed-size linear algebra for a 3D render loop: [`Vec2`]/[`Vec3`]/[`Vec4`],
//! column-major [`Mat2`]/[`Mat3`]/[`Mat4`], [`Quat`], and the [`transform`] factory.
//!
//! Equality on every type is epsilon-tolerant (see [`gr_float::float_equals`]).
//!
//! [`gr_float::float_equals`]: crate::util::gr_float::float_equals

mod matrix;
mod quat;
pub mod transform;
mod vector;

pub use matrix::{Mat2, Mat3, Mat4};
pub use quat::Quat;
pub use transform::{look_at, model, normal_matrix, ortho, perspective, rotation, scale, translation, view};
pub use vector::{Vec2, Vec3, Vec4};

/// Scalar linear interpolation, unclamped.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
