#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gr_float;
use crate::util::linalg::vector::write_components;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A quaternion stored as `(w, x, y, z)`, with `w` the scalar part.
///
/// Unit length is not enforced; rotation helpers such as [`to_mat4`](Quat::to_mat4) assume
/// it. A quaternion built with [`from_axis_angle`](Quat::from_axis_angle) remembers the
/// angle and axis it came from, for display only: the pair takes no part in the algebra or
/// in equality, and any operation producing a new quaternion drops it.
///
/// # Examples
///
/// ```
/// use gronckle::core::prelude::*;
/// use std::f32::consts::FRAC_PI_2;
///
/// let q = Quat::from_axis_angle(FRAC_PI_2, Vec3::backward());
/// let rotated = q.to_mat4() * Vec4::new(1.0, 0.0, 0.0, 0.0);
/// assert_eq!(rotated, Vec4::new(0.0, 1.0, 0.0, 0.0));
/// assert_eq!(q * q.inverse(), Quat::identity());
/// ```
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[must_use]
pub struct Quat {
    w: f32,
    x: f32,
    y: f32,
    z: f32,
    #[serde(skip)]
    axis_angle: Option<(f32, Vec3)>,
}

impl Quat {
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self {
            w,
            x,
            y,
            z,
            axis_angle: None,
        }
    }

    /// `w = cos(θ/2)` and `(x, y, z) = sin(θ/2) * axis`. The axis is used as given, so only
    /// a unit axis yields a unit quaternion.
    pub fn from_axis_angle(radians: f32, axis: Vec3) -> Self {
        let (s, c) = (radians / 2.0).sin_cos();
        Self {
            w: c,
            x: s * axis.x,
            y: s * axis.y,
            z: s * axis.z,
            axis_angle: Some((radians, axis)),
        }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub fn w(&self) -> f32 {
        self.w
    }
    pub fn x(&self) -> f32 {
        self.x
    }
    pub fn y(&self) -> f32 {
        self.y
    }
    pub fn z(&self) -> f32 {
        self.z
    }
    /// The imaginary part `(x, y, z)`.
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Component `i` in `(w, x, y, z)` order. Panics if `i > 3`.
    #[must_use]
    pub fn get(&self, i: usize) -> f32 {
        self.to_array()[i]
    }
    /// Sets component `i` in `(w, x, y, z)` order and forgets the construction angle and
    /// axis. Panics if `i > 3`.
    pub fn set(&mut self, i: usize, value: f32) {
        let mut data = self.to_array();
        data[i] = value;
        *self = Self::from(data);
    }

    #[must_use]
    pub fn to_array(&self) -> [f32; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// The angle and axis this quaternion was built from, if it still holds them.
    #[must_use]
    pub fn axis_angle(&self) -> Option<(f32, Vec3)> {
        self.axis_angle
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    #[must_use]
    pub fn dot(&self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Unit quaternion in the same direction. A zero quaternion is returned unchanged.
    pub fn normed(&self) -> Self {
        let len_squared = self.len_squared();
        if gr_float::float_equals(len_squared, 0.0) {
            *self
        } else {
            *self / len_squared.sqrt()
        }
    }

    /// The multiplicative inverse `conjugate / |q|²`. A zero quaternion yields its
    /// (zero) conjugate.
    pub fn inverse(&self) -> Self {
        let len_squared = self.len_squared();
        if gr_float::float_equals(len_squared, 0.0) {
            self.conjugate()
        } else {
            self.conjugate() / len_squared
        }
    }

    /// Componentwise division; unguarded.
    pub fn component_wise_div(&self, other: Self) -> Self {
        Self::new(
            self.w / other.w,
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
        )
    }

    /// The rotation matrix of a unit quaternion.
    pub fn to_mat4(&self) -> Mat4 {
        let Self { w, x, y, z, .. } = *self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Mat4::from_cols([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy), 0.0],
            [2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx), 0.0],
            [2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Self) -> bool {
        self.to_array()
            .into_iter()
            .zip(rhs.to_array())
            .all(|(a, b)| gr_float::float_equals(a, b))
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Quat {
    fn eq(&self, other: &Self) -> bool {
        self.almost_eq(*other)
    }
}

impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        let [w, x, y, z] = value;
        Self::new(w, x, y, z)
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.to_array()
    }
}

impl fmt::Display for Quat {
    /// `quat(w, x, y, z)`; the alternate form `{:#}` shows the construction angle and axis
    /// instead when the quaternion still has them.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.axis_angle {
            Some((radians, axis)) if f.alternate() => match f.precision() {
                Some(p) => write!(f, "quat({radians:.p$} rad about {axis:.p$})"),
                None => write!(f, "quat({radians} rad about {axis})"),
            },
            _ => write_components(f, "quat", &self.to_array()),
        }
    }
}

impl Add<Quat> for Quat {
    type Output = Quat;

    fn add(self, rhs: Quat) -> Self::Output {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl Add<f32> for Quat {
    type Output = Quat;

    fn add(self, rhs: f32) -> Self::Output {
        Self::new(self.w + rhs, self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Sub<Quat> for Quat {
    type Output = Quat;

    fn sub(self, rhs: Quat) -> Self::Output {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl Sub<f32> for Quat {
    type Output = Quat;

    fn sub(self, rhs: f32) -> Self::Output {
        Self::new(self.w - rhs, self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

/// The Hamilton product: `a * b` rotates by `b` first, then by `a`.
impl Mul<Quat> for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}
impl Mul<f32> for Quat {
    type Output = Quat;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl Mul<Quat> for f32 {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        rhs * self
    }
}

/// Unguarded.
impl Div<f32> for Quat {
    type Output = Quat;

    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Quat {
    type Output = Quat;

    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}
