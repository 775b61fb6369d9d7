#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gr_float;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Writes `label(c0, c1, ...)`, honouring the formatter's precision. Negative zero is
/// printed as `0`.
pub(crate) fn write_components(
    f: &mut Formatter<'_>,
    label: &str,
    components: &[f32],
) -> fmt::Result {
    let mut components = components.iter().map(|&c| gr_float::force_positive_zero(c));
    let body = match f.precision() {
        Some(p) => components.map(|c| format!("{c:.p$}")).join(", "),
        None => components.join(", "),
    };
    write!(f, "{label}({body})")
}

/// Generates the algebra shared by [`Vec2`], [`Vec3`] and [`Vec4`].
///
/// Everything is componentwise, so the three types only differ in their field lists.
/// Division (by a scalar or a vector) and [`reciprocal`](Vec2::reciprocal) are not
/// guarded: dividing by zero yields IEEE infinities or `NaN`.
macro_rules! impl_vector {
    ($name:ident, $n:literal, $label:literal, $($field:ident),+) => {
        impl $name {
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }
            #[must_use]
            pub fn splat(v: f32) -> Self {
                Self { $($field: v),+ }
            }
            #[must_use]
            pub fn zero() -> Self {
                Self::splat(0.0)
            }
            #[must_use]
            pub fn one() -> Self {
                Self::splat(1.0)
            }

            #[must_use]
            pub fn to_array(&self) -> [f32; $n] {
                [$(self.$field),+]
            }

            #[must_use]
            pub fn dot(&self, other: Self) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }
            /// Squared Euclidean length; cheaper than [`len`](Self::len) for comparisons.
            #[must_use]
            pub fn len_squared(&self) -> f32 {
                self.dot(*self)
            }
            #[must_use]
            pub fn len(&self) -> f32 {
                self.len_squared().sqrt()
            }

            /// Returns the unit vector in the same direction.
            ///
            /// If the squared length is zero within [`EPSILON`], the vector is returned
            /// unchanged instead of dividing by zero.
            #[must_use]
            pub fn normed(&self) -> Self {
                let len_squared = self.len_squared();
                if gr_float::float_equals(len_squared, 0.0) {
                    *self
                } else {
                    *self * (1.0 / len_squared.sqrt())
                }
            }

            /// Componentwise `1 / c`. Not guarded: a zero component becomes infinite.
            #[must_use]
            pub fn reciprocal(&self) -> Self {
                Self { $($field: 1.0 / self.$field),+ }
            }

            #[must_use]
            pub fn component_wise(&self, other: Self) -> Self {
                Self { $($field: self.$field * other.$field),+ }
            }
            #[must_use]
            pub fn component_wise_div(&self, other: Self) -> Self {
                Self { $($field: self.$field / other.$field),+ }
            }

            /// Linear interpolation towards `other`. `t` is not clamped, so values outside
            /// `[0, 1]` extrapolate.
            #[must_use]
            pub fn lerp(&self, other: Self, t: f32) -> Self {
                Self { $($field: super::lerp(self.$field, other.$field, t)),+ }
            }

            #[must_use]
            pub fn dist_squared(&self, other: Self) -> f32 {
                (other - *self).len_squared()
            }
            #[must_use]
            pub fn dist(&self, other: Self) -> f32 {
                (other - *self).len()
            }

            /// Clamps every component to `[min, max]`. Unlike [`f32::clamp`], this never
            /// panics: if `min > max`, every component becomes `min`.
            #[must_use]
            pub fn clamp(&self, min: f32, max: f32) -> Self {
                Self { $($field: self.$field.min(max).max(min)),+ }
            }

            #[must_use]
            pub fn almost_eq(&self, rhs: Self) -> bool {
                true $(&& gr_float::float_equals(self.$field, rhs.$field))+
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.almost_eq(*other)
            }
        }

        impl Zero for $name {
            fn zero() -> Self {
                $name::zero()
            }

            fn is_zero(&self) -> bool {
                self.almost_eq(Self::zero())
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(value: [f32; $n]) -> Self {
                let [$($field),+] = value;
                Self { $($field),+ }
            }
        }
        impl From<$name> for [f32; $n] {
            fn from(value: $name) -> Self {
                value.to_array()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write_components(f, $label, &self.to_array())
            }
        }

        impl Add<$name> for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }
        impl AddAssign<$name> for $name {
            fn add_assign(&mut self, rhs: $name) {
                *self = *self + rhs;
            }
        }
        impl Add<f32> for $name {
            type Output = $name;

            fn add(self, rhs: f32) -> Self::Output {
                Self { $($field: self.$field + rhs),+ }
            }
        }

        impl Sub<$name> for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }
        impl SubAssign<$name> for $name {
            fn sub_assign(&mut self, rhs: $name) {
                *self = *self - rhs;
            }
        }
        impl Sub<f32> for $name {
            type Output = $name;

            fn sub(self, rhs: f32) -> Self::Output {
                Self { $($field: self.$field - rhs),+ }
            }
        }

        impl Sum<$name> for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> Self {
                iter.fold($name::zero(), |acc, v| acc + v)
            }
        }

        impl Mul<$name> for $name {
            type Output = $name;

            fn mul(self, rhs: $name) -> Self::Output {
                self.component_wise(rhs)
            }
        }
        impl Mul<f32> for $name {
            type Output = $name;

            fn mul(self, rhs: f32) -> Self::Output {
                rhs * self
            }
        }
        impl Mul<$name> for f32 {
            type Output = $name;

            fn mul(self, rhs: $name) -> Self::Output {
                $name { $($field: self * rhs.$field),+ }
            }
        }
        impl MulAssign<f32> for $name {
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl Div<$name> for $name {
            type Output = $name;

            fn div(self, rhs: $name) -> Self::Output {
                self.component_wise_div(rhs)
            }
        }
        impl Div<f32> for $name {
            type Output = $name;

            fn div(self, rhs: f32) -> Self::Output {
                Self { $($field: self.$field / rhs),+ }
            }
        }
        impl DivAssign<f32> for $name {
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }

        impl Neg for $name {
            type Output = $name;

            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }
    };
}

/// A 2D vector of `f32` components.
///
/// Equality is componentwise and epsilon-tolerant (see
/// [`float_equals`](crate::util::gr_float::float_equals)).
///
/// # Examples
///
/// ```
/// use gronckle::core::prelude::*;
///
/// let v = Vec2::new(3.0, 4.0);
/// assert_eq!(v.len(), 5.0);
/// assert_eq!(v.normed(), Vec2::new(0.6, 0.8));
/// assert_eq!(v + (-v), Vec2::zero());
/// ```
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// A 3D vector of `f32` components, used for positions, directions, scale factors and
/// rotation axes.
///
/// # Examples
///
/// ```
/// use gronckle::core::prelude::*;
///
/// let a = Vec3::new(1.0, 2.0, 3.0);
/// let b = Vec3::new(3.0, 2.0, 1.0);
/// assert_eq!(a.lerp(b, 0.5), Vec3::splat(2.0));
/// assert_eq!(Vec3::right().cross(Vec3::up()), Vec3::new(0.0, 0.0, 1.0));
/// ```
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4D vector of `f32` components: homogeneous coordinates and RGBA colours.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_vector!(Vec2, 2, "vec2", x, y);
impl_vector!(Vec3, 3, "vec3", x, y, z);
impl_vector!(Vec4, 4, "vec4", x, y, z, w);

impl Vec3 {
    #[must_use]
    pub fn right() -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }
    /// The positive y-axis. Unlike screen-space conventions, y increases upward here.
    #[must_use]
    pub fn up() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }
    /// The positive z-axis, pointing out of the screen towards the viewer.
    #[must_use]
    pub fn backward() -> Vec3 {
        Vec3::new(0.0, 0.0, 1.0)
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Extends to homogeneous coordinates.
    #[must_use]
    pub fn extend(&self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl Vec4 {
    #[must_use]
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}
