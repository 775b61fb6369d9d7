#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gr_float;
use crate::warn_every_seconds;
use crate::util::linalg::vector::write_components;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, Div, Mul, MulAssign, Neg, Sub},
};

/// Generates the storage accessors and elementwise algebra shared by [`Mat2`], [`Mat3`] and
/// [`Mat4`].
///
/// Storage is a flat column-major array: element `col * N + row`. `*` between two matrices
/// is true matrix multiplication with the receiver on the left, so `(a * b) * v` applies
/// `b` first. Division (elementwise or by a scalar) is not guarded.
macro_rules! impl_matrix {
    ($name:ident, $n:literal, $len:literal, $label:literal) => {
        impl $name {
            /// Wraps a flat column-major array.
            pub const fn from_data(data: [f32; $len]) -> Self {
                Self { data }
            }
            pub fn identity() -> Self {
                let mut data = [0.0; $len];
                for i in 0..$n {
                    data[i * $n + i] = 1.0;
                }
                Self { data }
            }
            pub fn zero() -> Self {
                Self { data: [0.0; $len] }
            }

            /// Reads the element at flat column-major index `i`. Panics if `i` is out of
            /// bounds, like slice indexing.
            #[must_use]
            pub fn get(&self, i: usize) -> f32 {
                self.data[i]
            }
            pub fn set(&mut self, i: usize, value: f32) {
                self.data[i] = value;
            }
            #[must_use]
            pub fn data(&self) -> &[f32; $len] {
                &self.data
            }
            pub fn data_mut(&mut self) -> &mut [f32; $len] {
                &mut self.data
            }
            pub fn set_data(&mut self, data: [f32; $len]) {
                self.data = data;
            }

            /// Elementwise division. A zero element in `rhs` yields an infinity or `NaN`.
            pub fn component_wise_div(&self, rhs: Self) -> Self {
                Self::from_data(std::array::from_fn(|i| self.data[i] / rhs.data[i]))
            }

            #[must_use]
            pub fn almost_eq(&self, rhs: Self) -> bool {
                self.data
                    .iter()
                    .zip(rhs.data.iter())
                    .all(|(a, b)| gr_float::float_equals(*a, *b))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.almost_eq(*other)
            }
        }

        impl One for $name {
            fn one() -> Self {
                Self::identity()
            }
        }

        impl Zero for $name {
            fn zero() -> Self {
                Self::zero()
            }

            fn is_zero(&self) -> bool {
                self.almost_eq(Self::zero())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write_components(f, $label, &self.data)
            }
        }

        impl Add<$name> for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> Self::Output {
                Self::from_data(std::array::from_fn(|i| self.data[i] + rhs.data[i]))
            }
        }
        impl Add<f32> for $name {
            type Output = $name;

            fn add(self, rhs: f32) -> Self::Output {
                Self::from_data(self.data.map(|x| x + rhs))
            }
        }

        impl Sub<$name> for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> Self::Output {
                Self::from_data(std::array::from_fn(|i| self.data[i] - rhs.data[i]))
            }
        }
        impl Sub<f32> for $name {
            type Output = $name;

            fn sub(self, rhs: f32) -> Self::Output {
                Self::from_data(self.data.map(|x| x - rhs))
            }
        }

        impl Mul<$name> for $name {
            type Output = $name;

            fn mul(self, rhs: $name) -> Self::Output {
                let mut data = [0.0; $len];
                for col in 0..$n {
                    for row in 0..$n {
                        data[col * $n + row] = (0..$n)
                            .map(|k| self.data[k * $n + row] * rhs.data[col * $n + k])
                            .sum();
                    }
                }
                Self { data }
            }
        }
        impl MulAssign<$name> for $name {
            fn mul_assign(&mut self, rhs: $name) {
                *self = *self * rhs;
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
                $name::from_data(rhs.data.map(|x| self * x))
            }
        }

        impl Div<f32> for $name {
            type Output = $name;

            fn div(self, rhs: f32) -> Self::Output {
                Self::from_data(self.data.map(|x| x / rhs))
            }
        }

        impl Neg for $name {
            type Output = $name;

            fn neg(self) -> Self::Output {
                Self::from_data(self.data.map(|x| -x))
            }
        }
    };
}

/// A 2x2 matrix, stored column-major:
/// ```text
/// | data[0] data[2] |
/// | data[1] data[3] |
/// ```
///
/// # Examples
///
/// ```
/// use gronckle::core::prelude::*;
///
/// let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(m.det(), -2.0);
/// assert_eq!(m * m.inverse(), Mat2::identity());
/// ```
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[must_use]
pub struct Mat2 {
    data: [f32; 4],
}

/// A 3x3 matrix, stored column-major (element `col * 3 + row`).
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[must_use]
pub struct Mat3 {
    data: [f32; 9],
}

/// A 4x4 matrix, stored column-major (element `col * 4 + row`).
///
/// This is the layout a `mat4x4<f32>` uniform expects, so [`data()`](Mat4::data) can be
/// uploaded as-is. The translation of an affine transform lives in elements 12 to 14.
///
/// # Examples
///
/// ```
/// use gronckle::core::prelude::*;
///
/// let m = Mat4::identity().translate(Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
/// assert_eq!(m.inverse() * m, Mat4::identity());
/// ```
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[must_use]
pub struct Mat4 {
    data: [f32; 16],
}

impl_matrix!(Mat2, 2, 4, "mat2");
impl_matrix!(Mat3, 3, 9, "mat3");
impl_matrix!(Mat4, 4, 16, "mat4");

impl Mat2 {
    /// Arguments are in storage order: column 0 first.
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Mat2 {
        Mat2 {
            data: [m00, m01, m10, m11],
        }
    }
    pub fn from_cols(cols: [[f32; 2]; 2]) -> Mat2 {
        Mat2::from_data(std::array::from_fn(|i| cols[i / 2][i % 2]))
    }
    pub fn from_rows(rows: [[f32; 2]; 2]) -> Mat2 {
        Mat2::from_cols(rows).transposed()
    }

    pub fn transposed(&self) -> Mat2 {
        let d = &self.data;
        Mat2::new(d[0], d[2], d[1], d[3])
    }

    #[must_use]
    pub fn det(&self) -> f32 {
        let d = &self.data;
        d[0] * d[3] - d[1] * d[2]
    }

    /// Returns the inverse, or the identity if the matrix is singular.
    pub fn inverse(&self) -> Mat2 {
        let det = self.det();
        if gr_float::float_equals(det, 0.0) {
            warn_every_seconds!(1, "Mat2::inverse(): singular matrix {}, using identity", self);
            return Mat2::identity();
        }
        let factor = 1.0 / det;
        let d = &self.data;
        Mat2::new(factor * d[3], factor * -d[1], factor * -d[2], factor * d[0])
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        let d = &self.data;
        Vec2 {
            x: d[0] * rhs.x + d[2] * rhs.y,
            y: d[1] * rhs.x + d[3] * rhs.y,
        }
    }
}

impl Mat3 {
    /// Arguments are in storage order: column 0 first.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Mat3 {
        Mat3 {
            data: [m00, m01, m02, m10, m11, m12, m20, m21, m22],
        }
    }
    pub fn from_cols(cols: [[f32; 3]; 3]) -> Mat3 {
        Mat3::from_data(std::array::from_fn(|i| cols[i / 3][i % 3]))
    }
    pub fn from_rows(rows: [[f32; 3]; 3]) -> Mat3 {
        Mat3::from_cols(rows).transposed()
    }

    pub fn transposed(&self) -> Mat3 {
        Mat3::from_data(std::array::from_fn(|i| self.data[(i % 3) * 3 + i / 3]))
    }

    /// Cofactors of the first row, shared by [`det`](Mat3::det) and
    /// [`inverse`](Mat3::inverse).
    fn first_cofactors(&self) -> [f32; 3] {
        let d = &self.data;
        [
            d[8] * d[4] - d[5] * d[7],
            -d[8] * d[3] + d[5] * d[6],
            d[7] * d[3] - d[4] * d[6],
        ]
    }

    #[must_use]
    pub fn det(&self) -> f32 {
        let [k0, k1, k2] = self.first_cofactors();
        self.data[0] * k0 + self.data[1] * k1 + self.data[2] * k2
    }

    /// Returns the inverse, or the identity if the matrix is singular.
    pub fn inverse(&self) -> Mat3 {
        let [k0, k1, k2] = self.first_cofactors();
        let [m0, m1, m2, m3, m4, m5, m6, m7, m8] = self.data;
        let det = m0 * k0 + m1 * k1 + m2 * k2;
        if gr_float::float_equals(det, 0.0) {
            warn_every_seconds!(1, "Mat3::inverse(): singular matrix {}, using identity", self);
            return Mat3::identity();
        }
        let factor = 1.0 / det;
        Mat3::new(
            k0 * factor,
            (-m8 * m1 + m2 * m7) * factor,
            (m5 * m1 - m2 * m4) * factor,
            k1 * factor,
            (m8 * m0 - m2 * m6) * factor,
            (-m5 * m0 + m2 * m3) * factor,
            k2 * factor,
            (-m7 * m0 + m1 * m6) * factor,
            (m4 * m0 - m1 * m3) * factor,
        )
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        let d = &self.data;
        Vec3 {
            x: d[0] * rhs.x + d[3] * rhs.y + d[6] * rhs.z,
            y: d[1] * rhs.x + d[4] * rhs.y + d[7] * rhs.z,
            z: d[2] * rhs.x + d[5] * rhs.y + d[8] * rhs.z,
        }
    }
}

impl Mat4 {
    /// Arguments are in storage order: column 0 first.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Mat4 {
        Mat4 {
            data: [
                m00, m01, m02, m03,
                m10, m11, m12, m13,
                m20, m21, m22, m23,
                m30, m31, m32, m33,
            ],
        }
    }
    pub fn from_cols(cols: [[f32; 4]; 4]) -> Mat4 {
        Mat4::from_data(std::array::from_fn(|i| cols[i / 4][i % 4]))
    }
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Mat4 {
        Mat4::from_cols(rows).transposed()
    }

    pub fn transposed(&self) -> Mat4 {
        Mat4::from_data(std::array::from_fn(|i| self.data[(i % 4) * 4 + i / 4]))
    }

    /// The twelve 2x2 sub-determinants of the upper and lower column pairs, from which both
    /// the determinant and the adjugate are assembled.
    #[rustfmt::skip]
    fn sub_determinants(&self) -> [f32; 12] {
        let [
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        ] = self.data;
        [
            m00 * m11 - m01 * m10,
            m00 * m12 - m02 * m10,
            m00 * m13 - m03 * m10,
            m01 * m12 - m02 * m11,
            m01 * m13 - m03 * m11,
            m02 * m13 - m03 * m12,
            m20 * m31 - m21 * m30,
            m20 * m32 - m22 * m30,
            m20 * m33 - m23 * m30,
            m21 * m32 - m22 * m31,
            m21 * m33 - m23 * m31,
            m22 * m33 - m23 * m32,
        ]
    }

    fn det_from(b: &[f32; 12]) -> f32 {
        b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8] - b[4] * b[7] + b[5] * b[6]
    }

    #[must_use]
    pub fn det(&self) -> f32 {
        Self::det_from(&self.sub_determinants())
    }

    /// Returns the inverse, or the identity if the matrix is singular.
    ///
    /// The render loop inverts the model-view matrix every frame, so a singular input is
    /// reported through a rate-limited warning rather than an error.
    pub fn inverse(&self) -> Mat4 {
        let b = self.sub_determinants();
        let det = Self::det_from(&b);
        if gr_float::float_equals(det, 0.0) {
            warn_every_seconds!(1, "Mat4::inverse(): singular matrix {}, using identity", self);
            return Mat4::identity();
        }
        let factor = 1.0 / det;
        let [
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        ] = self.data;
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = b;
        Mat4::new(
            (m11 * b11 - m12 * b10 + m13 * b09) * factor,
            (m02 * b10 - m01 * b11 - m03 * b09) * factor,
            (m31 * b05 - m32 * b04 + m33 * b03) * factor,
            (m22 * b04 - m21 * b05 - m23 * b03) * factor,
            (m12 * b08 - m10 * b11 - m13 * b07) * factor,
            (m00 * b11 - m02 * b08 + m03 * b07) * factor,
            (m32 * b02 - m30 * b05 - m33 * b01) * factor,
            (m20 * b05 - m22 * b02 + m23 * b01) * factor,
            (m10 * b10 - m11 * b08 + m13 * b06) * factor,
            (m01 * b08 - m00 * b10 - m03 * b06) * factor,
            (m30 * b04 - m31 * b02 + m33 * b00) * factor,
            (m21 * b02 - m20 * b04 - m23 * b00) * factor,
            (m11 * b07 - m10 * b09 - m12 * b06) * factor,
            (m00 * b09 - m01 * b07 + m02 * b06) * factor,
            (m31 * b01 - m30 * b03 - m32 * b00) * factor,
            (m20 * b03 - m21 * b01 + m22 * b00) * factor,
        )
    }

    /// Post-multiplies a translation: equivalent to `self * translation(t)`.
    pub fn translate(&self, t: Vec3) -> Mat4 {
        let d = &self.data;
        let mut data = *d;
        for row in 0..4 {
            data[12 + row] = d[row] * t.x + d[4 + row] * t.y + d[8 + row] * t.z + d[12 + row];
        }
        Mat4 { data }
    }

    /// Post-multiplies a scale: equivalent to `self * scale(s)`.
    pub fn scale(&self, s: Vec3) -> Mat4 {
        let mut data = self.data;
        for (col, factor) in [s.x, s.y, s.z].into_iter().enumerate() {
            for value in &mut data[col * 4..col * 4 + 4] {
                *value *= factor;
            }
        }
        Mat4 { data }
    }

    /// Post-multiplies a rotation of `radians` counterclockwise about `axis`, built with
    /// Rodrigues' formula from the normalised axis. The translation column is untouched.
    ///
    /// A zero axis describes no rotation, so the matrix is returned unchanged.
    pub fn rotate(&self, radians: f32, axis: Vec3) -> Mat4 {
        let len_squared = axis.len_squared();
        if gr_float::float_equals(len_squared, 0.0) {
            return *self;
        }
        let Vec3 { x, y, z } = axis * (1.0 / len_squared.sqrt());

        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;
        // Columns of the rotation matrix.
        let r = [
            [x * x * t + c, y * x * t + z * s, z * x * t - y * s],
            [x * y * t - z * s, y * y * t + c, z * y * t + x * s],
            [x * z * t + y * s, y * z * t - x * s, z * z * t + c],
        ];

        let d = &self.data;
        let mut data = self.data;
        for (col, r_col) in r.iter().enumerate() {
            for row in 0..4 {
                data[col * 4 + row] = d[row] * r_col[0] + d[4 + row] * r_col[1] + d[8 + row] * r_col[2];
            }
        }
        Mat4 { data }
    }

    /// Serialises the matrix into the 64-byte little-endian image of a `mat4x4<f32>`
    /// uniform buffer.
    pub fn to_uniform_bytes(&self) -> Result<Vec<u8>> {
        let bytes = bincode::serialize(&self.data)
            .context("Mat4::to_uniform_bytes(): serialisation failed")?;
        if bytes.len() != UNIFORM_BUFFER_SIZE {
            bail!(
                "Mat4::to_uniform_bytes(): expected {UNIFORM_BUFFER_SIZE} bytes, got {}",
                bytes.len()
            );
        }
        Ok(bytes)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        let d = &self.data;
        let [x, y, z, w] = std::array::from_fn(|row| {
            d[row] * rhs.x + d[4 + row] * rhs.y + d[8 + row] * rhs.z + d[12 + row] * rhs.w
        });
        Vec4 { x, y, z, w }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f32::consts::{FRAC_PI_2, PI};

    fn random_mat4(rng: &mut StdRng) -> Mat4 {
        Mat4::from_data(std::array::from_fn(|_| rng.gen_range(-10.0..10.0)))
    }

    // Unimodular, so the inverse has small integer entries and is exact in f32.
    fn unimodular_mat4() -> Mat4 {
        Mat4::from_rows([
            [1.0, 1.0, 0.0, 2.0],
            [2.0, 3.0, 3.0, 4.0],
            [0.0, 1.0, 4.0, 1.0],
            [1.0, 1.0, 2.0, 5.0],
        ])
    }

    #[test]
    fn storage_is_column_major() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.data(), &[1.0, 3.0, 2.0, 4.0]);
        let m = Mat3::from_cols([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.get(3), 4.0);
        assert_eq!(m.get(8), 9.0);
        let m = Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(m.get(1), 5.0);
        assert_eq!(m.get(12), 4.0);
    }

    #[test]
    fn get_set() {
        let mut m = Mat4::identity();
        m.set(13, 7.0);
        assert_eq!(m.get(13), 7.0);
        assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(0.0, 7.0, 0.0, 1.0));
        m.data_mut()[0] = 2.0;
        assert_eq!(m.get(0), 2.0);
        m.set_data([0.0; 16]);
        assert!(m.is_zero());
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let _ = Mat2::identity().get(4);
    }

    #[test]
    fn identity_is_neutral() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..64 {
            let m = random_mat4(&mut rng);
            assert_eq!(m * Mat4::identity(), m);
            assert_eq!(Mat4::identity() * m, m);
        }
        let m2 = Mat2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m2 * Mat2::identity(), m2);
        assert_eq!(Mat2::identity() * m2, m2);
        let m3 = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert_eq!(m3 * Mat3::identity(), m3);
        assert_eq!(Mat3::identity() * m3, m3);
        assert_eq!(Mat3::default(), Mat3::identity());
    }

    #[test]
    fn transpose_twice_is_identity() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..64 {
            let m = random_mat4(&mut rng);
            assert_eq!(m.transposed().transposed(), m);
        }
        let m3 = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(
            m3.transposed(),
            Mat3::from_rows([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]])
        );
        assert_eq!(Mat2::new(1.0, 2.0, 3.0, 4.0).transposed(), Mat2::new(1.0, 3.0, 2.0, 4.0));
    }

    #[test]
    fn multiplication_applies_rhs_first() {
        let translate = Mat4::identity().translate(Vec3::new(1.0, 0.0, 0.0));
        let scale = Mat4::identity().scale(Vec3::splat(2.0));
        let p = Vec4::new(1.0, 1.0, 1.0, 1.0);
        // Scale first, then translate.
        assert_eq!((translate * scale) * p, Vec4::new(3.0, 2.0, 2.0, 1.0));
        assert_eq!(translate * (scale * p), (translate * scale) * p);
        // Translate first, then scale.
        assert_eq!((scale * translate) * p, Vec4::new(4.0, 2.0, 2.0, 1.0));

        let a = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Mat2::from_rows([[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(a * b, Mat2::from_rows([[2.0, 1.0], [4.0, 3.0]]));
        let v = Vec2::new(5.0, 7.0);
        assert_eq!((a * b) * v, a * (b * v));
    }

    #[test]
    fn mat3_multiplication() {
        let a = Mat3::from_rows([[1.0, 2.0, 0.0], [0.0, 1.0, 3.0], [4.0, 0.0, 1.0]]);
        let b = Mat3::from_rows([[2.0, 0.0, 1.0], [1.0, 1.0, 0.0], [0.0, 2.0, 1.0]]);
        assert_eq!(
            a * b,
            Mat3::from_rows([[4.0, 2.0, 1.0], [1.0, 7.0, 3.0], [8.0, 2.0, 5.0]])
        );
        let v = Vec3::new(1.0, -1.0, 2.0);
        assert_eq!((a * b) * v, a * (b * v));
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn elementwise_and_scalar_ops() {
        let a = Mat2::new(1.0, 2.0, 3.0, 4.0);
        let b = Mat2::new(4.0, 3.0, 2.0, 1.0);
        assert_eq!(a + b, Mat2::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a - b, Mat2::new(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(a.component_wise_div(b), Mat2::new(0.25, 2.0 / 3.0, 1.5, 4.0));
        assert_eq!(a + 1.0, Mat2::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(a - 1.0, Mat2::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(a * 2.0, Mat2::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Mat2::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-a, Mat2::new(-1.0, -2.0, -3.0, -4.0));
        assert!((a + (-a)).is_zero());

        let m4 = Mat4::identity() * 3.0;
        assert_eq!(m4 - Mat4::identity(), Mat4::identity() * 2.0);
        assert_eq!(m4 / 3.0, Mat4::identity());
    }

    #[test]
    fn division_is_unguarded() {
        let m = Mat2::identity() / 0.0;
        assert!(m.get(0).is_infinite());
        assert!(m.get(1).is_nan());
    }

    #[test]
    fn determinants() {
        assert_eq!(Mat2::new(1.0, 2.0, 3.0, 4.0).det(), -2.0);
        assert_eq!(Mat2::identity().det(), 1.0);

        let m3 = Mat3::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]]);
        // 2*(3-2) - 0 + 1*(1-3) = 0
        assert_eq!(m3.det(), 0.0);
        let m3 = Mat3::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_eq!(m3.det(), -306.0);
        assert_eq!(m3.transposed().det(), -306.0);

        assert_eq!(unimodular_mat4().det(), 1.0);
        assert_eq!(Mat4::identity().scale(Vec3::new(2.0, 3.0, 4.0)).det(), 24.0);
        let m4 = Mat4::from_rows([
            [3.0, 2.0, 0.0, 1.0],
            [4.0, 0.0, 1.0, 2.0],
            [3.0, 0.0, 2.0, 1.0],
            [9.0, 2.0, 3.0, 1.0],
        ]);
        assert_eq!(m4.det(), 24.0);
    }

    #[test]
    fn inverse_of_invertible() {
        let m2 = Mat2::new(4.0, 2.0, 7.0, 6.0);
        assert_eq!(m2 * m2.inverse(), Mat2::identity());
        assert_eq!(m2.inverse() * m2, Mat2::identity());
        assert_eq!(m2.inverse(), Mat2::new(0.6, -0.2, -0.7, 0.4));

        let m3 = Mat3::from_rows([[2.0, 3.0, 1.0], [1.0, 2.0, 1.0], [1.0, 1.0, 1.0]]);
        assert_eq!(m3.det(), 1.0);
        assert_eq!(
            m3.inverse(),
            Mat3::from_rows([[1.0, -2.0, 1.0], [0.0, 1.0, -1.0], [-1.0, 1.0, 1.0]])
        );
        assert_eq!(m3 * m3.inverse(), Mat3::identity());
        assert_eq!(m3.inverse() * m3, Mat3::identity());

        let m4 = unimodular_mat4();
        assert_eq!(m4 * m4.inverse(), Mat4::identity());
        assert_eq!(m4.inverse() * m4, Mat4::identity());
        assert_eq!(m4.inverse().inverse(), m4);

        let affine = Mat4::identity()
            .translate(Vec3::new(1.0, -2.0, 3.0))
            .scale(Vec3::new(2.0, 0.5, 4.0));
        assert_eq!(affine * affine.inverse(), Mat4::identity());
    }

    #[test]
    fn inverse_of_singular_is_identity() {
        assert_eq!(Mat2::new(1.0, 2.0, 2.0, 4.0).inverse(), Mat2::identity());
        assert_eq!(Mat2::zero().inverse(), Mat2::identity());
        let m3 = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m3.inverse(), Mat3::identity());
        assert_eq!(Mat3::zero().inverse(), Mat3::identity());
        let flattened = Mat4::identity().scale(Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(flattened.inverse(), Mat4::identity());
        assert_eq!(Mat4::zero().inverse(), Mat4::identity());
    }

    #[test]
    fn translate_and_scale_compose() {
        let t = Vec3::new(1.0, 2.0, 3.0);
        let m = Mat4::identity().scale(Vec3::splat(2.0)).translate(t);
        // The translation is scaled because it is applied in the scaled frame.
        assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(2.0, 4.0, 6.0, 1.0));

        let m = Mat4::identity().translate(t).scale(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m * Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(2.0, 4.0, 6.0, 1.0));
        // w = 0 directions ignore translation.
        assert_eq!(m * Vec4::new(1.0, 1.0, 1.0, 0.0), Vec4::new(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn rotate_is_counterclockwise() {
        let m = Mat4::identity().rotate(FRAC_PI_2, Vec3::backward());
        assert_eq!(m * Vec4::new(1.0, 0.0, 0.0, 1.0), Vec4::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(m * Vec4::new(0.0, 1.0, 0.0, 1.0), Vec4::new(-1.0, 0.0, 0.0, 1.0));

        // The axis is normalised internally.
        let scaled_axis = Mat4::identity().rotate(FRAC_PI_2, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(scaled_axis, m);

        let half_turn = Mat4::identity().rotate(PI, Vec3::up());
        assert_eq!(half_turn * Vec4::new(1.0, 0.0, 1.0, 0.0), Vec4::new(-1.0, 0.0, -1.0, 0.0));
    }

    #[test]
    fn rotate_keeps_translation_column() {
        let m = Mat4::identity()
            .translate(Vec3::new(4.0, 5.0, 6.0))
            .rotate(1.2, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(m.get(12), 4.0);
        assert_eq!(m.get(13), 5.0);
        assert_eq!(m.get(14), 6.0);
        assert_eq!(m.get(15), 1.0);
        assert!(gr_float::float_equals(m.det(), 1.0));
    }

    #[test]
    fn rotate_about_zero_axis_is_noop() {
        let m = Mat4::identity().translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.rotate(1.0, Vec3::zero()), m);
    }

    #[test]
    fn uniform_bytes() {
        let m = Mat4::identity().translate(Vec3::new(1.0, 2.0, 3.0));
        let bytes = m.to_uniform_bytes().unwrap();
        assert_eq!(bytes.len(), UNIFORM_BUFFER_SIZE);
        assert_eq!(bytes[0..4], 1.0_f32.to_le_bytes());
        assert_eq!(bytes[4..8], 0.0_f32.to_le_bytes());
        assert_eq!(bytes[48..52], 1.0_f32.to_le_bytes());
        assert_eq!(bytes[52..56], 2.0_f32.to_le_bytes());
        assert_eq!(bytes[56..60], 3.0_f32.to_le_bytes());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Mat2::new(1.0, 2.0, 3.0, 4.0)), "mat2(1, 2, 3, 4)");
        assert_eq!(
            format!("{:.1}", Mat2::identity() * 0.5),
            "mat2(0.5, 0.0, 0.0, 0.5)"
        );
    }

    #[test]
    fn one_and_zero_traits() {
        let one: Mat4 = One::one();
        assert_eq!(one, Mat4::identity());
        let zero: Mat3 = Zero::zero();
        assert!(zero.is_zero());
        assert!(!Mat3::identity().is_zero());
    }
}
