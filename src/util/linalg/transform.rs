//! Factory functions for the matrices a render loop needs each frame.
//!
//! All results are column-major [`Mat4`]s for a right-handed view space looking down `-z`,
//! with clip-space depth in `[-1, 1]`.

#[allow(unused_imports)]
use crate::core::prelude::*;

#[rustfmt::skip]
pub fn translation(t: Vec3) -> Mat4 {
    Mat4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        t.x, t.y, t.z, 1.0,
    )
}

#[rustfmt::skip]
pub fn scale(s: Vec3) -> Mat4 {
    Mat4::new(
        s.x, 0.0, 0.0, 0.0,
        0.0, s.y, 0.0, 0.0,
        0.0, 0.0, s.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// The rotation matrix of a unit quaternion.
pub fn rotation(q: Quat) -> Mat4 {
    q.to_mat4()
}

/// `translation(t) * rotation(q) * scale(s)`, assembled without the two matrix products.
pub fn model(t: Vec3, q: Quat, s: Vec3) -> Mat4 {
    let mut m = q.to_mat4();
    for (col, factor) in [s.x, s.y, s.z].into_iter().enumerate() {
        for row in 0..3 {
            let i = col * 4 + row;
            m.set(i, m.get(i) * factor);
        }
    }
    m.set(12, t.x);
    m.set(13, t.y);
    m.set(14, t.z);
    m
}

/// Perspective projection with vertical field of view `fov_y` (radians) and
/// `aspect = width / height`.
///
/// # Examples
///
/// ```
/// use gronckle::core::prelude::*;
/// use std::f32::consts::FRAC_PI_2;
///
/// let p = linalg::perspective(FRAC_PI_2, 1.0, 0.1, 1000.0);
/// assert!(gr_float::float_equals(p.get(0), 1.0));
/// assert_eq!(p.get(11), -1.0);
/// ```
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let tan = (fov_y / 2.0).tan();
    let height = near * tan;
    let width = height * aspect;
    let depth = far - near;
    let mut m = Mat4::zero();
    m.set(0, near / width);
    m.set(5, near / height);
    m.set(10, -(far + near) / depth);
    m.set(11, -1.0);
    m.set(14, -2.0 * far * near / depth);
    m
}

/// Orthographic projection. `width` and `height` are half-extents: the visible box spans
/// `[-width, width]` by `[-height, height]`.
pub fn ortho(width: f32, height: f32, near: f32, far: f32) -> Mat4 {
    let depth = far - near;
    let mut m = Mat4::identity();
    m.set(0, 1.0 / width);
    m.set(5, 1.0 / height);
    m.set(10, -2.0 / depth);
    m.set(14, -(far + near) / depth);
    m
}

/// View matrix for a camera at `eye` looking at `target`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let z_axis = (eye - target).normed();
    let x_axis = up.cross(z_axis).normed();
    let y_axis = z_axis.cross(x_axis).normed();
    view(x_axis, y_axis, z_axis, eye)
}

/// View matrix from an orthonormal camera basis: rows 0 to 2 hold the axes and the
/// translation moves `eye` to the origin.
pub fn view(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3, eye: Vec3) -> Mat4 {
    Mat4::from_rows([
        [x_axis.x, x_axis.y, x_axis.z, -x_axis.dot(eye)],
        [y_axis.x, y_axis.y, y_axis.z, -y_axis.dot(eye)],
        [z_axis.x, z_axis.y, z_axis.z, -z_axis.dot(eye)],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Inverse-transpose of the model-view matrix, for transforming normals.
pub fn normal_matrix(model_view: Mat4) -> Mat4 {
    model_view.inverse().transposed()
}
