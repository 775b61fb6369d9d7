use crate::core::prelude::*;

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];

/// Two triangles `a, b, c` and `c, d, a` covering the quad `a, b, c, d`, keeping its
/// winding.
pub fn quad(corners: [Vec3; 4], colour: [f32; 3]) -> Vec<ColouredVertex> {
    let [a, b, c, d] = corners;
    [a, b, c, c, d, a]
        .into_iter()
        .map(|p| ColouredVertex::new(p.to_array(), colour))
        .collect()
}

/// The unit cube centred on the origin as a triangle list: 36 vertices, one flat colour
/// per face, every face wound counterclockwise when seen from outside.
pub fn cube() -> Vec<ColouredVertex> {
    let v = |x: f32, y: f32, z: f32| Vec3::new(x, y, z) * 0.5;
    let faces = [
        // front (+z)
        ([v(-1., -1., 1.), v(1., -1., 1.), v(1., 1., 1.), v(-1., 1., 1.)], RED),
        // right (+x)
        ([v(1., -1., 1.), v(1., -1., -1.), v(1., 1., -1.), v(1., 1., 1.)], GREEN),
        // back (-z)
        ([v(-1., -1., -1.), v(-1., 1., -1.), v(1., 1., -1.), v(1., -1., -1.)], BLUE),
        // left (-x)
        ([v(-1., -1., 1.), v(-1., 1., 1.), v(-1., 1., -1.), v(-1., -1., -1.)], YELLOW),
        // top (+y)
        ([v(-1., 1., 1.), v(1., 1., 1.), v(1., 1., -1.), v(-1., 1., -1.)], MAGENTA),
        // bottom (-y)
        ([v(-1., -1., 1.), v(-1., -1., -1.), v(1., -1., -1.), v(1., -1., 1.)], CYAN),
    ];
    faces
        .into_iter()
        .flat_map(|(corners, colour)| quad(corners, colour))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(v: &ColouredVertex) -> Vec3 {
        Vec4::from(v.position).xyz()
    }

    #[test]
    fn cube_has_six_faces_of_two_triangles() {
        let vertices = cube();
        assert_eq!(vertices.len(), 36);
        for face in vertices.chunks(6) {
            assert!(face.iter().all(|v| v.colour == face[0].colour));
        }
        let colours = vertices.iter().map(|v| v.colour).dedup().collect_vec();
        assert_eq!(colours.len(), 6);
    }

    #[test]
    fn cube_is_unit_and_centred() {
        let vertices = cube();
        assert!(vertices
            .iter()
            .all(|v| v.position.iter().take(3).all(|c| c.abs() == 0.5)));
        assert!(vertices.iter().all(|v| v.position[3] == 1.0 && v.colour[3] == 1.0));
        let centroid = vertices.iter().map(position).sum::<Vec3>() / 36.0;
        assert_eq!(centroid, Vec3::zero());
    }

    #[test]
    fn triangles_face_outwards() {
        for triangle in cube().chunks(3) {
            let [a, b, c] = [&triangle[0], &triangle[1], &triangle[2]].map(position);
            let normal = (b - a).cross(c - a);
            let centre = (a + b + c) / 3.0;
            assert!(normal.dot(centre) > 0.0, "inward triangle at {centre}");
        }
    }

    #[test]
    fn quad_keeps_winding() {
        let corners = [Vec3::zero(), Vec3::right(), Vec3::new(1.0, 1.0, 0.0), Vec3::up()];
        let vertices = quad(corners, RED);
        let positions = vertices.iter().map(position).collect_vec();
        assert_eq!(
            positions,
            vec![corners[0], corners[1], corners[2], corners[2], corners[3], corners[0]]
        );
    }
}
