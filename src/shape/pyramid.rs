use crate::math::Vector3;

use super::{Edge, Face, ShapeMesh};

/// Pyramid edge table. Vertices 4 and 5 are both the apex.
pub const PYRAMID_EDGES: [Edge; 9] = [
    [0, 1],
    [1, 4],
    [4, 5],
    [5, 0],
    [0, 3],
    [3, 4],
    [3, 2],
    [2, 5],
    [2, 1],
];

/// Pyramid faces: four sides closed through the doubled apex, then the base.
pub const PYRAMID_FACES: [Face; 5] = [
    [0, 1, 4, 5],
    [0, 3, 4, 5],
    [3, 2, 4, 5],
    [2, 1, 4, 5],
    [0, 1, 2, 3],
];

pub(super) fn pyramid(x: f64, y: f64, z: f64) -> ShapeMesh {
    let (hx, hy, hz) = (x / 2.0, y / 2.0, z / 2.0);
    let apex = Vector3::new(0.0, hy, 0.0);
    ShapeMesh {
        vertices: vec![
            Vector3::new(-hx, -hy, hz),
            Vector3::new(-hx, -hy, -hz),
            Vector3::new(hx, -hy, -hz),
            Vector3::new(hx, -hy, hz),
            apex,
            apex,
        ],
        edges: &PYRAMID_EDGES,
        faces: &PYRAMID_FACES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apex_is_duplicated() {
        let mesh = pyramid(0.5, 0.3, 0.5);
        assert_eq!(mesh.vertices[4], mesh.vertices[5]);
        assert_eq!(mesh.vertices[4], Vector3::new(0.0, 0.15, 0.0));
    }

    #[test]
    fn base_lies_on_bottom_plane() {
        let mesh = pyramid(1.0, 2.0, 3.0);
        for &i in &PYRAMID_FACES[4] {
            assert_eq!(mesh.vertices[i].y, -1.0);
        }
    }

    #[test]
    fn every_side_touches_the_apex() {
        for face in &PYRAMID_FACES[..4] {
            assert!(face.contains(&4) && face.contains(&5));
        }
    }
}
