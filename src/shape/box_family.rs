//! Eight-vertex shapes sharing the box topology.
//!
//! ```text
//!        5____________6
//!        /           /|
//!  y  1 /__________2/ |
//!      |           |  |
//!      |   4       |  7 __ -z
//!      |           | /
//!     0|__________3|/
//!                 /
//!                x
//! ```

use crate::math::Vector3;

use super::{Edge, Face, ShapeMesh};

/// Edge table shared by every box-family shape.
pub const BOX_EDGES: [Edge; 12] = [
    [0, 1],
    [0, 3],
    [0, 4],
    [2, 1],
    [2, 3],
    [2, 6],
    [5, 1],
    [5, 4],
    [5, 6],
    [7, 3],
    [7, 4],
    [7, 6],
];

/// Face table shared by every box-family shape: front, right, back, left,
/// top, bottom.
pub const BOX_FACES: [Face; 6] = [
    [0, 1, 2, 3],
    [3, 2, 6, 7],
    [7, 6, 5, 4],
    [4, 5, 1, 0],
    [1, 5, 6, 2],
    [4, 0, 3, 7],
];

/// Half-extents of one box-family shape.
///
/// The bottom face (vertices 0, 3, 4, 7) and the top face (1, 2, 5, 6) each
/// carry their own x span and z depth, which is all the frustum variants
/// need.
struct BoxExtents {
    bottom_left: f64,
    bottom_right: f64,
    bottom_depth: f64,
    top_left: f64,
    top_right: f64,
    top_depth: f64,
    height: f64,
}

impl BoxExtents {
    fn into_mesh(self) -> ShapeMesh {
        let h = self.height;
        let vertices = vec![
            Vector3::new(-self.bottom_left, -h, self.bottom_depth),
            Vector3::new(-self.top_left, h, self.top_depth),
            Vector3::new(self.top_right, h, self.top_depth),
            Vector3::new(self.bottom_right, -h, self.bottom_depth),
            Vector3::new(-self.bottom_left, -h, -self.bottom_depth),
            Vector3::new(-self.top_left, h, -self.top_depth),
            Vector3::new(self.top_right, h, -self.top_depth),
            Vector3::new(self.bottom_right, -h, -self.bottom_depth),
        ];
        ShapeMesh {
            vertices,
            edges: &BOX_EDGES,
            faces: &BOX_FACES,
        }
    }
}

pub(super) fn cube(size: f64) -> ShapeMesh {
    let half = size / 2.0;
    BoxExtents {
        bottom_left: half,
        bottom_right: half,
        bottom_depth: half,
        top_left: half,
        top_right: half,
        top_depth: half,
        height: half,
    }
    .into_mesh()
}

pub(super) fn parallelepiped(x: f64, y: f64, z: f64, alpha: f64) -> ShapeMesh {
    let mut mesh = BoxExtents {
        bottom_left: x / 2.0,
        bottom_right: x / 2.0,
        bottom_depth: z / 2.0,
        top_left: x / 2.0,
        top_right: x / 2.0,
        top_depth: z / 2.0,
        height: y / 2.0,
    }
    .into_mesh();

    let slope = y / alpha.tan();
    for i in [1, 2, 5, 6] {
        mesh.vertices[i].x += slope;
    }
    mesh
}

pub(super) fn trapezoid(
    bottom_left: f64,
    bottom_right: f64,
    top_left: f64,
    top_right: f64,
    height: f64,
    depth: f64,
) -> ShapeMesh {
    BoxExtents {
        bottom_left: bottom_left / 2.0,
        bottom_right: bottom_right / 2.0,
        bottom_depth: depth / 2.0,
        top_left: top_left / 2.0,
        top_right: top_right / 2.0,
        top_depth: depth / 2.0,
        height: height / 2.0,
    }
    .into_mesh()
}

pub(super) fn pyramid_trunk(
    bottom_width: f64,
    height: f64,
    bottom_depth: f64,
    top_width: f64,
    top_depth: f64,
) -> ShapeMesh {
    BoxExtents {
        bottom_left: bottom_width / 2.0,
        bottom_right: bottom_width / 2.0,
        bottom_depth: bottom_depth / 2.0,
        top_left: top_width / 2.0,
        top_right: top_width / 2.0,
        top_depth: top_depth / 2.0,
        height: height / 2.0,
    }
    .into_mesh()
}
