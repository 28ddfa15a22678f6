//! Twelve-vertex hexagonal prisms.
//!
//! All variants share one vertex numbering. Each vertex sits on the near
//! or the far ring and at one of six cross-section corners `(u, v)`; the
//! variants only differ in how `(axial, u, v)` maps onto `(x, y, z)`.
//!
//! ```text
//!          v
//!     0/1  |  3/2
//!        \ | /
//!  8/9 ----+---- 11/10  u
//!        / | \
//!     4/5  |  7/6
//! ```
//! (near index / far index at each corner)

use std::f64::consts::FRAC_PI_3;

use crate::math::Vector3;

use super::{Edge, Face, PrimaryAxis, ShapeMesh};

/// Edge table shared by every hexagonal prism.
pub const HEXAGON_EDGES: [Edge; 18] = [
    [0, 1],
    [0, 3],
    [0, 8],
    [1, 2],
    [1, 9],
    [2, 3],
    [2, 10],
    [3, 11],
    [10, 11],
    [10, 6],
    [11, 7],
    [6, 7],
    [6, 5],
    [7, 4],
    [4, 5],
    [4, 8],
    [8, 9],
    [5, 9],
];

/// Face table shared by every hexagonal prism: six side quads, then each
/// hexagonal cap split into two quads.
///
/// The fifth side quad repeats vertex 9 and leaves 8 out, so that side is
/// drawn degenerate. Wireframe edges still close it.
pub const HEXAGON_FACES: [Face; 10] = [
    [0, 1, 2, 3],
    [3, 2, 10, 11],
    [10, 11, 7, 6],
    [6, 7, 4, 5],
    [4, 5, 9, 9],
    [0, 1, 9, 8],
    [1, 2, 10, 6],
    [1, 6, 5, 9],
    [0, 3, 11, 7],
    [0, 7, 4, 8],
];

#[derive(Clone, Copy)]
enum Ring {
    Near,
    Far,
}

#[derive(Clone, Copy)]
enum Corner {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    Left,
    Right,
}

const LAYOUT: [(Ring, Corner); 12] = [
    (Ring::Near, Corner::UpperLeft),
    (Ring::Far, Corner::UpperLeft),
    (Ring::Far, Corner::UpperRight),
    (Ring::Near, Corner::UpperRight),
    (Ring::Near, Corner::LowerLeft),
    (Ring::Far, Corner::LowerLeft),
    (Ring::Far, Corner::LowerRight),
    (Ring::Near, Corner::LowerRight),
    (Ring::Near, Corner::Left),
    (Ring::Far, Corner::Left),
    (Ring::Far, Corner::Right),
    (Ring::Near, Corner::Right),
];

/// Hexagonal cross-section of corner-to-corner width `width`.
struct CrossSection {
    half_ring_width: f64,
    half_ring_depth: f64,
    half_width: f64,
}

impl CrossSection {
    fn new(width: f64) -> Self {
        Self {
            half_ring_width: width * FRAC_PI_3.cos() / 2.0,
            half_ring_depth: width * FRAC_PI_3.sin() / 2.0,
            half_width: width / 2.0,
        }
    }

    fn corner(&self, corner: Corner) -> (f64, f64) {
        let (a, b, c) = (self.half_ring_width, self.half_ring_depth, self.half_width);
        match corner {
            Corner::UpperLeft => (-a, b),
            Corner::UpperRight => (a, b),
            Corner::LowerLeft => (-a, -b),
            Corner::LowerRight => (a, -b),
            Corner::Left => (-c, 0.0),
            Corner::Right => (c, 0.0),
        }
    }
}

/// Builds the prism, placing each `(axial, u, v)` triple with `place`.
fn prism(
    width: f64,
    near: f64,
    far: f64,
    place: impl Fn(f64, f64, f64) -> Vector3,
) -> ShapeMesh {
    let section = CrossSection::new(width);
    let vertices = LAYOUT
        .iter()
        .map(|&(ring, corner)| {
            let t = match ring {
                Ring::Near => near,
                Ring::Far => far,
            };
            let (u, v) = section.corner(corner);
            place(t, u, v)
        })
        .collect();
    ShapeMesh {
        vertices,
        edges: &HEXAGON_EDGES,
        faces: &HEXAGON_FACES,
    }
}

pub(super) fn hexagon(axis: PrimaryAxis, width: f64, length: f64) -> ShapeMesh {
    let half = length / 2.0;
    match axis {
        PrimaryAxis::X => prism(width, half, -half, |t, u, v| Vector3::new(t, u, v)),
        PrimaryAxis::Y => prism(width, -half, half, |t, u, v| Vector3::new(u, t, v)),
        PrimaryAxis::Z => prism(width, -half, half, |t, u, v| Vector3::new(u, -v, t)),
    }
}

pub(super) fn hexagon_axis(width: f64, length: f64) -> ShapeMesh {
    let half = length / 2.0;
    prism(width, -half, half, |t, u, v| Vector3::new(t, v, u))
}

pub(super) fn hexagon_stalk(width: f64, length: f64) -> ShapeMesh {
    prism(width, 0.0, length, |t, u, v| Vector3::new(t, v, u))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn far_ring_centre(mesh: &ShapeMesh) -> Vector3 {
        [1, 2, 5, 6, 9, 10]
            .iter()
            .map(|&i| mesh.vertices[i])
            .sum::<Vector3>()
            / 6.0
    }

    #[test]
    fn cross_section_is_a_regular_hexagon() {
        let mesh = hexagon(PrimaryAxis::Y, 2.0, 1.0);
        // Circumradius is half the width and every corner sits on it.
        for v in &mesh.vertices {
            assert_relative_eq!((v.x * v.x + v.z * v.z).sqrt(), 1.0, epsilon = 1e-12);
        }
        // Neighbouring corners on one ring are one circumradius apart.
        let ring = [0, 3, 11, 7, 4, 8];
        for k in 0..6 {
            let a = mesh.vertices[ring[k]];
            let b = mesh.vertices[ring[(k + 1) % 6]];
            assert_relative_eq!((a - b).norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn y_prism_rings_sit_at_half_length() {
        let mesh = hexagon(PrimaryAxis::Y, 0.5, 0.2);
        for i in [0, 3, 4, 7, 8, 11] {
            assert_relative_eq!(mesh.vertices[i].y, -0.1);
        }
        for i in [1, 2, 5, 6, 9, 10] {
            assert_relative_eq!(mesh.vertices[i].y, 0.1);
        }
        assert_relative_eq!(mesh.vertices[8].x, -0.25);
    }

    #[test]
    fn x_prism_puts_near_ring_on_positive_side() {
        let mesh = hexagon(PrimaryAxis::X, 0.5, 0.2);
        assert_relative_eq!(mesh.vertices[0].x, 0.1);
        assert_relative_eq!(mesh.vertices[1].x, -0.1);
        assert_relative_eq!(mesh.vertices[8].y, -0.25);
    }

    #[test]
    fn z_prism_flips_depth_into_negative_y() {
        let mesh = hexagon(PrimaryAxis::Z, 0.5, 0.2);
        let depth = 0.5 * FRAC_PI_3.sin() / 2.0;
        assert_relative_eq!(mesh.vertices[0].y, -depth);
        assert_relative_eq!(mesh.vertices[0].z, -0.1);
        assert_relative_eq!(mesh.vertices[4].y, depth);
    }

    #[test]
    fn stalk_runs_from_origin_to_length() {
        let mesh = hexagon_stalk(1.0, 1.5);
        for i in [0, 3, 4, 7, 8, 11] {
            assert_eq!(mesh.vertices[i].x, 0.0);
        }
        for i in [1, 2, 5, 6, 9, 10] {
            assert_eq!(mesh.vertices[i].x, 1.5);
        }
        assert_relative_eq!(far_ring_centre(&mesh), Vector3::new(1.5, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn axis_variant_is_a_centred_stalk() {
        let axis = hexagon_axis(1.0, 1.5);
        let stalk = hexagon_stalk(1.0, 1.5);
        for (a, s) in axis.vertices.iter().zip(&stalk.vertices) {
            assert_relative_eq!(*a + Vector3::new(0.75, 0.0, 0.0), *s, epsilon = 1e-12);
        }
    }

    #[test]
    fn every_edge_is_a_ring_edge_or_joins_the_rings() {
        let mesh = hexagon_stalk(1.0, 2.0);
        let (mut along, mut across) = (0, 0);
        for [a, b] in HEXAGON_EDGES {
            let d = mesh.vertices[a] - mesh.vertices[b];
            if d.x.abs() > 1e-12 {
                assert_relative_eq!(d.x.abs(), 2.0);
                along += 1;
            } else {
                assert_relative_eq!(d.norm(), 0.5, epsilon = 1e-12);
                across += 1;
            }
        }
        assert_eq!((along, across), (6, 12));
    }
}
