//! Procedural polyhedron generation.
//!
//! Every shape kind maps a fixed-arity size tuple to a vertex list in
//! canonical local space plus constant edge and face tables shared across
//! its family.

mod box_family;
mod hexagon;
mod pyramid;

pub use box_family::{BOX_EDGES, BOX_FACES};
pub use hexagon::{HEXAGON_EDGES, HEXAGON_FACES};
pub use pyramid::{PYRAMID_EDGES, PYRAMID_FACES};

use crate::error::{ParameterError, Result};
use crate::math::Vector3;

/// A pair of vertex indices forming a wireframe line.
pub type Edge = [usize; 2];

/// Four vertex indices forming a quad. Triangles repeat an index.
pub type Face = [usize; 4];

/// Primary axis of a hexagonal prism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryAxis {
    X,
    #[default]
    Y,
    Z,
}

/// The polyhedron kinds the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Size: `(edge)`.
    Cube,
    /// Size: `(x, y, z, alpha)`. The top face is sheared along x by
    /// `y / tan(alpha)`.
    Parallelepiped,
    /// Size: `(bottom_left, bottom_right, top_left, top_right, height, depth)`.
    Trapezoid,
    /// Size: `(bottom_width, height, bottom_depth, top_width, top_depth)`.
    PyramidTrunk,
    /// Size: `(x, y, z)`.
    Pyramid,
    /// Size: `(width, length)`, prism along `axis`.
    Hexagon { axis: PrimaryAxis },
    /// Size: `(width, length)`, prism along x centred on the origin.
    HexagonAxis,
    /// Size: `(width, length)`, prism along x from `0` to `length`.
    HexagonStalk,
}

impl ShapeKind {
    /// Number of size parameters this kind expects.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Cube => 1,
            Self::Hexagon { .. } | Self::HexagonAxis | Self::HexagonStalk => 2,
            Self::Pyramid => 3,
            Self::Parallelepiped => 4,
            Self::PyramidTrunk => 5,
            Self::Trapezoid => 6,
        }
    }

    /// Human-readable name used in errors and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Parallelepiped => "parallelepiped",
            Self::Trapezoid => "trapezoid",
            Self::PyramidTrunk => "pyramid trunk",
            Self::Pyramid => "pyramid",
            Self::Hexagon { .. } => "hexagon",
            Self::HexagonAxis => "hexagon axis",
            Self::HexagonStalk => "hexagon stalk",
        }
    }
}

/// Generated geometry for one shape, in canonical local space.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMesh {
    /// Vertex positions.
    pub vertices: Vec<Vector3>,
    /// Wireframe edges (index pairs into `vertices`).
    pub edges: &'static [Edge],
    /// Filled quads (index quadruples into `vertices`).
    pub faces: &'static [Face],
}

/// Generates the geometry of a shape from its size parameters.
pub struct GenerateShape<'a> {
    kind: ShapeKind,
    size: &'a [f64],
}

impl<'a> GenerateShape<'a> {
    /// Creates a new `GenerateShape` operation.
    #[must_use]
    pub fn new(kind: ShapeKind, size: &'a [f64]) -> Self {
        Self { kind, size }
    }

    /// Executes the operation.
    ///
    /// Size values are not range-checked: zero, negative or non-finite
    /// values produce degenerate or NaN geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Arity`] if the size tuple length does not
    /// match [`ShapeKind::arity`].
    pub fn execute(&self) -> Result<ShapeMesh> {
        let expected = self.kind.arity();
        if self.size.len() != expected {
            tracing::warn!(
                kind = self.kind.name(),
                expected,
                actual = self.size.len(),
                "rejected size tuple"
            );
            return Err(ParameterError::Arity {
                kind: self.kind.name(),
                expected,
                actual: self.size.len(),
            }
            .into());
        }

        let s = self.size;
        let mesh = match self.kind {
            ShapeKind::Cube => box_family::cube(s[0]),
            ShapeKind::Parallelepiped => box_family::parallelepiped(s[0], s[1], s[2], s[3]),
            ShapeKind::Trapezoid => box_family::trapezoid(s[0], s[1], s[2], s[3], s[4], s[5]),
            ShapeKind::PyramidTrunk => box_family::pyramid_trunk(s[0], s[1], s[2], s[3], s[4]),
            ShapeKind::Pyramid => pyramid::pyramid(s[0], s[1], s[2]),
            ShapeKind::Hexagon { axis } => hexagon::hexagon(axis, s[0], s[1]),
            ShapeKind::HexagonAxis => hexagon::hexagon_axis(s[0], s[1]),
            ShapeKind::HexagonStalk => hexagon::hexagon_stalk(s[0], s[1]),
        };

        tracing::debug!(
            kind = self.kind.name(),
            vertices = mesh.vertices.len(),
            edges = mesh.edges.len(),
            faces = mesh.faces.len(),
            "generated shape"
        );
        Ok(mesh)
    }
}

/// Shorthand for `GenerateShape::new(kind, size).execute()`.
///
/// # Errors
///
/// Returns an error if the size tuple has the wrong arity for `kind`.
pub fn generate(kind: ShapeKind, size: &[f64]) -> Result<ShapeMesh> {
    GenerateShape::new(kind, size).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SolidkinError;

    const ALL_KINDS: [(ShapeKind, &[f64]); 10] = [
        (ShapeKind::Cube, &[0.6]),
        (ShapeKind::Parallelepiped, &[0.5, 0.7, 0.2, 1.2]),
        (ShapeKind::Trapezoid, &[0.5, 0.5, 0.2, 0.3, 0.2, 0.3]),
        (ShapeKind::PyramidTrunk, &[0.5, 0.3, 0.5, 0.3, 0.2]),
        (ShapeKind::Pyramid, &[0.5, 0.3, 0.5]),
        (ShapeKind::Hexagon { axis: PrimaryAxis::X }, &[0.5, 0.2]),
        (ShapeKind::Hexagon { axis: PrimaryAxis::Y }, &[0.5, 0.2]),
        (ShapeKind::Hexagon { axis: PrimaryAxis::Z }, &[0.5, 0.2]),
        (ShapeKind::HexagonAxis, &[1.0, 1.5]),
        (ShapeKind::HexagonStalk, &[1.0, 1.5]),
    ];

    #[test]
    fn trapezoid_with_four_parameters_fails() {
        let err = generate(ShapeKind::Trapezoid, &[0.5, 0.5, 0.2, 0.3]).unwrap_err();
        match err {
            SolidkinError::Parameter(ParameterError::Arity {
                kind,
                expected,
                actual,
            }) => {
                assert_eq!(kind, "trapezoid");
                assert_eq!(expected, 6);
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn every_kind_rejects_an_extra_parameter() {
        for (kind, size) in ALL_KINDS {
            let mut longer = size.to_vec();
            longer.push(1.0);
            assert!(generate(kind, &longer).is_err(), "{} accepted", kind.name());
            assert!(generate(kind, &[]).is_err(), "{} accepted empty", kind.name());
        }
    }

    #[test]
    fn every_index_is_in_bounds() {
        for (kind, size) in ALL_KINDS {
            let mesh = generate(kind, size).unwrap();
            let n = mesh.vertices.len();
            assert!(mesh.edges.iter().flatten().all(|&i| i < n), "{}", kind.name());
            assert!(mesh.faces.iter().flatten().all(|&i| i < n), "{}", kind.name());
        }
    }

    #[test]
    fn family_sizes() {
        for (kind, size) in ALL_KINDS {
            let mesh = generate(kind, size).unwrap();
            let expected = match kind {
                ShapeKind::Cube
                | ShapeKind::Parallelepiped
                | ShapeKind::Trapezoid
                | ShapeKind::PyramidTrunk => (8, 12, 6),
                ShapeKind::Pyramid => (6, 9, 5),
                _ => (12, 18, 10),
            };
            assert_eq!(
                (mesh.vertices.len(), mesh.edges.len(), mesh.faces.len()),
                expected,
                "{}",
                kind.name()
            );
        }
    }

    #[test]
    fn generation_is_deterministic() {
        for (kind, size) in ALL_KINDS {
            assert_eq!(generate(kind, size).unwrap(), generate(kind, size).unwrap());
        }
    }
}
