//! A generated shape bound to a pose.

use crate::error::Result;
use crate::math::Vector3;
use crate::pose::{Pose, PoseUpdate, RotationMode};
use crate::render::{Color, DrawCall, RenderAdapter};
use crate::shape::{generate, Edge, Face, ShapeKind, ShapeMesh};

/// A polyhedron with its own pose and colour.
///
/// The generated vertices are kept as an immutable template. The working
/// vertices are always `template[i] + offset`, rebuilt from the template on
/// every offset write so repeated writes never accumulate.
#[derive(Debug, Clone)]
pub struct Solid {
    kind: Option<ShapeKind>,
    template: Vec<Vector3>,
    vertices: Vec<Vector3>,
    edges: &'static [Edge],
    faces: &'static [Face],
    color: Color,
    pose: Pose,
}

impl Solid {
    /// Generates a shape and wraps it in a solid with a default pose.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` has the wrong arity for `kind`.
    pub fn new(kind: ShapeKind, size: &[f64]) -> Result<Self> {
        let mut solid = Self::from_mesh(generate(kind, size)?);
        solid.kind = Some(kind);
        Ok(solid)
    }

    /// Wraps already generated geometry.
    #[must_use]
    pub fn from_mesh(mesh: ShapeMesh) -> Self {
        Self {
            kind: None,
            vertices: mesh.vertices.clone(),
            template: mesh.vertices,
            edges: mesh.edges,
            faces: mesh.faces,
            color: Color::default(),
            pose: Pose::default(),
        }
    }

    /// Returns the solid with `pose`, rebuilding its working vertices.
    #[must_use]
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self.rebuild_vertices();
        self
    }

    /// Returns the solid with `color`.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The shape kind this solid was generated from, if known.
    #[must_use]
    pub fn kind(&self) -> Option<ShapeKind> {
        self.kind
    }

    /// The immutable vertex template.
    #[must_use]
    pub fn template(&self) -> &[Vector3] {
        &self.template
    }

    /// The working vertices (template plus offset).
    #[must_use]
    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    #[must_use]
    pub fn edges(&self) -> &'static [Edge] {
        self.edges
    }

    #[must_use]
    pub fn faces(&self) -> &'static [Face] {
        self.faces
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn set_origin(&mut self, origin: Vector3) {
        self.pose.set_origin(origin);
    }

    /// Sets the offset and rebuilds every working vertex from the template.
    pub fn set_offset(&mut self, offset: Vector3) {
        self.pose.set_offset(offset);
        self.rebuild_vertices();
    }

    pub fn set_axis(&mut self, axis: Vector3) {
        self.pose.set_axis(axis);
    }

    pub fn set_theta(&mut self, radians: f64) {
        self.pose.set_theta(radians);
    }

    pub fn set_theta_degree(&mut self, degrees: f64) {
        self.pose.set_theta_degree(degrees);
    }

    pub fn set_phi(&mut self, radians: f64) {
        self.pose.set_phi(radians);
    }

    pub fn set_phi_degree(&mut self, degrees: f64) {
        self.pose.set_phi_degree(degrees);
    }

    /// Applies a batch of pose writes, rebuilding vertices at most once.
    pub fn apply(&mut self, update: &PoseUpdate) {
        if self.pose.apply(update) {
            self.rebuild_vertices();
        }
    }

    /// Working vertices mapped to world space under `mode`.
    #[must_use]
    pub fn world_vertices(&self, mode: RotationMode) -> Vec<Vector3> {
        let rotation = self.pose.rotation(mode);
        let origin = self.pose.origin();
        self.vertices.iter().map(|v| rotation * v + origin).collect()
    }

    /// Hands this solid's geometry to `adapter`.
    pub fn draw(&self, adapter: &mut dyn RenderAdapter, mode: RotationMode) {
        adapter.draw(&DrawCall {
            vertices: &self.vertices,
            edges: self.edges,
            faces: self.faces,
            color: self.color,
            pose: &self.pose,
            mode,
        });
    }

    fn rebuild_vertices(&mut self) {
        let offset = *self.pose.offset();
        for (working, template) in self.vertices.iter_mut().zip(&self.template) {
            *working = template + offset;
        }
    }
}
