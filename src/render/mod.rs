//! The seam between scene geometry and whatever rasterises it.
//!
//! This crate never issues draw calls itself. Solids and groups hand a
//! [`DrawCall`] to a [`RenderAdapter`]; the adapter is expected to emit one
//! line per edge and one quad per face after placing the vertices with
//! [`DrawCall::model_matrix`].

mod color;
mod recording;

pub use color::Color;
pub use recording::{DrawRecord, RecordingAdapter};

use crate::math::{Matrix4, Vector3};
use crate::pose::{Pose, RotationMode};
use crate::shape::{Edge, Face};

/// Everything an adapter needs to draw one solid.
#[derive(Debug, Clone, Copy)]
pub struct DrawCall<'a> {
    /// Working vertices in local space (template plus offset).
    pub vertices: &'a [Vector3],
    /// Wireframe edges.
    pub edges: &'a [Edge],
    /// Filled quads.
    pub faces: &'a [Face],
    /// Fill colour.
    pub color: Color,
    /// Pose to place the vertices with.
    pub pose: &'a Pose,
    /// Rotation interpretation for `pose`.
    pub mode: RotationMode,
}

impl DrawCall<'_> {
    /// Local-to-world matrix for this call.
    #[must_use]
    pub fn model_matrix(&self) -> Matrix4 {
        self.pose.model_matrix(self.mode)
    }

    /// The vertices mapped to world space.
    #[must_use]
    pub fn world_vertices(&self) -> Vec<Vector3> {
        let rotation = self.pose.rotation(self.mode);
        let origin = self.pose.origin();
        self.vertices.iter().map(|v| rotation * v + origin).collect()
    }
}

/// Consumer of draw calls, implemented by the embedding application.
pub trait RenderAdapter {
    /// Draws one solid.
    fn draw(&mut self, call: &DrawCall<'_>);
}

