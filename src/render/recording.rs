use crate::math::Vector3;
use crate::pose::{Pose, RotationMode};
use crate::shape::{Edge, Face};

use super::{Color, DrawCall, RenderAdapter};

/// An owned copy of one [`DrawCall`].
#[derive(Debug, Clone)]
pub struct DrawRecord {
    pub vertices: Vec<Vector3>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,
    pub color: Color,
    pub pose: Pose,
    pub mode: RotationMode,
}

impl DrawRecord {
    /// The recorded vertices mapped to world space.
    #[must_use]
    pub fn world_vertices(&self) -> Vec<Vector3> {
        let rotation = self.pose.rotation(self.mode);
        self.vertices
            .iter()
            .map(|v| rotation * v + self.pose.origin())
            .collect()
    }
}

/// Headless adapter that keeps every call it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    records: Vec<DrawRecord>,
}

impl RecordingAdapter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far.
    #[must_use]
    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    /// Removes and returns all recorded calls.
    pub fn take(&mut self) -> Vec<DrawRecord> {
        std::mem::take(&mut self.records)
    }

    /// Total number of line primitives across all calls.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.records.iter().map(|r| r.edges.len()).sum()
    }

    /// Total number of quad primitives across all calls.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.records.iter().map(|r| r.faces.len()).sum()
    }
}

impl RenderAdapter for RecordingAdapter {
    fn draw(&mut self, call: &DrawCall<'_>) {
        self.records.push(DrawRecord {
            vertices: call.vertices.to_vec(),
            edges: call.edges.to_vec(),
            faces: call.faces.to_vec(),
            color: call.color,
            pose: call.pose.clone(),
            mode: call.mode,
        });
    }
}
