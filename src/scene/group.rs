use crate::math::Vector3;
use crate::pose::{Pose, PoseUpdate, RotationMode};
use crate::render::RenderAdapter;

use super::SceneNode;

/// An ordered, fixed set of child nodes sharing broadcast pose writes.
#[derive(Debug, Clone)]
pub struct SolidsGroup {
    children: Vec<SceneNode>,
    pose: Pose,
}

impl SolidsGroup {
    /// Creates a group over `children`.
    ///
    /// The children keep whatever pose they were built with until the first
    /// write on the group.
    #[must_use]
    pub fn new(children: Vec<SceneNode>) -> Self {
        tracing::debug!(children = children.len(), "created solids group");
        Self {
            children,
            pose: Pose::default(),
        }
    }

    /// Returns the group with its own pose record set.
    ///
    /// This does not touch the children.
    #[must_use]
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    /// The last values written through the group.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Mutable access to the children for per-child adjustments.
    ///
    /// The child list itself cannot grow or shrink.
    pub fn children_mut(&mut self) -> &mut [SceneNode] {
        &mut self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn set_origin(&mut self, origin: Vector3) {
        self.pose.set_origin(origin);
        self.broadcast(|child| child.set_origin(origin));
    }

    pub fn set_offset(&mut self, offset: Vector3) {
        self.pose.set_offset(offset);
        self.broadcast(|child| child.set_offset(offset));
    }

    pub fn set_axis(&mut self, axis: Vector3) {
        self.pose.set_axis(axis);
        self.broadcast(|child| child.set_axis(axis));
    }

    pub fn set_theta(&mut self, radians: f64) {
        self.pose.set_theta(radians);
        self.broadcast(|child| child.set_theta(radians));
    }

    pub fn set_theta_degree(&mut self, degrees: f64) {
        self.pose.set_theta_degree(degrees);
        self.broadcast(|child| child.set_theta_degree(degrees));
    }

    pub fn set_phi(&mut self, radians: f64) {
        self.pose.set_phi(radians);
        self.broadcast(|child| child.set_phi(radians));
    }

    pub fn set_phi_degree(&mut self, degrees: f64) {
        self.pose.set_phi_degree(degrees);
        self.broadcast(|child| child.set_phi_degree(degrees));
    }

    /// Applies `update` to the group record and to every child.
    pub fn apply(&mut self, update: &PoseUpdate) {
        self.pose.apply(update);
        self.broadcast(|child| child.apply(update));
    }

    /// Draws every child in list order. No depth sorting is done.
    pub fn draw(&self, adapter: &mut dyn RenderAdapter, mode: RotationMode) {
        for child in &self.children {
            child.draw(adapter, mode);
        }
    }

    fn broadcast(&mut self, mut write: impl FnMut(&mut SceneNode)) {
        for child in &mut self.children {
            write(child);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;
    use crate::pose::Angle;
    use crate::render::{Color, RecordingAdapter};
    use crate::shape::ShapeKind;
    use crate::solid::Solid;

    fn cube_at(x: f64, color: Color) -> SceneNode {
        Solid::new(ShapeKind::Cube, &[0.2])
            .unwrap()
            .with_pose(Pose::new().with_origin(Vector3::new(x, 0.0, 0.0)))
            .with_color(color)
            .into()
    }

    fn three_cubes() -> SolidsGroup {
        SolidsGroup::new(vec![
            cube_at(1.0, Color::new(1.0, 0.0, 0.0)),
            cube_at(2.0, Color::new(0.0, 1.0, 0.0)),
            cube_at(3.0, Color::new(0.0, 0.0, 1.0)),
        ])
    }

    #[test]
    fn origin_is_broadcast_verbatim() {
        let mut group = three_cubes();
        group.set_origin(Vector3::new(5.0, 5.0, 5.0));
        for child in group.children() {
            assert_eq!(child.pose().origin(), &Vector3::new(5.0, 5.0, 5.0));
        }
    }

    #[test]
    fn offset_replaces_child_offsets() {
        let mut group = three_cubes();
        if let SceneNode::Solid(first) = &mut group.children_mut()[0] {
            first.set_offset(Vector3::new(0.0, 1.0, 0.0));
        }
        group.set_offset(Vector3::new(0.5, 0.0, 0.0));
        for child in group.children() {
            let SceneNode::Solid(solid) = child else {
                panic!("expected a solid");
            };
            for (v, t) in solid.vertices().iter().zip(solid.template()) {
                assert_eq!(*v, t + Vector3::new(0.5, 0.0, 0.0));
            }
        }
    }

    #[test]
    fn theta_is_broadcast_with_wrap() {
        let mut group = three_cubes();
        group.set_theta(-0.25);
        assert!((group.pose().theta() - (TAU - 0.25)).abs() < 1e-12);
        for child in group.children() {
            assert_eq!(child.pose().theta(), group.pose().theta());
            assert_eq!(child.pose().theta_degree(), group.pose().theta_degree());
        }
    }

    #[test]
    fn nested_groups_receive_writes() {
        let inner = three_cubes();
        let mut outer = SolidsGroup::new(vec![inner.into(), cube_at(9.0, Color::WHITE)]);
        outer.set_axis(Vector3::new(1.0, -1.0, 0.0));
        outer.set_theta_degree(45.0);

        let SceneNode::Group(inner) = &outer.children()[0] else {
            panic!("expected a group");
        };
        for child in inner.children() {
            assert_eq!(child.pose().axis(), &Vector3::new(1.0, -1.0, 0.0));
            assert_eq!(child.pose().theta_degree(), 45.0);
        }
        assert_eq!(SceneNode::Group(outer).solid_count(), 4);
    }

    #[test]
    fn apply_is_broadcast() {
        let mut group = three_cubes();
        group.apply(
            &PoseUpdate::new()
                .origin(Vector3::new(0.0, 0.0, -5.0))
                .phi(Angle::Degrees(30.0)),
        );
        for child in group.children() {
            assert_eq!(child.pose().origin(), &Vector3::new(0.0, 0.0, -5.0));
            assert!((child.pose().phi_degree() - 30.0).abs() < 1e-12);
        }
    }

    #[test]
    fn draw_follows_list_order() {
        let group = three_cubes();
        let mut adapter = RecordingAdapter::new();
        group.draw(&mut adapter, RotationMode::AxisAngle);
        let colors: Vec<Color> = adapter.records().iter().map(|r| r.color).collect();
        assert_eq!(
            colors,
            vec![
                Color::new(1.0, 0.0, 0.0),
                Color::new(0.0, 1.0, 0.0),
                Color::new(0.0, 0.0, 1.0),
            ]
        );
        assert_eq!(adapter.line_count(), 36);
        assert_eq!(adapter.quad_count(), 18);
    }
}
