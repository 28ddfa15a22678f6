//! Composite scene graph.
//!
//! A [`SolidsGroup`] is a fan-out point: setting a pose field on it writes
//! the same value into every child, recursively. It does not stack its own
//! transform on top of the children.

mod group;

pub use group::SolidsGroup;

use crate::math::Vector3;
use crate::pose::{Pose, PoseUpdate, RotationMode};
use crate::render::RenderAdapter;
use crate::solid::Solid;

/// A drawable node: a single solid or a nested group.
#[derive(Debug, Clone)]
pub enum SceneNode {
    Solid(Solid),
    Group(SolidsGroup),
}

impl SceneNode {
    /// The node's own pose.
    #[must_use]
    pub fn pose(&self) -> &Pose {
        match self {
            Self::Solid(solid) => solid.pose(),
            Self::Group(group) => group.pose(),
        }
    }

    pub fn set_origin(&mut self, origin: Vector3) {
        match self {
            Self::Solid(solid) => solid.set_origin(origin),
            Self::Group(group) => group.set_origin(origin),
        }
    }

    pub fn set_offset(&mut self, offset: Vector3) {
        match self {
            Self::Solid(solid) => solid.set_offset(offset),
            Self::Group(group) => group.set_offset(offset),
        }
    }

    pub fn set_axis(&mut self, axis: Vector3) {
        match self {
            Self::Solid(solid) => solid.set_axis(axis),
            Self::Group(group) => group.set_axis(axis),
        }
    }

    pub fn set_theta(&mut self, radians: f64) {
        match self {
            Self::Solid(solid) => solid.set_theta(radians),
            Self::Group(group) => group.set_theta(radians),
        }
    }

    pub fn set_theta_degree(&mut self, degrees: f64) {
        match self {
            Self::Solid(solid) => solid.set_theta_degree(degrees),
            Self::Group(group) => group.set_theta_degree(degrees),
        }
    }

    pub fn set_phi(&mut self, radians: f64) {
        match self {
            Self::Solid(solid) => solid.set_phi(radians),
            Self::Group(group) => group.set_phi(radians),
        }
    }

    pub fn set_phi_degree(&mut self, degrees: f64) {
        match self {
            Self::Solid(solid) => solid.set_phi_degree(degrees),
            Self::Group(group) => group.set_phi_degree(degrees),
        }
    }

    pub fn apply(&mut self, update: &PoseUpdate) {
        match self {
            Self::Solid(solid) => solid.apply(update),
            Self::Group(group) => group.apply(update),
        }
    }

    pub fn draw(&self, adapter: &mut dyn RenderAdapter, mode: RotationMode) {
        match self {
            Self::Solid(solid) => solid.draw(adapter, mode),
            Self::Group(group) => group.draw(adapter, mode),
        }
    }

    /// Number of solids in this node, counting through nested groups.
    #[must_use]
    pub fn solid_count(&self) -> usize {
        match self {
            Self::Solid(_) => 1,
            Self::Group(group) => group.children().iter().map(Self::solid_count).sum(),
        }
    }
}

impl From<Solid> for SceneNode {
    fn from(solid: Solid) -> Self {
        Self::Solid(solid)
    }
}

impl From<SolidsGroup> for SceneNode {
    fn from(group: SolidsGroup) -> Self {
        Self::Group(group)
    }
}
