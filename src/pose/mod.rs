//! Placement and orientation state shared by solids and groups.

mod update;

pub use update::{Angle, PoseUpdate};

use nalgebra::Unit;

use crate::math::angle::{to_degrees, to_radians, wrap_degrees, wrap_radians};
use crate::math::{Matrix4, Rotation3, Vector3, TOLERANCE};

/// How a pose's angles are turned into a rotation.
///
/// The mode is chosen by whoever draws a solid; it is not part of the pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// Rotate by theta about [`Pose::axis`].
    #[default]
    AxisAngle,
    /// Rotate by phi about z, then by theta about the vertical y axis.
    Spherical,
}

/// Origin, offset, rotation axis and the two rotation angles of a shape.
///
/// Each angle is stored in radians and degrees. The two are kept mirrored:
/// every setter wraps the incoming value once (see
/// [`wrap_once`](crate::math::angle::wrap_once)) and derives the other unit
/// from the wrapped result.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    origin: Vector3,
    offset: Vector3,
    axis: Vector3,
    theta: f64,
    theta_degree: f64,
    phi: f64,
    phi_degree: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            origin: Vector3::zeros(),
            offset: Vector3::zeros(),
            axis: Vector3::y(),
            theta: 0.0,
            theta_degree: 0.0,
            phi: 0.0,
            phi_degree: 0.0,
        }
    }
}

impl Pose {
    /// Creates a pose at the world origin rotating about `+y` by zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pose with `origin` set.
    #[must_use]
    pub fn with_origin(mut self, origin: Vector3) -> Self {
        self.set_origin(origin);
        self
    }

    /// Returns the pose with `offset` set.
    #[must_use]
    pub fn with_offset(mut self, offset: Vector3) -> Self {
        self.set_offset(offset);
        self
    }

    /// Returns the pose with `axis` set.
    #[must_use]
    pub fn with_axis(mut self, axis: Vector3) -> Self {
        self.set_axis(axis);
        self
    }

    /// Returns the pose with theta set in radians.
    #[must_use]
    pub fn with_theta(mut self, radians: f64) -> Self {
        self.set_theta(radians);
        self
    }

    /// Returns the pose with theta set in degrees.
    #[must_use]
    pub fn with_theta_degree(mut self, degrees: f64) -> Self {
        self.set_theta_degree(degrees);
        self
    }

    /// Returns the pose with phi set in radians.
    #[must_use]
    pub fn with_phi(mut self, radians: f64) -> Self {
        self.set_phi(radians);
        self
    }

    /// World-space translation.
    #[must_use]
    pub fn origin(&self) -> &Vector3 {
        &self.origin
    }

    /// Local-space translation applied to the vertex template.
    #[must_use]
    pub fn offset(&self) -> &Vector3 {
        &self.offset
    }

    /// Axis used in [`RotationMode::AxisAngle`].
    #[must_use]
    pub fn axis(&self) -> &Vector3 {
        &self.axis
    }

    /// Theta in radians.
    #[must_use]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Theta in degrees.
    #[must_use]
    pub fn theta_degree(&self) -> f64 {
        self.theta_degree
    }

    /// Phi in radians.
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Phi in degrees.
    #[must_use]
    pub fn phi_degree(&self) -> f64 {
        self.phi_degree
    }

    pub fn set_origin(&mut self, origin: Vector3) {
        self.origin = origin;
    }

    pub fn set_offset(&mut self, offset: Vector3) {
        self.offset = offset;
    }

    pub fn set_axis(&mut self, axis: Vector3) {
        self.axis = axis;
    }

    /// Sets theta in radians and mirrors it into degrees.
    pub fn set_theta(&mut self, radians: f64) {
        self.theta = wrap_radians(radians);
        self.theta_degree = to_degrees(self.theta);
    }

    /// Sets theta in degrees and mirrors it into radians.
    pub fn set_theta_degree(&mut self, degrees: f64) {
        self.theta_degree = wrap_degrees(degrees);
        self.theta = to_radians(self.theta_degree);
    }

    /// Sets phi in radians and mirrors it into degrees.
    pub fn set_phi(&mut self, radians: f64) {
        self.phi = wrap_radians(radians);
        self.phi_degree = to_degrees(self.phi);
    }

    /// Sets phi in degrees and mirrors it into radians.
    pub fn set_phi_degree(&mut self, degrees: f64) {
        self.phi_degree = wrap_degrees(degrees);
        self.phi = to_radians(self.phi_degree);
    }

    /// Applies every field present in `update` through the regular setters.
    ///
    /// Returns `true` if the offset was written, which is the only field
    /// that invalidates derived vertex data.
    pub fn apply(&mut self, update: &PoseUpdate) -> bool {
        if let Some(origin) = update.origin {
            self.set_origin(origin);
        }
        if let Some(axis) = update.axis {
            self.set_axis(axis);
        }
        match update.theta {
            Some(Angle::Radians(r)) => self.set_theta(r),
            Some(Angle::Degrees(d)) => self.set_theta_degree(d),
            None => {}
        }
        match update.phi {
            Some(Angle::Radians(r)) => self.set_phi(r),
            Some(Angle::Degrees(d)) => self.set_phi_degree(d),
            None => {}
        }
        if let Some(offset) = update.offset {
            self.set_offset(offset);
            return true;
        }
        false
    }

    /// The rotation this pose describes under `mode`.
    ///
    /// In axis-angle mode a zero-length axis gives the identity rotation.
    #[must_use]
    pub fn rotation(&self, mode: RotationMode) -> Rotation3 {
        match mode {
            RotationMode::AxisAngle => Unit::try_new(self.axis, TOLERANCE).map_or_else(
                Rotation3::identity,
                |axis| Rotation3::from_axis_angle(&axis, self.theta),
            ),
            RotationMode::Spherical => {
                Rotation3::from_axis_angle(&Vector3::y_axis(), self.theta)
                    * Rotation3::from_axis_angle(&Vector3::z_axis(), self.phi)
            }
        }
    }

    /// Local-to-world matrix: rotate under `mode`, then translate by
    /// `origin`.
    ///
    /// The offset is not part of the matrix; it is already folded into a
    /// solid's working vertices.
    #[must_use]
    pub fn model_matrix(&self, mode: RotationMode) -> Matrix4 {
        Matrix4::new_translation(&self.origin) * self.rotation(mode).to_homogeneous()
    }

    /// Maps a local point to world space under `mode`.
    #[must_use]
    pub fn transform(&self, mode: RotationMode, point: &Vector3) -> Vector3 {
        self.rotation(mode) * point + self.origin
    }
}
