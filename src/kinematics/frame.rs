use crate::math::Vector3;

use super::HeightAxis;

/// Computes the tip of a rigid link of length `radius` anchored at
/// `reference`, pointing at azimuth `theta` and inclination `phi`.
///
/// No domain checks are made: NaN or infinite inputs give a NaN tip.
#[must_use]
pub fn spherical_tip(
    reference: &Vector3,
    theta: f64,
    phi: f64,
    radius: f64,
    height_axis: HeightAxis,
) -> Vector3 {
    let planar = radius * phi.sin();
    let (a, b) = (planar * theta.cos(), planar * theta.sin());
    let height = radius * phi.cos();
    let local = match height_axis {
        HeightAxis::Y => Vector3::new(a, height, b),
        HeightAxis::Z => Vector3::new(a, b, height),
    };
    reference + local
}

/// Anchor, angles and length of one link, with its cached tip.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicFrame {
    reference: Vector3,
    theta: f64,
    phi: f64,
    radius: f64,
    height_axis: HeightAxis,
    tip: Vector3,
}

impl KinematicFrame {
    /// Creates a frame and computes its tip.
    #[must_use]
    pub fn new(
        reference: Vector3,
        theta: f64,
        phi: f64,
        radius: f64,
        height_axis: HeightAxis,
    ) -> Self {
        let mut frame = Self {
            reference,
            theta,
            phi,
            radius,
            height_axis,
            tip: Vector3::zeros(),
        };
        frame.recompute();
        frame
    }

    /// Anchor point the spherical coordinates are measured from.
    #[must_use]
    pub fn reference(&self) -> &Vector3 {
        &self.reference
    }

    /// Azimuth in radians.
    #[must_use]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Inclination from the height axis in radians.
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Link length `R`.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Projected length `r = R * sin(phi)` in the plane normal to the
    /// height axis.
    #[must_use]
    pub fn planar_radius(&self) -> f64 {
        self.radius * self.phi.sin()
    }

    #[must_use]
    pub fn height_axis(&self) -> HeightAxis {
        self.height_axis
    }

    /// End point of the link.
    #[must_use]
    pub fn tip(&self) -> &Vector3 {
        &self.tip
    }

    /// Unit direction from the reference towards the tip.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        spherical_tip(&Vector3::zeros(), self.theta, self.phi, 1.0, self.height_axis)
    }

    pub(super) fn set_reference(&mut self, reference: Vector3) {
        self.reference = reference;
        self.recompute();
    }

    pub(super) fn set_theta(&mut self, theta: f64) {
        self.theta = theta;
        self.recompute();
    }

    pub(super) fn set_phi(&mut self, phi: f64) {
        self.phi = phi;
        self.recompute();
    }

    pub(super) fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.recompute();
    }

    /// Re-anchors the frame on an upstream tip and azimuth.
    pub(super) fn anchor(&mut self, reference: Vector3, theta: f64) {
        self.reference = reference;
        self.theta = theta;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.tip = spherical_tip(
            &self.reference,
            self.theta,
            self.phi,
            self.radius,
            self.height_axis,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn horizontal_link_along_x() {
        let frame = KinematicFrame::new(Vector3::zeros(), 0.0, FRAC_PI_2, 10.0, HeightAxis::Y);
        assert_abs_diff_eq!(frame.planar_radius(), 10.0);
        assert_abs_diff_eq!(*frame.tip(), Vector3::new(10.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn vertical_link_points_up_the_height_axis() {
        let y = KinematicFrame::new(Vector3::new(1.0, 1.0, 1.0), 0.7, 0.0, 2.0, HeightAxis::Y);
        assert_abs_diff_eq!(*y.tip(), Vector3::new(1.0, 3.0, 1.0), epsilon = 1e-12);
        let z = KinematicFrame::new(Vector3::new(1.0, 1.0, 1.0), 0.7, 0.0, 2.0, HeightAxis::Z);
        assert_abs_diff_eq!(*z.tip(), Vector3::new(1.0, 1.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn theta_sweeps_in_the_horizontal_plane() {
        let mut frame = KinematicFrame::new(Vector3::zeros(), 0.0, FRAC_PI_2, 1.0, HeightAxis::Y);
        frame.set_theta(FRAC_PI_2);
        assert_abs_diff_eq!(*frame.tip(), Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        frame.set_theta(PI);
        assert_abs_diff_eq!(*frame.tip(), Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn every_setter_refreshes_the_tip() {
        let mut frame = KinematicFrame::new(Vector3::zeros(), 0.0, FRAC_PI_2, 1.0, HeightAxis::Y);
        frame.set_radius(4.0);
        assert_abs_diff_eq!(*frame.tip(), Vector3::new(4.0, 0.0, 0.0), epsilon = 1e-12);
        frame.set_reference(Vector3::new(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(*frame.tip(), Vector3::new(4.0, 1.0, 0.0), epsilon = 1e-12);
        frame.set_phi(FRAC_PI_3);
        let expected = Vector3::new(4.0 * FRAC_PI_3.sin(), 1.0 + 4.0 * FRAC_PI_3.cos(), 0.0);
        assert_abs_diff_eq!(*frame.tip(), expected, epsilon = 1e-12);
    }

    #[test]
    fn tip_is_radius_away_from_reference() {
        let frame = KinematicFrame::new(Vector3::new(3.0, -2.0, 1.0), 1.1, 0.4, 2.5, HeightAxis::Z);
        assert_abs_diff_eq!((frame.tip() - frame.reference()).norm(), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(frame.direction().norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn nan_angle_gives_nan_tip() {
        let frame = KinematicFrame::new(Vector3::zeros(), f64::NAN, 0.5, 1.0, HeightAxis::Y);
        assert!(frame.tip().x.is_nan());
        // Height does not depend on theta.
        assert!(!frame.tip().y.is_nan());
    }
}
