use std::f64::consts::FRAC_PI_2;

use crate::error::Result;
use crate::kinematics::{KinematicChain, KinematicFrame, MasterId, MasterParams, PartId, SlaveParams};
use crate::pose::{Angle, PoseUpdate, RotationMode};
use crate::render::RenderAdapter;
use crate::shape::ShapeKind;
use crate::solid::Solid;

/// One arm segment: a chain part and the stalk drawn along it.
#[derive(Debug, Clone)]
pub struct ArmLink {
    part: PartId,
    solid: Solid,
}

impl ArmLink {
    #[must_use]
    pub fn part(&self) -> PartId {
        self.part
    }

    #[must_use]
    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    /// Places the stalk so its `+x` axis runs from the frame's reference
    /// to its tip under [`RotationMode::Spherical`].
    fn follow(&mut self, frame: &KinematicFrame) {
        self.solid.apply(
            &PoseUpdate::new()
                .origin(*frame.reference())
                .theta(Angle::Radians(-frame.theta()))
                .phi(Angle::Radians(FRAC_PI_2 - frame.phi())),
        );
    }
}

/// A jointed arm: one master link and a run of slaves, each drawn as a
/// hexagonal stalk as long as the link.
///
/// Uses the y-up height convention.
#[derive(Debug)]
pub struct RobotArm {
    chain: KinematicChain,
    base: MasterId,
    links: Vec<ArmLink>,
}

impl RobotArm {
    /// Builds the arm and syncs it once.
    ///
    /// # Errors
    ///
    /// Returns an error if a stalk cannot be generated.
    pub fn new(base: MasterParams, segments: Vec<SlaveParams>, link_width: f64) -> Result<Self> {
        let mut chain = KinematicChain::default();
        let stalk = |radius: f64, color| -> Result<Solid> {
            Ok(Solid::new(ShapeKind::HexagonStalk, &[link_width, radius])?.with_color(color))
        };

        let base_solid = stalk(base.radius, base.color)?;
        let base_id = chain.add_master(base);
        let mut links = vec![ArmLink {
            part: base_id.into(),
            solid: base_solid,
        }];

        let mut upstream: PartId = base_id.into();
        for params in segments {
            let solid = stalk(params.radius, params.color)?;
            let id = chain.add_slave(upstream, params)?;
            upstream = id.into();
            links.push(ArmLink {
                part: upstream,
                solid,
            });
        }

        tracing::debug!(links = links.len(), "built robot arm");
        let mut arm = Self {
            chain,
            base: base_id,
            links,
        };
        arm.sync()?;
        Ok(arm)
    }

    #[must_use]
    pub fn chain(&self) -> &KinematicChain {
        &self.chain
    }

    #[must_use]
    pub fn links(&self) -> &[ArmLink] {
        &self.links
    }

    /// Turns the whole arm about the vertical axis.
    ///
    /// Takes effect on the next [`sync`](Self::sync).
    ///
    /// # Errors
    ///
    /// Returns an error if the base part is missing.
    pub fn rotate_base(&mut self, delta: f64) -> Result<()> {
        let theta = self.chain.frame(self.base)?.theta();
        self.chain.set_theta(self.base, theta + delta)?;
        Ok(())
    }

    /// Tilts link `index` (0 is the base) by `delta` radians.
    ///
    /// Takes effect downstream on the next [`sync`](Self::sync). Out of
    /// range indices are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the link's part is missing.
    pub fn tilt(&mut self, index: usize, delta: f64) -> Result<()> {
        if let Some(link) = self.links.get(index) {
            let phi = self.chain.frame(link.part)?.phi();
            self.chain.set_phi(link.part, phi + delta)?;
        }
        Ok(())
    }

    /// Resolves the chain root to leaf and re-poses every stalk.
    ///
    /// # Errors
    ///
    /// Returns an error if a link's part is missing.
    pub fn sync(&mut self) -> Result<()> {
        self.chain.resolve_chain();
        for link in &mut self.links {
            link.follow(self.chain.frame(link.part)?);
        }
        Ok(())
    }

    /// Draws every stalk in spherical mode, base first.
    pub fn draw(&self, adapter: &mut dyn RenderAdapter) {
        for link in &self.links {
            link.solid.draw(adapter, RotationMode::Spherical);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_3, FRAC_PI_4};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::Vector3;
    use crate::render::RecordingAdapter;

    fn three_link_arm() -> RobotArm {
        RobotArm::new(
            MasterParams {
                reference: Vector3::new(0.0, -1.0, 0.0),
                theta: 0.4,
                phi: FRAC_PI_4,
                radius: 2.0,
                ..MasterParams::default()
            },
            vec![
                SlaveParams {
                    phi: FRAC_PI_3,
                    radius: 1.5,
                    ..SlaveParams::default()
                },
                SlaveParams {
                    phi: 2.0,
                    radius: 1.0,
                    ..SlaveParams::default()
                },
            ],
            0.1,
        )
        .unwrap()
    }

    /// World-space centre of a stalk's far ring.
    fn stalk_end(solid: &Solid) -> Vector3 {
        let world = solid.world_vertices(RotationMode::Spherical);
        [1, 2, 5, 6, 9, 10].iter().map(|&i| world[i]).sum::<Vector3>() / 6.0
    }

    fn assert_stalks_follow_chain(arm: &RobotArm) {
        for link in arm.links() {
            let frame = arm.chain().frame(link.part()).unwrap();
            assert_abs_diff_eq!(*link.solid().pose().origin(), *frame.reference(), epsilon = 1e-12);
            assert_abs_diff_eq!(stalk_end(link.solid()), *frame.tip(), epsilon = 1e-9);
        }
    }

    #[test]
    fn stalks_span_their_links() {
        let arm = three_link_arm();
        assert_eq!(arm.links().len(), 3);
        assert_stalks_follow_chain(&arm);
    }

    #[test]
    fn links_are_chained_tip_to_reference() {
        let arm = three_link_arm();
        let frames: Vec<_> = arm
            .links()
            .iter()
            .map(|l| arm.chain().frame(l.part()).unwrap())
            .collect();
        for pair in frames.windows(2) {
            assert_abs_diff_eq!(*pair[1].reference(), *pair[0].tip(), epsilon = 1e-12);
        }
    }

    #[test]
    fn input_waits_for_sync() {
        let mut arm = three_link_arm();
        let end = stalk_end(arm.links()[2].solid());
        arm.rotate_base(0.1).unwrap();
        arm.tilt(1, -0.1).unwrap();
        arm.tilt(7, 1.0).unwrap();
        assert_eq!(stalk_end(arm.links()[2].solid()), end);

        arm.sync().unwrap();
        assert_stalks_follow_chain(&arm);
        assert_ne!(stalk_end(arm.links()[2].solid()), end);
        let last = arm.links()[2].part();
        assert_abs_diff_eq!(arm.chain().frame(last).unwrap().theta(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn draws_one_stalk_per_link() {
        let arm = three_link_arm();
        let mut adapter = RecordingAdapter::new();
        arm.draw(&mut adapter);
        assert_eq!(adapter.records().len(), 3);
        assert!(adapter.records().iter().all(|r| r.mode == RotationMode::Spherical));
    }
}
