use crate::error::Result;
use crate::math::Vector3;
use crate::pose::Pose;
use crate::render::Color;
use crate::scene::{SceneNode, SolidsGroup};
use crate::shape::ShapeKind;
use crate::solid::Solid;

const CUBES: [(f64, f64, Color); 5] = [
    (0.0, 0.2, Color::new(0.2, 0.8, 1.0)),
    (0.5, 0.18, Color::new(0.4, 0.6, 1.0)),
    (1.0, 0.16, Color::new(0.6, 0.4, 0.9)),
    (1.5, 0.14, Color::new(0.8, 0.3, 0.6)),
    (2.0, 0.12, Color::new(1.0, 0.0, 0.2)),
];

/// Five shrinking cubes strung out along x from `offset`, all spinning
/// about `axis` around `origin`.
///
/// # Errors
///
/// Returns an error if a cube cannot be generated.
pub fn orbit(origin: Vector3, offset: Vector3, axis: Vector3, theta: f64) -> Result<SolidsGroup> {
    let pose = Pose::new().with_origin(origin).with_axis(axis).with_theta(theta);
    let children = CUBES
        .iter()
        .map(|&(x, size, color)| {
            let cube = Solid::new(ShapeKind::Cube, &[size])?
                .with_pose(pose.clone().with_offset(offset + Vector3::new(x, 0.0, 0.0)))
                .with_color(color);
            Ok(SceneNode::from(cube))
        })
        .collect::<Result<Vec<SceneNode>>>()?;
    tracing::debug!(cubes = children.len(), "built cube orbit");
    Ok(SolidsGroup::new(children).with_pose(pose.with_offset(offset)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn cubes_keep_their_spacing_until_the_group_offset_is_written() {
        let mut group = orbit(
            Vector3::new(0.0, 0.0, -5.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 1.0),
            FRAC_PI_2,
        )
        .unwrap();
        assert_eq!(group.len(), 5);

        let centres = |group: &SolidsGroup| -> Vec<f64> {
            group
                .children()
                .iter()
                .map(|child| match child {
                    SceneNode::Solid(s) => s.vertices().iter().map(|v| v.x).sum::<f64>() / 8.0,
                    SceneNode::Group(_) => unreachable!(),
                })
                .collect()
        };
        let spread = centres(&group);
        for (c, expected) in spread.iter().zip([1.0, 1.5, 2.0, 2.5, 3.0]) {
            assert!((c - expected).abs() < 1e-12);
        }

        // Spinning only touches theta, the spacing survives.
        group.set_theta(FRAC_PI_2 + 0.1);
        assert_eq!(centres(&group), spread);

        // Broadcasting an offset collapses every cube onto it.
        group.set_offset(Vector3::zeros());
        assert!(centres(&group).iter().all(|c| c.abs() < 1e-12));
    }
}
