use crate::error::Result;
use crate::math::Vector3;
use crate::pose::Pose;
use crate::render::Color;
use crate::scene::{SceneNode, SolidsGroup};
use crate::shape::{PrimaryAxis, ShapeKind};
use crate::solid::Solid;

const TRACK: [f64; 6] = [1.6, 1.6, 1.7, 1.7, 0.2, 0.25];
const TRACK_COLOR: Color = Color::new(0.1, 0.1, 0.1);

const TURRET: ShapeKind = ShapeKind::Hexagon {
    axis: PrimaryAxis::Y,
};

/// A plate stacked on top of the previous one.
struct Layer {
    kind: ShapeKind,
    size: &'static [f64],
    color: Color,
    /// Clearance above the previous layer's mid-height.
    gap: f64,
}

static HULL: [Layer; 8] = [
    Layer {
        kind: ShapeKind::Trapezoid,
        size: &[1.5, 1.5, 1.7, 1.6, 0.2, 0.6],
        color: Color::new(0.0, 0.2, 0.0),
        gap: 0.0,
    },
    Layer {
        kind: ShapeKind::Trapezoid,
        size: &[1.7, 1.6, 1.3, 1.6, 0.1, 1.0],
        color: Color::new(0.0, 0.3, 0.0),
        gap: 0.05,
    },
    Layer {
        kind: ShapeKind::Trapezoid,
        size: &[1.2, 1.6, 1.2, 1.3, 0.1, 1.0],
        color: Color::new(0.0, 0.3, 0.0),
        gap: 0.05,
    },
    Layer {
        kind: ShapeKind::Trapezoid,
        size: &[1.2, 1.3, 1.0, 1.0, 0.025, 1.0],
        color: Color::new(0.0, 0.3, 0.0),
        gap: 0.0125,
    },
    Layer {
        kind: TURRET,
        size: &[0.8, 0.05],
        color: Color::new(0.0, 0.3, 0.0),
        gap: 0.025,
    },
    Layer {
        kind: TURRET,
        size: &[1.0, 0.1],
        color: Color::new(0.0, 0.25, 0.0),
        gap: 0.05,
    },
    Layer {
        kind: TURRET,
        size: &[0.76, 0.05],
        color: Color::new(0.0, 0.3, 0.0),
        gap: 0.025,
    },
    Layer {
        kind: TURRET,
        size: &[0.7, 0.025],
        color: Color::new(0.0, 0.3, 0.0),
        gap: 0.0125,
    },
];

/// Vertical extent of a hull layer.
fn layer_height(kind: ShapeKind, size: &[f64]) -> f64 {
    match kind {
        ShapeKind::Trapezoid => size[4],
        _ => size[1],
    }
}

/// A tank built from two tracks, a stacked hull and turret, and a cannon
/// pointing along `-x`.
///
/// Every part shares `origin`, `axis` and `theta`, so the group spins as one
/// body while the parts keep their construction offsets.
///
/// # Errors
///
/// Returns an error if a part cannot be generated.
pub fn tank(origin: Vector3, axis: Vector3, theta: f64) -> Result<SolidsGroup> {
    let pose = Pose::new().with_origin(origin).with_axis(axis).with_theta(theta);
    let part = |kind: ShapeKind, size: &[f64], color: Color, offset: Vector3| -> Result<SceneNode> {
        Ok(Solid::new(kind, size)?
            .with_pose(pose.clone().with_offset(offset))
            .with_color(color)
            .into())
    };

    let mut children = vec![
        part(ShapeKind::Trapezoid, &TRACK, TRACK_COLOR, Vector3::new(0.0, 0.1, 0.45))?,
        part(ShapeKind::Trapezoid, &TRACK, TRACK_COLOR, Vector3::new(0.0, 0.1, -0.45))?,
    ];

    let mut mid = 0.1;
    let mut below: Option<&Layer> = None;
    for layer in &HULL {
        if let Some(prev) = below {
            mid += layer_height(prev.kind, prev.size) / 2.0 + layer.gap;
        }
        children.push(part(layer.kind, layer.size, layer.color, Vector3::new(0.0, mid, 0.0))?);
        below = Some(layer);
    }

    let top = below.map_or(0.0, |layer| layer_height(layer.kind, layer.size));
    children.push(part(
        ShapeKind::HexagonAxis,
        &[0.1, 1.6],
        Color::new(0.0, 0.15, 0.0),
        Vector3::new(-1.0, top / 2.0 + mid - 0.1, 0.0),
    )?);

    tracing::debug!(parts = children.len(), "built tank");
    Ok(SolidsGroup::new(children).with_pose(pose))
}
