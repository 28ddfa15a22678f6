use crate::math::Vector3;

/// An angle tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    Radians(f64),
    Degrees(f64),
}

/// A batch of pose writes applied in one step by
/// [`Pose::apply`](super::Pose::apply).
///
/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseUpdate {
    pub origin: Option<Vector3>,
    pub offset: Option<Vector3>,
    pub axis: Option<Vector3>,
    pub theta: Option<Angle>,
    pub phi: Option<Angle>,
}

impl PoseUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn origin(mut self, origin: Vector3) -> Self {
        self.origin = Some(origin);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: Vector3) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn axis(mut self, axis: Vector3) -> Self {
        self.axis = Some(axis);
        self
    }

    #[must_use]
    pub fn theta(mut self, theta: Angle) -> Self {
        self.theta = Some(theta);
        self
    }

    #[must_use]
    pub fn phi(mut self, phi: Angle) -> Self {
        self.phi = Some(phi);
        self
    }

    /// Returns `true` if the update carries no writes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
