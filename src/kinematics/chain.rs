use slotmap::SlotMap;

use crate::error::ChainError;
use crate::math::{Vector3, TOLERANCE};
use crate::render::Color;

use super::frame::{spherical_tip, KinematicFrame};
use super::ChainConfig;

slotmap::new_key_type! {
    /// Unique identifier for a part in a kinematic chain.
    pub struct PartId;
}

/// Identifier of a master part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MasterId(PartId);

/// Identifier of a slave part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlaveId(PartId);

impl From<MasterId> for PartId {
    fn from(id: MasterId) -> Self {
        id.0
    }
}

impl From<SlaveId> for PartId {
    fn from(id: SlaveId) -> Self {
        id.0
    }
}

/// Construction parameters for a master part.
#[derive(Debug, Clone)]
pub struct MasterParams {
    pub name: String,
    pub color: Color,
    pub reference: Vector3,
    pub theta: f64,
    pub phi: f64,
    pub radius: f64,
}

impl Default for MasterParams {
    fn default() -> Self {
        Self {
            name: "master".into(),
            color: Color::WHITE,
            reference: Vector3::zeros(),
            theta: 0.0,
            phi: 0.0,
            radius: 1.0,
        }
    }
}

/// Construction parameters for a slave part.
///
/// A slave starts anchored at `reference` with zero azimuth; it only picks
/// up its upstream tip on the first sync.
#[derive(Debug, Clone)]
pub struct SlaveParams {
    pub name: String,
    pub color: Color,
    pub reference: Vector3,
    pub phi: f64,
    pub radius: f64,
}

impl Default for SlaveParams {
    fn default() -> Self {
        Self {
            name: "slave".into(),
            color: Color::WHITE,
            reference: Vector3::zeros(),
            phi: 0.0,
            radius: 1.0,
        }
    }
}

/// A freely placed root link.
#[derive(Debug, Clone)]
pub struct MasterPart {
    pub name: String,
    pub color: Color,
    frame: KinematicFrame,
}

impl MasterPart {
    #[must_use]
    pub fn frame(&self) -> &KinematicFrame {
        &self.frame
    }
}

/// A link anchored on an upstream part.
#[derive(Debug, Clone)]
pub struct SlavePart {
    pub name: String,
    pub color: Color,
    master: PartId,
    frame: KinematicFrame,
}

impl SlavePart {
    /// The upstream part this slave reads its anchor from.
    #[must_use]
    pub fn master(&self) -> PartId {
        self.master
    }

    /// The frame as of the last sync.
    #[must_use]
    pub fn frame(&self) -> &KinematicFrame {
        &self.frame
    }
}

/// A part stored in a [`KinematicChain`].
#[derive(Debug, Clone)]
pub enum ChainPart {
    Master(MasterPart),
    Slave(SlavePart),
}

impl ChainPart {
    #[must_use]
    pub fn frame(&self) -> &KinematicFrame {
        match self {
            Self::Master(part) => &part.frame,
            Self::Slave(part) => &part.frame,
        }
    }

    fn frame_mut(&mut self) -> &mut KinematicFrame {
        match self {
            Self::Master(part) => &mut part.frame,
            Self::Slave(part) => &mut part.frame,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Master(part) => &part.name,
            Self::Slave(part) => &part.name,
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Master(part) => part.color,
            Self::Slave(part) => part.color,
        }
    }

    /// The upstream part, or `None` for a master.
    #[must_use]
    pub fn upstream(&self) -> Option<PartId> {
        match self {
            Self::Master(_) => None,
            Self::Slave(part) => Some(part.master),
        }
    }
}

/// Arena owning every part of one or more master/slave chains.
///
/// Slaves refer to their upstream part by id. Parts are never removed, so
/// insertion order is also a valid root-to-leaf order.
#[derive(Debug, Default)]
pub struct KinematicChain {
    config: ChainConfig,
    parts: SlotMap<PartId, ChainPart>,
    order: Vec<PartId>,
}

impl KinematicChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new(config: ChainConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Parts in insertion (root-to-leaf) order.
    pub fn iter(&self) -> impl Iterator<Item = (PartId, &ChainPart)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.parts.get(id).map(|part| (id, part)))
    }

    /// Adds a master part and returns its id.
    pub fn add_master(&mut self, params: MasterParams) -> MasterId {
        let frame = KinematicFrame::new(
            params.reference,
            params.theta,
            params.phi,
            params.radius,
            self.config.height_axis,
        );
        tracing::debug!(name = %params.name, tip = ?frame.tip(), "added master part");
        let id = self.parts.insert(ChainPart::Master(MasterPart {
            name: params.name,
            color: params.color,
            frame,
        }));
        self.order.push(id);
        MasterId(id)
    }

    /// Adds a slave part hanging off `upstream`, which may be a master or
    /// another slave.
    ///
    /// The new slave is not synced.
    ///
    /// # Errors
    ///
    /// Returns an error if `upstream` is not in this chain.
    pub fn add_slave(
        &mut self,
        upstream: impl Into<PartId>,
        params: SlaveParams,
    ) -> Result<SlaveId, ChainError> {
        let master = upstream.into();
        self.part(master)?;
        let frame = KinematicFrame::new(
            params.reference,
            0.0,
            params.phi,
            params.radius,
            self.config.height_axis,
        );
        tracing::debug!(name = %params.name, "added slave part");
        let id = self.parts.insert(ChainPart::Slave(SlavePart {
            name: params.name,
            color: params.color,
            master,
            frame,
        }));
        self.order.push(id);
        Ok(SlaveId(id))
    }

    /// Returns the part, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the part is not in this chain.
    pub fn part(&self, id: impl Into<PartId>) -> Result<&ChainPart, ChainError> {
        self.parts
            .get(id.into())
            .ok_or(ChainError::PartNotFound("chain part"))
    }

    fn part_mut(&mut self, id: PartId) -> Result<&mut ChainPart, ChainError> {
        self.parts
            .get_mut(id)
            .ok_or(ChainError::PartNotFound("chain part"))
    }

    fn master_mut(&mut self, id: MasterId) -> Result<&mut MasterPart, ChainError> {
        match self.part_mut(id.0)? {
            ChainPart::Master(part) => Ok(part),
            ChainPart::Slave(_) => Err(ChainError::RoleMismatch { expected: "master" }),
        }
    }

    /// Returns the part's stored frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the part is not in this chain.
    pub fn frame(&self, id: impl Into<PartId>) -> Result<&KinematicFrame, ChainError> {
        self.part(id).map(ChainPart::frame)
    }

    /// Returns the part's stored tip. For a slave this reflects its last
    /// sync, not necessarily the current upstream state.
    ///
    /// # Errors
    ///
    /// Returns an error if the part is not in this chain.
    pub fn tip(&self, id: impl Into<PartId>) -> Result<Vector3, ChainError> {
        self.frame(id).map(|frame| *frame.tip())
    }

    /// Moves a master's anchor.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not name a master in this chain.
    pub fn set_ref(&mut self, id: MasterId, reference: Vector3) -> Result<(), ChainError> {
        self.master_mut(id)?.frame.set_reference(reference);
        Ok(())
    }

    /// Sets a master's azimuth in radians.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not name a master in this chain.
    pub fn set_theta(&mut self, id: MasterId, theta: f64) -> Result<(), ChainError> {
        self.master_mut(id)?.frame.set_theta(theta);
        Ok(())
    }

    /// Sets a part's inclination in radians.
    ///
    /// A slave recomputes its tip from its last-synced anchor and azimuth.
    ///
    /// # Errors
    ///
    /// Returns an error if the part is not in this chain.
    pub fn set_phi(&mut self, id: impl Into<PartId>, phi: f64) -> Result<(), ChainError> {
        self.part_mut(id.into())?.frame_mut().set_phi(phi);
        Ok(())
    }

    /// Sets a part's link length.
    ///
    /// A slave recomputes its tip from its last-synced anchor and azimuth.
    ///
    /// # Errors
    ///
    /// Returns an error if the part is not in this chain.
    pub fn set_radius(&mut self, id: impl Into<PartId>, radius: f64) -> Result<(), ChainError> {
        self.part_mut(id.into())?.frame_mut().set_radius(radius);
        Ok(())
    }

    /// Pulls a slave's anchor and azimuth from its upstream part's current
    /// tip and theta, then recomputes its tip.
    ///
    /// Parts further downstream are left stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not name a slave in this chain or
    /// its upstream part is missing.
    pub fn update_ref(&mut self, id: SlaveId) -> Result<(), ChainError> {
        let upstream = match self.part(id)? {
            ChainPart::Slave(part) => part.master,
            ChainPart::Master(_) => return Err(ChainError::RoleMismatch { expected: "slave" }),
        };
        let (tip, theta) = {
            let frame = self.frame(upstream)?;
            (*frame.tip(), frame.theta())
        };
        self.part_mut(id.0)?.frame_mut().anchor(tip, theta);
        tracing::trace!(tip = ?tip, theta, "slave re-anchored");
        Ok(())
    }

    /// Syncs every slave once, root to leaf.
    pub fn resolve_chain(&mut self) {
        for i in 0..self.order.len() {
            let id = self.order[i];
            let Some(upstream) = self.parts.get(id).and_then(ChainPart::upstream) else {
                continue;
            };
            let Some((tip, theta)) = self
                .parts
                .get(upstream)
                .map(|part| (*part.frame().tip(), part.frame().theta()))
            else {
                continue;
            };
            if let Some(part) = self.parts.get_mut(id) {
                part.frame_mut().anchor(tip, theta);
            }
        }
        tracing::trace!(parts = self.order.len(), "resolved chain");
    }

    /// The tip a part would have if every part upstream of it were synced,
    /// computed from current state without writing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the part or one of its upstream parts is missing.
    pub fn resolved_tip(&self, id: impl Into<PartId>) -> Result<Vector3, ChainError> {
        self.resolved_anchor(id.into()).map(|(tip, _)| tip)
    }

    /// Returns `(tip, theta)` with the whole upstream path resolved.
    fn resolved_anchor(&self, id: PartId) -> Result<(Vector3, f64), ChainError> {
        let mut path = Vec::new();
        let mut cursor = id;
        let root = loop {
            match self.part(cursor)? {
                ChainPart::Master(part) => break part,
                ChainPart::Slave(part) => {
                    path.push(&part.frame);
                    cursor = part.master;
                }
            }
        };

        let mut tip = *root.frame.tip();
        let theta = root.frame.theta();
        for frame in path.iter().rev() {
            tip = spherical_tip(&tip, theta, frame.phi(), frame.radius(), frame.height_axis());
        }
        Ok((tip, theta))
    }

    /// Whether a slave's stored anchor and azimuth match its upstream
    /// part's current tip and theta.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not name a slave in this chain.
    pub fn is_synced(&self, id: SlaveId) -> Result<bool, ChainError> {
        let ChainPart::Slave(part) = self.part(id)? else {
            return Err(ChainError::RoleMismatch { expected: "slave" });
        };
        let upstream = self.frame(part.master)?;
        let offset = (part.frame.reference() - upstream.tip()).norm();
        Ok(offset <= TOLERANCE && (part.frame.theta() - upstream.theta()).abs() <= TOLERANCE)
    }
}
