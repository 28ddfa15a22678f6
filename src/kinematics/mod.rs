//! Spherical-coordinate kinematic chains.
//!
//! A chain is an arena of parts. A master part is placed freely; a slave
//! part is anchored on an upstream part's tip and inherits its azimuth.
//! Slaves pull that state only when [`KinematicChain::update_ref`] (or
//! [`KinematicChain::resolve_chain`]) runs, so a chain must be synced
//! root-to-leaf after any upstream write.

mod chain;
mod frame;

pub use chain::{
    ChainPart, KinematicChain, MasterId, MasterParams, MasterPart, PartId, SlaveId, SlaveParams,
    SlavePart,
};
pub use frame::{spherical_tip, KinematicFrame};

/// Which world axis carries the `R * cos(phi)` height component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightAxis {
    /// `tip = ref + (r cos(theta), R cos(phi), r sin(theta))`.
    #[default]
    Y,
    /// `tip = ref + (r cos(theta), r sin(theta), R cos(phi))`.
    Z,
}

/// Chain-wide settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainConfig {
    /// Height convention for every part in the chain.
    pub height_axis: HeightAxis,
}
