//! Ready-made scenes.

mod arm;
mod orbit;
mod tank;

pub use arm::{ArmLink, RobotArm};
pub use orbit::orbit;
pub use tank::tank;
