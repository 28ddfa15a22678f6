pub mod error;
pub mod kinematics;
pub mod math;
pub mod pose;
pub mod presets;
pub mod render;
pub mod scene;
pub mod shape;
pub mod solid;

pub use error::{Result, SolidkinError};
