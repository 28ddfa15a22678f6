pub mod angle;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type, used for positions, offsets and axes.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// 3D rotation.
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
