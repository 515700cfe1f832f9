pub use cgmath::{Array, ElementWise, EuclideanSpace, InnerSpace, MetricSpace, VectorSpace, Zero};
pub use cgmath::{Point3, Vector3};

pub use std::f64::consts::PI;

pub type Float = f64;
pub type Vector3f = Vector3<Float>;
pub type Point3f = Point3<Float>;

/// Linear RGB, each channel in [0, 1].
pub type Color = Vector3f;
/// 8-bit RGB triple as stored in frames and scene descriptions.
pub type Rgb8 = [u8; 3];

/// Tolerance for near-zero lengths, divisors and vector equality.
pub const EPSILON: Float = 1e-9;
