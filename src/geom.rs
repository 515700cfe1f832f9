use crate::types::*;
use crate::vector::VectorExt;

#[derive(Copy, Clone, Debug)]
pub struct Ray3f {
    pub origin: Point3f,
    /// Always unit length (or zero for a degenerate input direction).
    pub direction: Vector3f,
}

impl Ray3f {
    pub fn new(origin: Point3f, direction: Vector3f) -> Self {
        Self { origin, direction: direction.normalize_or_zero() }
    }

    pub fn at(&self, t: Float) -> Point3f {
        self.origin + self.direction * t
    }

    /// Direction of the mirror reflection off a surface with `normal`.
    /// The caller picks the new origin.
    pub fn reflect(&self, normal: Vector3f) -> Vector3f {
        self.direction.reflect(normal)
    }
}
