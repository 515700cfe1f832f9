use crate::error::RenderError;
use crate::geom::*;
use crate::types::*;
use crate::vector::VectorExt;

pub trait Shape: Sync + Send {
    /// Smallest strictly positive ray parameter where `r` meets the surface.
    fn intersect(&self, r: &Ray3f) -> Option<Float>;
    fn normal_at(&self, p: Point3f) -> Vector3f;
    /// Origin of the shape's local frame, used by procedural textures.
    fn center(&self) -> Point3f;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point3f,
    radius: Float,
}

impl Sphere {
    pub fn new(center: Point3f, radius: Float) -> Result<Sphere, RenderError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(RenderError::InvalidGeometry { radius });
        }
        Ok(Sphere { center, radius })
    }
}

impl Shape for Sphere {
    fn intersect(&self, r: &Ray3f) -> Option<Float> {
        let oc = r.origin - self.center;
        let a = r.direction.dot(r.direction);
        let b = 2.0 * oc.dot(r.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t1 = (-b - sqrt_disc) / (2.0 * a);
        let t2 = (-b + sqrt_disc) / (2.0 * a);
        if t1 > 0.0 {
            Some(t1)
        } else if t2 > 0.0 {
            // origin is inside the sphere
            Some(t2)
        } else {
            None
        }
    }

    fn normal_at(&self, p: Point3f) -> Vector3f {
        (p - self.center).normalize_or_zero()
    }

    fn center(&self) -> Point3f {
        self.center
    }
}
