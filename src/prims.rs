use crate::geom::*;
use crate::material::*;
use crate::shape::*;
use crate::types::*;

pub trait Primitive: Sync + Send {
    fn intersect(&self, _: &Ray3f) -> Option<HitRecord<'_>>;
}

/// Nearest intersection of one ray with one primitive.
///
/// Built fresh for every cast and never mutated afterwards.
#[derive(Copy, Clone, Debug)]
pub struct HitRecord<'a> {
    pub t: Float,
    pub point: Point3f,
    pub normal: Vector3f,
    /// Center of the hit shape's local frame.
    pub center: Point3f,
    pub material: &'a Material,
}

pub struct ShapePrimitive<S: Shape> {
    pub shape: S,
    pub material: Material,
}

impl<S: Shape> ShapePrimitive<S> {
    pub fn new(shape: S, material: Material) -> ShapePrimitive<S> {
        ShapePrimitive { shape, material }
    }
}

impl<S: Shape> Primitive for ShapePrimitive<S> {
    fn intersect(&self, r: &Ray3f) -> Option<HitRecord<'_>> {
        self.shape.intersect(r).map(|t| {
            let point = r.at(t);
            HitRecord {
                t,
                point,
                normal: self.shape.normal_at(point),
                center: self.shape.center(),
                material: &self.material,
            }
        })
    }
}
