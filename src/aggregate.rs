use crate::geom::*;
use crate::prims::*;

/// Ordered list of primitives, tested linearly.
///
/// Order is significant: on equal `t` the earlier primitive wins.
#[derive(Default)]
pub struct Aggregate {
    pub prims: Vec<Box<dyn Primitive>>,
}

impl Aggregate {
    pub fn new() -> Aggregate {
        Aggregate { prims: Vec::new() }
    }

    pub fn push<P: Primitive + 'static>(&mut self, prim: P) {
        self.prims.push(Box::new(prim));
    }

    pub fn len(&self) -> usize {
        self.prims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    pub fn closest_hit(&self, r: &Ray3f) -> Option<HitRecord<'_>> {
        self.prims.iter().fold(None, |best, p| match (best, p.intersect(r)) {
            (None, hit) => hit,
            (Some(best), None) => Some(best),
            (Some(best), Some(hit)) => Some(if hit.t < best.t { hit } else { best }),
        })
    }

    /// True as soon as any primitive is hit at a positive `t`.
    pub fn any_hit(&self, r: &Ray3f) -> bool {
        self.prims.iter().any(|p| p.intersect(r).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::*;
    use crate::shape::*;
    use crate::types::*;
    use approx::assert_abs_diff_eq;

    fn sphere(z: Float, radius: Float, rgb: Rgb8) -> ShapePrimitive<Sphere> {
        ShapePrimitive::new(Sphere::new(Point3f::new(0.0, 0.0, z), radius).unwrap(), Material::matte(rgb))
    }

    fn forward() -> Ray3f {
        Ray3f::new(Point3f::origin(), -Vector3f::unit_z())
    }

    #[test]
    fn empty_aggregate_misses() {
        let agg = Aggregate::new();
        assert!(agg.closest_hit(&forward()).is_none());
        assert!(!agg.any_hit(&forward()));
    }

    #[test]
    fn overlapping_spheres_report_nearer() {
        let mut agg = Aggregate::new();
        // far sphere first so order alone cannot explain the result
        agg.push(sphere(-10.0, 3.0, [255, 0, 0]));
        agg.push(sphere(-6.0, 2.0, [0, 255, 0]));
        let hit = agg.closest_hit(&forward()).unwrap();
        assert_abs_diff_eq!(hit.t, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.material.color, Color::new(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(hit.normal, Vector3f::unit_z(), epsilon = 1e-9);
        assert_abs_diff_eq!(hit.center, Point3f::new(0.0, 0.0, -6.0));
    }

    #[test]
    fn ties_favor_first_primitive() {
        let mut agg = Aggregate::new();
        agg.push(sphere(-5.0, 1.0, [255, 0, 0]));
        agg.push(sphere(-5.0, 1.0, [0, 0, 255]));
        let hit = agg.closest_hit(&forward()).unwrap();
        assert_abs_diff_eq!(hit.material.color, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn spheres_behind_origin_are_ignored() {
        let mut agg = Aggregate::new();
        agg.push(sphere(5.0, 1.0, [255, 0, 0]));
        assert!(agg.closest_hit(&forward()).is_none());
        agg.push(sphere(-5.0, 1.0, [0, 255, 0]));
        assert!(agg.any_hit(&forward()));
    }
}
