use crate::error::RenderError;
use crate::geom::*;
use crate::types::*;
use crate::vector::VectorExt;

/// Pinhole camera.
///
/// The pose fields are private so every change goes through a setter that
/// rebuilds the basis and viewport before the next `get_ray`.
#[derive(Clone, Debug)]
pub struct Camera {
    look_from: Point3f,
    look_at: Point3f,
    vup: Vector3f,
    /// Vertical field of view in degrees.
    vfov: Float,
    aspect: Float,

    u: Vector3f,
    v: Vector3f,
    w: Vector3f,
    /// Center of the lens.
    origin: Point3f,
    /// Lower left corner of the transformed image plane.
    lower_left: Point3f,
    /// Horizontal edge of the transformed image plane.
    horizontal: Vector3f,
    /// Vertical edge of the transformed image plane.
    vertical: Vector3f,
}

impl Camera {
    pub fn new(
        look_from: Point3f,
        look_at: Point3f,
        vup: Vector3f,
        vfov: Float,
        aspect: Float,
    ) -> Result<Camera, RenderError> {
        let mut c = Camera {
            look_from,
            look_at,
            vup,
            vfov,
            aspect,
            u: Vector3f::zero(),
            v: Vector3f::zero(),
            w: Vector3f::zero(),
            origin: look_from,
            lower_left: look_from,
            horizontal: Vector3f::zero(),
            vertical: Vector3f::zero(),
        };
        c.update()?;
        Ok(c)
    }

    pub fn set_pose(&mut self, look_from: Point3f, look_at: Point3f, vup: Vector3f) -> Result<(), RenderError> {
        let previous = (self.look_from, self.look_at, self.vup);
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.update().map_err(|e| {
            let (f, a, u) = previous;
            self.look_from = f;
            self.look_at = a;
            self.vup = u;
            e
        })
    }

    pub fn set_lens(&mut self, vfov: Float, aspect: Float) -> Result<(), RenderError> {
        let previous = (self.vfov, self.aspect);
        self.vfov = vfov;
        self.aspect = aspect;
        self.update().map_err(|e| {
            self.vfov = previous.0;
            self.aspect = previous.1;
            e
        })
    }

    pub fn look_from(&self) -> Point3f {
        self.look_from
    }

    pub fn look_at(&self) -> Point3f {
        self.look_at
    }

    pub fn basis(&self) -> (Vector3f, Vector3f, Vector3f) {
        (self.u, self.v, self.w)
    }

    /// Ray through the image plane at `(s, t)`; `s` runs left to right and
    /// `t` bottom to top, both nominally in [0, 1].
    pub fn get_ray(&self, s: Float, t: Float) -> Ray3f {
        let target = self.lower_left + self.horizontal * s + self.vertical * t;
        Ray3f::new(self.origin, target - self.origin)
    }

    /// Recomputes basis and viewport, leaving `self` untouched on error.
    fn update(&mut self) -> Result<(), RenderError> {
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(RenderError::camera(format!("vertical fov {} outside (0, 180)", self.vfov)));
        }
        if !(self.aspect > 0.0 && self.aspect.is_finite()) {
            return Err(RenderError::camera(format!("aspect ratio {} must be positive", self.aspect)));
        }
        let theta = self.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = self.aspect * half_height;

        let w = (self.look_from - self.look_at).normalize_or_zero();
        if w == Vector3f::zero() {
            return Err(RenderError::camera("look_from and look_at coincide"));
        }
        let u = self.vup.cross(w).normalize_or_zero();
        if u == Vector3f::zero() {
            return Err(RenderError::camera("up vector is parallel to the view direction"));
        }
        let v = w.cross(u);

        let horizontal = u * (2.0 * half_width);
        let vertical = v * (2.0 * half_height);
        self.u = u;
        self.v = v;
        self.w = w;
        self.origin = self.look_from;
        self.horizontal = horizontal;
        self.vertical = vertical;
        self.lower_left = self.origin - horizontal * 0.5 - vertical * 0.5 - w;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn looking_down_z() -> Camera {
        Camera::new(Point3f::origin(), Point3f::new(0.0, 0.0, -1.0), Vector3f::unit_y(), 90.0, 2.0).unwrap()
    }

    #[test]
    fn basis_is_orthonormal() {
        let c = Camera::new(
            Point3f::new(0.0, 3.0, 8.0),
            Point3f::new(0.0, 0.0, -2.0),
            Vector3f::unit_y(),
            60.0,
            2.0,
        )
        .unwrap();
        let (u, v, w) = c.basis();
        for b in &[u, v, w] {
            assert_abs_diff_eq!(b.magnitude(), 1.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(u.dot(v), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.dot(w), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(u.dot(w), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn center_ray_points_at_target() {
        let c = looking_down_z();
        let r = c.get_ray(0.5, 0.5);
        assert_abs_diff_eq!(r.origin, Point3f::origin());
        assert_abs_diff_eq!(r.direction, -Vector3f::unit_z(), epsilon = 1e-12);
    }

    #[test]
    fn corners_follow_fov_and_aspect() {
        // 90 degree fov: half height 1, aspect 2: half width 2
        let c = looking_down_z();
        let r = c.get_ray(0.0, 0.0);
        assert_abs_diff_eq!(r.direction, Vector3f::new(-2.0, -1.0, -1.0).normalize(), epsilon = 1e-12);
        let r = c.get_ray(1.0, 1.0);
        assert_abs_diff_eq!(r.direction, Vector3f::new(2.0, 1.0, -1.0).normalize(), epsilon = 1e-12);
    }

    #[test]
    fn set_pose_recomputes_basis() {
        let mut c = looking_down_z();
        c.set_pose(Point3f::new(5.0, 0.0, 0.0), Point3f::origin(), Vector3f::unit_y()).unwrap();
        let r = c.get_ray(0.5, 0.5);
        assert_abs_diff_eq!(r.origin, Point3f::new(5.0, 0.0, 0.0));
        assert_abs_diff_eq!(r.direction, -Vector3f::unit_x(), epsilon = 1e-12);
    }

    #[test]
    fn set_lens_recomputes_viewport() {
        let mut c = looking_down_z();
        c.set_lens(90.0, 1.0).unwrap();
        let r = c.get_ray(1.0, 0.5);
        assert_abs_diff_eq!(r.direction, Vector3f::new(1.0, 0.0, -1.0).normalize(), epsilon = 1e-12);
    }

    #[test]
    fn rejects_degenerate_pose() {
        let p = Point3f::new(1.0, 1.0, 1.0);
        assert!(Camera::new(p, p, Vector3f::unit_y(), 60.0, 1.0).is_err());
        assert!(Camera::new(Point3f::origin(), Point3f::new(0.0, -3.0, 0.0), Vector3f::unit_y(), 60.0, 1.0)
            .is_err());
        let q = Point3f::new(-1.0, -1.0, -1.0);
        assert!(Camera::new(Point3f::origin(), q, Vector3f::unit_y(), 0.0, 1.0).is_err());
        assert!(Camera::new(Point3f::origin(), q, Vector3f::unit_y(), 60.0, -1.0).is_err());
        assert!(Camera::new(Point3f::origin(), q, Vector3f::unit_y(), 60.0, 1.0).is_ok());
    }

    #[test]
    fn failed_update_keeps_previous_pose() {
        let mut c = looking_down_z();
        assert!(c.set_pose(Point3f::origin(), Point3f::origin(), Vector3f::unit_y()).is_err());
        assert_abs_diff_eq!(c.look_at(), Point3f::new(0.0, 0.0, -1.0));
        let r = c.get_ray(0.5, 0.5);
        assert_abs_diff_eq!(r.direction, -Vector3f::unit_z(), epsilon = 1e-12);
    }
}
