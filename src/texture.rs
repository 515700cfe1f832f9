//! Procedural surface colors.

use crate::types::*;
use crate::vector::VectorExt;

/// Warm golden shimmer blended into striped ornaments.
pub const SHIMMER: Color = Color { x: 1.0, y: 0.95, z: 0.8 };
pub const WARM_WHITE: Color = Color { x: 1.0, y: 1.0, z: 0.9 };
pub const COOL_WHITE: Color = Color { x: 0.8, y: 0.8, z: 1.0 };

/// Maximum share of the shimmer color in a stripe.
const STRIPE_BLEND: Float = 0.3;

/// Swirling stripes around the shape's local frame.
pub fn stripe(point: Point3f, center: Point3f, base: Color, frequency: Float) -> Color {
    let local = (point - center).normalize_or_zero();
    let angle = local.z.atan2(local.x);
    let height = local.y;

    let pattern = (height * frequency + angle * 4.0).sin() + (height * 12.0 - angle * 6.0).sin() * 0.5;
    let blend = ((pattern * PI).sin() + 1.0) * 0.5;
    base * (1.0 - blend * STRIPE_BLEND) + SHIMMER * (blend * STRIPE_BLEND)
}

/// Checker tiles projected onto the horizontal plane; `y` is ignored.
pub fn checkerboard(point: Point3f, scale: Float) -> Color {
    let x = (point.x * scale).floor() as i64;
    let z = (point.z * scale).floor() as i64;
    if (x + z).rem_euclid(2) == 0 {
        WARM_WHITE
    } else {
        COOL_WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn checkerboard_alternates_and_ignores_height() {
        assert_eq!(checkerboard(Point3f::new(0.1, 0.0, 0.1), 4.0), WARM_WHITE);
        assert_eq!(checkerboard(Point3f::new(0.3, 0.0, 0.1), 4.0), COOL_WHITE);
        assert_eq!(checkerboard(Point3f::new(0.3, 0.0, 0.3), 4.0), WARM_WHITE);
        assert_eq!(checkerboard(Point3f::new(0.3, -42.0, 0.3), 4.0), WARM_WHITE);
    }

    #[test]
    fn checkerboard_is_periodic() {
        let scale = 4.0;
        let period = 2.0 / scale;
        for &(x, z) in &[(0.1, 0.1), (-0.3, 0.7), (-1.05, -2.2), (3.3, -0.01), (-0.01, 0.0)] {
            let a = checkerboard(Point3f::new(x, 0.0, z), scale);
            assert_eq!(a, checkerboard(Point3f::new(x + period, 0.0, z), scale));
            assert_eq!(a, checkerboard(Point3f::new(x, 0.0, z + period), scale));
        }
    }

    #[test]
    fn stripe_stays_between_base_and_shimmer() {
        let base = Color::new(220.0, 20.0, 60.0) / 255.0;
        let center = Point3f::new(1.0, 2.0, 3.0);
        for i in 0..32 {
            let a = i as Float * 0.4;
            let p = center + Vector3f::new(a.cos() * 0.5, (a * 0.7).sin() * 0.5, a.sin() * 0.5);
            let c = stripe(p, center, base, 8.0);
            for k in 0..3 {
                let lo = base[k].min(SHIMMER[k]);
                let hi = base[k] * (1.0 - STRIPE_BLEND) + SHIMMER[k] * STRIPE_BLEND;
                let hi = hi.max(base[k]);
                assert!(c[k] >= lo - 1e-12 && c[k] <= hi + 1e-12, "channel {} = {}", k, c[k]);
            }
        }
    }

    #[test]
    fn stripe_matches_known_colors() {
        let base = Color::new(220.0, 20.0, 60.0) / 255.0;
        let center = Point3f::new(0.0, -1.0, 2.0);
        let cases = [
            // equator at angle 0: pattern 0, blend 0.5
            (Vector3f::new(1.0, 0.0, 0.0), Color::new(0.883333333333, 0.209166666667, 0.32)),
            // pole: pattern sin(8) + 0.5 sin(12)
            (Vector3f::new(0.0, 1.0, 0.0), Color::new(0.899152563248, 0.309618776624, 0.385084831648)),
            // height 1/sqrt(3), angle pi/4
            (Vector3f::new(1.0, 1.0, 1.0), Color::new(0.863851579026, 0.085457526815, 0.239846496564)),
        ];
        for &(dir, expected) in &cases {
            let c = stripe(center + dir * 0.7, center, base, 8.0);
            assert_abs_diff_eq!(c, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn stripe_depends_only_on_direction_from_center() {
        let base = Color::new(0.5, 0.5, 0.5);
        let center = Point3f::new(0.0, 1.0, 0.0);
        let dir = Vector3f::new(0.3, -0.2, 0.9);
        let near = stripe(center + dir * 0.25, center, base, 8.0);
        let far = stripe(center + dir * 4.0, center, base, 8.0);
        assert_abs_diff_eq!(near, far, epsilon = 1e-12);
    }
}
