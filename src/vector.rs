//! Vector helpers on top of cgmath.
//!
//! cgmath covers the arithmetic (`+`, `-`, scalar `*`, `mul_element_wise`,
//! `dot`, `cross`, `magnitude`); this adds the operations the tracer needs
//! with its own tolerance rules.

use crate::error::RenderError;
use crate::types::*;

pub trait VectorExt: Sized {
    /// Divides by `divisor`, refusing divisors closer to zero than `EPSILON`.
    fn checked_div(self, divisor: Float) -> Result<Self, RenderError>;

    /// Unit vector in the same direction, or zero if the length is `<= EPSILON`.
    fn normalize_or_zero(self) -> Self;

    /// Mirror `self` about the plane with normal `normal`.
    fn reflect(self, normal: Self) -> Self;

    /// Component-wise clamp into `[min, max]`.
    fn clamped(self, min: Float, max: Float) -> Self;

    fn approx_eq(self, other: Self) -> bool;
}

impl VectorExt for Vector3f {
    fn checked_div(self, divisor: Float) -> Result<Self, RenderError> {
        if divisor.abs() < EPSILON {
            return Err(RenderError::DegenerateDivision { divisor });
        }
        Ok(self / divisor)
    }

    fn normalize_or_zero(self) -> Self {
        let len = self.magnitude();
        if len > EPSILON {
            self / len
        } else {
            Vector3f::zero()
        }
    }

    fn reflect(self, normal: Self) -> Self {
        self - normal * 2.0 * self.dot(normal)
    }

    fn clamped(self, min: Float, max: Float) -> Self {
        self.map(|c| num::clamp(c, min, max))
    }

    fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() < EPSILON
            && (self.y - other.y).abs() < EPSILON
            && (self.z - other.z).abs() < EPSILON
    }
}

pub fn color_from_rgb8(rgb: Rgb8) -> Color {
    Color::new(Float::from(rgb[0]), Float::from(rgb[1]), Float::from(rgb[2])) / 255.0
}

/// Scales to [0, 255], truncates, and clamps each channel.
pub fn color_to_rgb8(c: Color) -> Rgb8 {
    let v = c.map(|v| num::clamp((v * 255.0).trunc(), 0.0, 255.0) as u8);
    [v.x, v.y, v.z]
}
