use crate::types::*;
use crate::vector::color_from_rgb8;

/// Point light with Phong-style intensities.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Point3f,
    /// Carried with the light but not added by the shader.
    pub ambient: Float,
    pub diffuse: Float,
    pub specular: Float,
    pub color: Color,
}

impl Light {
    pub fn new(position: Point3f, ambient: Float, diffuse: Float, specular: Float, rgb: Rgb8) -> Light {
        Light { position, ambient, diffuse, specular, color: color_from_rgb8(rgb) }
    }
}
