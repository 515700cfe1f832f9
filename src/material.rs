use crate::types::*;
use crate::vector::color_from_rgb8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Texture {
    None,
    Stripe,
    Checkerboard,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShadowKind {
    /// One shadow ray; any occluder darkens by a fixed factor.
    Sharp,
    /// Several shadow rays toward a jittered light position.
    Smooth,
}

/// Surface description shared by every hit on a primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub texture: Texture,
    pub shadow: ShadowKind,
    /// Fraction of the final color taken from the mirror-reflected ray.
    pub reflectivity: Float,
}

impl Material {
    pub fn new(rgb: Rgb8, texture: Texture, shadow: ShadowKind, reflectivity: Float) -> Material {
        Material { color: color_from_rgb8(rgb), texture, shadow, reflectivity }
    }

    pub fn matte(rgb: Rgb8) -> Material {
        Material::new(rgb, Texture::None, ShadowKind::Sharp, 0.0)
    }
}
