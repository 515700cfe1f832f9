//! Recursive Whitted-style shading: Blinn-Phong direct light, shadow
//! estimation and mirror reflection.

use rand::Rng;

use crate::config::RenderConfig;
use crate::geom::*;
use crate::light::Light;
use crate::material::*;
use crate::prims::HitRecord;
use crate::scene::Scene;
use crate::texture;
use crate::types::*;
use crate::util;
use crate::vector::{color_from_rgb8, VectorExt};

/// Shades rays against one frame's scene.
///
/// Holds only shared references, so one `Shader` can be used from many
/// threads as long as each brings its own random generator.
pub struct Shader<'a> {
    scene: &'a Scene,
    config: &'a RenderConfig,
    background_top: Color,
    background_bottom: Color,
}

impl<'a> Shader<'a> {
    pub fn new(scene: &'a Scene, config: &'a RenderConfig) -> Shader<'a> {
        Shader {
            scene,
            config,
            background_top: color_from_rgb8(config.background_top),
            background_bottom: color_from_rgb8(config.background_bottom),
        }
    }

    /// Color seen along `ray`, in [0, 1] per channel.
    ///
    /// `depth` bounds the reflection chain; at zero the background-bottom
    /// color is returned without tracing.
    pub fn shade<R: Rng + ?Sized>(&self, ray: &Ray3f, depth: u32, rng: &mut R) -> Color {
        if depth == 0 {
            return self.background_bottom;
        }

        let hit = match self.scene.aggregate.closest_hit(ray) {
            Some(hit) => hit,
            None => return self.background(ray),
        };

        let base = self.surface_color(&hit);

        let mut lit = Color::zero();
        for light in &self.scene.lights {
            let term = self.blinn_phong(ray, &hit, light);
            let shadow = self.shadow_factor(&hit, light, rng);
            lit += (base * term * (1.0 - shadow)).mul_element_wise(light.color);
        }

        let reflectivity = hit.material.reflectivity;
        let color = if reflectivity > 0.0 {
            let origin = hit.point + hit.normal * self.config.ray_epsilon;
            let reflected = self.shade(&Ray3f::new(origin, ray.reflect(hit.normal)), depth - 1, rng);
            lit * (1.0 - reflectivity) + reflected * reflectivity
        } else {
            lit
        };
        color.clamped(0.0, 1.0)
    }

    /// Vertical gradient for rays that leave the scene.
    pub fn background(&self, ray: &Ray3f) -> Color {
        let t = 0.5 * (ray.direction.normalize_or_zero().y + 1.0);
        (self.background_bottom * (1.0 - t) + self.background_top * t).clamped(0.0, 1.0)
    }

    /// Material color with the procedural texture applied.
    pub fn surface_color(&self, hit: &HitRecord<'_>) -> Color {
        match hit.material.texture {
            Texture::None => hit.material.color,
            Texture::Stripe => texture::stripe(hit.point, hit.center, hit.material.color, self.config.stripe_frequency),
            Texture::Checkerboard => texture::checkerboard(hit.point, self.config.checkerboard_scale),
        }
    }

    /// Scalar diffuse plus specular weight of `light` at the hit.
    pub fn blinn_phong(&self, ray: &Ray3f, hit: &HitRecord<'_>, light: &Light) -> Float {
        let light_dir = (light.position - hit.point).normalize_or_zero();
        let view_dir = (ray.origin - hit.point).normalize_or_zero();
        let half = (light_dir + view_dir).normalize_or_zero();

        let diffuse = hit.normal.dot(light_dir).max(0.0);
        let specular = hit.normal.dot(half).max(0.0).powf(self.config.specular_exponent);
        diffuse * light.diffuse + specular * light.specular
    }

    /// Fraction of `light` blocked at the hit, in [0, 1].
    pub fn shadow_factor<R: Rng + ?Sized>(&self, hit: &HitRecord<'_>, light: &Light, rng: &mut R) -> Float {
        let origin = hit.point + hit.normal * self.config.ray_epsilon;
        match hit.material.shadow {
            ShadowKind::Sharp => {
                let ray = Ray3f::new(origin, light.position - origin);
                if self.scene.aggregate.any_hit(&ray) {
                    self.config.sharp_shadow_factor
                } else {
                    0.0
                }
            }
            ShadowKind::Smooth => {
                let samples = self.config.soft_shadow_samples;
                if samples == 0 {
                    return 0.0;
                }
                let occluded = (0..samples)
                    .filter(|_| {
                        let target = light.position + util::jitter(&mut *rng, self.config.shadow_jitter);
                        self.scene.aggregate.any_hit(&Ray3f::new(origin, target - origin))
                    })
                    .count();
                occluded as Float / Float::from(samples) * self.config.smooth_shadow_scale
            }
        }
    }
}
