//! Render and animation settings.
//!
//! Defaults reproduce the stock animation; a JSON file can override any
//! subset of fields.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::RenderError;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub anti_aliasing_samples: u32,
    pub soft_shadow_samples: u32,
    pub max_depth: u32,
    /// Offset along the normal for secondary ray origins.
    pub ray_epsilon: Float,
    /// Vertical field of view in degrees.
    pub fov: Float,
    /// Overrides `width / height` when set.
    pub aspect: Option<Float>,
    pub specular_exponent: Float,
    pub background_top: Rgb8,
    pub background_bottom: Rgb8,
    pub stripe_frequency: Float,
    pub checkerboard_scale: Float,
    pub sharp_shadow_factor: Float,
    pub smooth_shadow_scale: Float,
    /// Half-width of the per-axis light jitter for smooth shadows.
    pub shadow_jitter: Float,
    /// Seeds all sampling when set; otherwise every run differs.
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 300,
            height: 150,
            anti_aliasing_samples: 2,
            soft_shadow_samples: 2,
            max_depth: 2,
            ray_epsilon: 0.001,
            fov: 60.0,
            aspect: None,
            specular_exponent: 32.0,
            background_top: [25, 25, 112],
            background_bottom: [47, 79, 79],
            stripe_frequency: 8.0,
            checkerboard_scale: 4.0,
            sharp_shadow_factor: 0.95,
            smooth_shadow_scale: 0.9,
            shadow_jitter: 0.5,
            seed: None,
        }
    }
}

impl RenderConfig {
    pub fn aspect(&self) -> Float {
        self.aspect.unwrap_or_else(|| Float::from(self.width) / Float::from(self.height))
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width < 2 || self.height < 2 {
            return Err(RenderError::config(format!(
                "image must be at least 2x2 pixels, got {}x{}",
                self.width, self.height
            )));
        }
        if self.anti_aliasing_samples == 0 {
            return Err(RenderError::config("anti_aliasing_samples must be at least 1"));
        }
        if !(self.ray_epsilon > 0.0) {
            return Err(RenderError::config(format!("ray_epsilon must be positive, got {}", self.ray_epsilon)));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(RenderError::config(format!("fov {} outside (0, 180)", self.fov)));
        }
        if let Some(aspect) = self.aspect {
            if !(aspect > 0.0) {
                return Err(RenderError::config(format!("aspect must be positive, got {}", aspect)));
            }
        }
        let non_negative = [
            ("specular_exponent", self.specular_exponent),
            ("stripe_frequency", self.stripe_frequency),
            ("checkerboard_scale", self.checkerboard_scale),
            ("sharp_shadow_factor", self.sharp_shadow_factor),
            ("smooth_shadow_scale", self.smooth_shadow_scale),
            ("shadow_jitter", self.shadow_jitter),
        ];
        for (name, value) in non_negative.iter() {
            if !(*value >= 0.0) {
                return Err(RenderError::config(format!("{} must be non-negative, got {}", name, value)));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub fps: u32,
    /// Length of the animation in seconds.
    pub duration: u32,
    /// Reflectivity of the gold ornament.
    pub ornament_reflectivity: Float,
    /// Reflectivity of every other surface.
    pub default_reflectivity: Float,
    pub animate_camera: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            fps: 24,
            duration: 10,
            ornament_reflectivity: 0.5,
            default_reflectivity: 0.3,
            animate_camera: false,
        }
    }
}

impl AnimationConfig {
    pub fn total_frames(&self) -> Result<u32, RenderError> {
        match self.fps.checked_mul(self.duration) {
            Some(0) => Err(RenderError::config("fps and duration must both be positive")),
            Some(n) => Ok(n),
            None => Err(RenderError::config(format!(
                "{} fps for {} s overflows the frame count",
                self.fps, self.duration
            ))),
        }
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        self.total_frames()?;
        for (name, value) in
            [("ornament_reflectivity", self.ornament_reflectivity), ("default_reflectivity", self.default_reflectivity)]
                .iter()
        {
            if !(*value >= 0.0 && *value <= 1.0) {
                return Err(RenderError::config(format!("{} must lie in [0, 1], got {}", name, value)));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub animation: AnimationConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, failure::Error> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        self.render.validate()?;
        self.animation.validate()
    }
}
