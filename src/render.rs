use rand::Rng;
use rayon::prelude::*;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::framebuf::*;
use crate::scene::Scene;
use crate::shading::Shader;
use crate::types::*;
use crate::util;

/// Renders one frame of `scene` with `anti_aliasing_samples` jittered rays
/// per pixel.
///
/// Each row draws from its own random stream derived from the configured
/// seed, `frame` and the row index, so rows can run on any thread.
pub fn render_frame(scene: &Scene, config: &RenderConfig, frame: u64) -> Result<FrameBuf, RenderError> {
    config.validate()?;
    let width = config.width as usize;
    let height = config.height as usize;
    let shader = Shader::new(scene, config);
    let col_scale = 1.0 / (width - 1) as Float;
    let row_scale = 1.0 / (height - 1) as Float;

    let mut fb = FrameBuf::new(width, height);
    fb.rows_mut().enumerate().collect::<Vec<(usize, &mut [Pixel])>>().into_par_iter().for_each(|(j, row)| {
        let mut rng = util::stream_rng(config.seed, frame, j as u64);
        for (i, pixel) in row.iter_mut().enumerate() {
            for _ in 0..config.anti_aliasing_samples {
                let s = (i as Float + rng.gen::<Float>()) * col_scale;
                let t = (j as Float + rng.gen::<Float>()) * row_scale;
                let ray = scene.camera.get_ray(s, t);
                pixel.add_sample(shader.shade(&ray, config.max_depth, &mut rng));
            }
        }
    });
    Ok(fb)
}
