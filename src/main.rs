use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::*;

use ornaments::animation::Phase;
use ornaments::metrics::FrameTimes;
use ornaments::output::{self, OutputFormat};
use ornaments::{new_ornament_scene, render_frame, Config, Float};

#[derive(Parser, Debug)]
#[command(name = "ornaments", about = "Renders the dancing ornaments animation frame by frame")]
struct Args {
    /// JSON file overriding render and animation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the frames are written to
    #[arg(short, long, default_value = "frames")]
    output: PathBuf,

    #[arg(long, value_enum, default_value = "png")]
    format: OutputFormat,

    /// Number of frames (defaults to fps * duration)
    #[arg(long)]
    frames: Option<u32>,

    /// Render only this frame index
    #[arg(long)]
    frame: Option<u32>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Anti-aliasing samples per pixel
    #[arg(short, long)]
    samples: Option<u32>,

    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<(), failure::Error> {
    let args = Args::parse();
    simple_logger::init_with_level(args.log_level)?;

    let mut config = match &args.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };
    if let Some(w) = args.width {
        config.render.width = w;
    }
    if let Some(h) = args.height {
        config.render.height = h;
    }
    if let Some(s) = args.samples {
        config.render.anti_aliasing_samples = s;
    }
    if args.seed.is_some() {
        config.render.seed = args.seed;
    }
    config.validate()?;

    let total = match args.frames {
        Some(0) => failure::bail!("--frames must be at least 1"),
        Some(n) => n,
        None => config.animation.total_frames()?,
    };
    let frames: Vec<u32> = match args.frame {
        Some(i) if i < total => vec![i],
        Some(i) => failure::bail!("frame {} out of range, animation has {} frames", i, total),
        None => (0..total).collect(),
    };

    let render = &config.render;
    info!(
        "rendering {} of {} frames at {}x{}, {} AA samples, {} shadow samples, depth {}",
        frames.len(),
        total,
        render.width,
        render.height,
        render.anti_aliasing_samples,
        render.soft_shadow_samples,
        render.max_depth
    );

    let mut times = FrameTimes::new()?;
    let start = Instant::now();
    for &i in &frames {
        let t = Float::from(i) / Float::from(total);
        let frame_start = Instant::now();

        let scene = new_ornament_scene(t, render, &config.animation)?;
        debug!("frame {} t={:.3} phase {} camera at {:?}", i, t, Phase::at(t), scene.camera.look_from());
        let fb = render_frame(&scene, render, u64::from(i))?;
        let path = output::save_frame(&fb, &args.output, &output::frame_file_name(i, t, args.format))?;

        let elapsed = frame_start.elapsed();
        times.record(elapsed);
        info!("frame {}/{} -> {} in {:.2?}", i + 1, total, path.display(), elapsed);
    }

    info!("done in {:.2?}: {}", start.elapsed(), times.summary());
    Ok(())
}
