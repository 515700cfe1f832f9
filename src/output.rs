use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::debug;

use crate::animation::Phase;
use crate::framebuf::FrameBuf;
use crate::types::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Ppm,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Ppm => "ppm",
        }
    }
}

/// `frame_0042_MainDance.png`-style name for frame `index` at time `t`.
pub fn frame_file_name(index: u32, t: Float, format: OutputFormat) -> String {
    format!("frame_{:04}_{}.{}", index, Phase::at(t), format.extension())
}

/// Writes the frame into `dir`, creating it if needed. The encoder is picked
/// from the file extension.
pub fn save_frame(fb: &FrameBuf, dir: &Path, file_name: &str) -> Result<PathBuf, failure::Error> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fb.mk_image().save(&path)?;
    debug!("wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn names_carry_index_and_phase() {
        assert_eq!(frame_file_name(0, 0.0, OutputFormat::Png), "frame_0000_Opening.png");
        assert_eq!(frame_file_name(120, 0.5, OutputFormat::Ppm), "frame_0120_MainDance.ppm");
        assert_eq!(frame_file_name(239, 239.0 / 240.0, OutputFormat::Png), "frame_0239_Finale.png");
    }

    #[test]
    fn writes_readable_png() {
        let dir = std::env::temp_dir().join(format!("ornaments-output-{}", std::process::id()));
        let mut fb = FrameBuf::new(3, 2);
        fb.add_sample(0, 1, Color::new(1.0, 0.0, 0.0));
        let path = save_frame(&fb, &dir, "frame.png").unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
        fs::remove_dir_all(&dir).unwrap();
    }
}
