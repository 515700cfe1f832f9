use crate::types::*;
use crate::vector::color_to_rgb8;

#[derive(Copy, Clone, Debug)]
pub struct Pixel {
    rgb: Color,
    count: u32,
}

impl Pixel {
    fn new() -> Pixel {
        Pixel { rgb: Color::zero(), count: 0 }
    }

    pub fn add_sample(&mut self, rgb: Color) {
        self.rgb += rgb;
        self.count += 1;
    }

    /// Mean of the samples so far; black when there are none.
    pub fn mean(&self) -> Color {
        if self.count == 0 {
            return Color::zero();
        }
        self.rgb / Float::from(self.count)
    }

    pub fn to_rgb(&self) -> Rgb8 {
        color_to_rgb8(self.mean())
    }
}

/// Sample accumulator for one frame.
///
/// Rows are stored bottom-up (row 0 is the bottom of the image, matching the
/// camera's `t` axis); the output accessors flip to top-down.
pub struct FrameBuf {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Pixel>,
}

impl FrameBuf {
    pub fn new(width: usize, height: usize) -> FrameBuf {
        FrameBuf { width, height, pixels: vec![Pixel::new(); height * width] }
    }

    pub fn add_sample(&mut self, x: usize, y: usize, rgb: Color) {
        self.pixels[x + self.width * y].add_sample(rgb)
    }

    pub fn pixel(&self, x: usize, y: usize) -> &Pixel {
        &self.pixels[x + self.width * y]
    }

    /// Bottom-up rows for independent filling.
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, Pixel> {
        self.pixels.chunks_mut(self.width)
    }

    /// Row-major RGB grid, top row first.
    pub fn to_rgb8(&self) -> Vec<Rgb8> {
        let mut grid = Vec::with_capacity(self.width * self.height);
        for row in self.pixels.chunks(self.width).rev() {
            grid.extend(row.iter().map(Pixel::to_rgb));
        }
        grid
    }

    pub fn mk_image(&self) -> image::RgbImage {
        let mut buf = image::RgbImage::new(self.width as u32, self.height as u32);
        buf.enumerate_pixels_mut().for_each(|(x, y, p)| {
            *p = image::Rgb(self.pixels[x as usize + self.width * (self.height - 1 - y as usize)].to_rgb());
        });
        buf
    }
}
