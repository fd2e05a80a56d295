// Decodes the embedded burger and knocks out its background.
// Visual expectation: every pixel that belongs to the black border around the
// burger becomes the sentinel color, so only the burger itself gets drawn.

use crate::error::Error;
use image::{Rgb, RgbImage};
use log::info;

/// "Not part of the sprite; do not draw." Same value in every channel, so it
/// does not care whether frames are RGB or BGR.
pub const SENTINEL: Rgb<u8> = Rgb([1, 1, 1]);

/// Known background pixel next to the border; the flood fill starts here.
pub const SEED: (u32, u32) = (1, 1);

static BURGER_PNG: &[u8] = include_bytes!("../assets/burger.png");

/// The decoded sprite with its background replaced by [`SENTINEL`].
pub struct Sprite {
    pixels: RgbImage,
    // (x, y, color) of every non-sentinel pixel, computed once at load
    opaque: Vec<(u32, u32, Rgb<u8>)>,
}

impl Sprite {
    /// Load the burger that ships inside the binary.
    pub fn burger() -> Result<Self, Error> {
        Self::from_png_bytes(BURGER_PNG)
    }

    /// Decode any compressed raster image and strip its background.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| Error::SpriteDecode(format!("Decode sprite: {e}")))?;
        // Alpha is dropped as-is; the background is found by color, not transparency.
        let sprite = Self::from_rgb(decoded.to_rgb8());
        info!(
            "sprite loaded: {}x{}, {} opaque pixels",
            sprite.width(),
            sprite.height(),
            sprite.opaque.len()
        );
        Ok(sprite)
    }

    /// Flood the region around [`SEED`] with [`SENTINEL`] and index what is left.
    pub fn from_rgb(mut pixels: RgbImage) -> Self {
        flood_fill(&mut pixels, SEED, SENTINEL);

        let opaque = pixels
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != SENTINEL)
            .map(|(x, y, p)| (x, y, *p))
            .collect();

        Self { pixels, opaque }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Full pixel grid, sentinel pixels included.
    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn opaque_pixels(&self) -> &[(u32, u32, Rgb<u8>)] {
        &self.opaque
    }

    /// Copy every opaque pixel into `frame` with the sprite's top-left at (ox, oy).
    /// Pixels falling outside the frame are skipped.
    pub fn blit(&self, frame: &mut RgbImage, ox: i32, oy: i32) {
        let (fw, fh) = (frame.width() as i64, frame.height() as i64);
        for &(x, y, color) in &self.opaque {
            let fx = ox as i64 + x as i64;
            let fy = oy as i64 + y as i64;
            if fx < 0 || fy < 0 || fx >= fw || fy >= fh {
                continue;
            }
            frame.put_pixel(fx as u32, fy as u32, color);
        }
    }
}

/// Replace the 4-connected region of pixels equal to the seed's color with `fill`.
/// Returns how many pixels changed. A seed outside the image, or one that
/// already has the fill color, changes nothing.
pub fn flood_fill(img: &mut RgbImage, seed: (u32, u32), fill: Rgb<u8>) -> usize {
    let (w, h) = img.dimensions();
    let (sx, sy) = seed;
    if sx >= w || sy >= h {
        return 0;
    }

    let target = *img.get_pixel(sx, sy);
    if target == fill {
        return 0;
    }

    // Pixels are recolored when pushed, so the stack never holds duplicates.
    let mut stack = vec![(sx, sy)];
    img.put_pixel(sx, sy, fill);
    let mut filled = 1;

    while let Some((x, y)) = stack.pop() {
        let neighbors = [
            (x.checked_sub(1), Some(y)),
            (Some(x + 1), Some(y)),
            (Some(x), y.checked_sub(1)),
            (Some(x), Some(y + 1)),
        ];
        for (nx, ny) in neighbors {
            let (Some(nx), Some(ny)) = (nx, ny) else { continue };
            if nx >= w || ny >= h || *img.get_pixel(nx, ny) != target {
                continue;
            }
            img.put_pixel(nx, ny, fill);
            filled += 1;
            stack.push((nx, ny));
        }
    }

    filled
}
