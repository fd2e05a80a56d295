// Core types shared by the sprite loader, the burger engine and the window.

use image::RgbImage;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// All-black buffer of the given size.
    pub fn blank(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Pack an RGB frame into 0x00RRGGBB pixels, row by row.
    pub fn from_rgb(frame: &RgbImage) -> Self {
        let (w, h) = frame.dimensions();
        let mut out = Vec::with_capacity((w as usize) * (h as usize));
        for pixel in frame.pixels() {
            let r = pixel[0] as u32;
            let g = pixel[1] as u32;
            let b = pixel[2] as u32;
            out.push((r << 16) | (g << 8) | b);
        }

        Self { width: w as usize, height: h as usize, pixels: out }
    }
}

/// Size of the last frame the engine rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// One bouncing burger: top-left corner plus per-frame step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BurgerInstance {
    pub x: i32,
    pub y: i32,
    pub x_inc: i32,
    pub y_inc: i32,
}

impl BurgerInstance {
    /// Step once, then reflect each axis that left `[0, max]`.
    ///
    /// The reflection is a single `2 * inc` correction, exact as long as the
    /// overshoot is no larger than one step.
    pub fn advance(&mut self, max_x: i32, max_y: i32) {
        self.x += self.x_inc;
        self.y += self.y_inc;

        if self.x < 0 || self.x > max_x {
            self.x_inc = -self.x_inc;
            self.x += 2 * self.x_inc;
        }
        if self.y < 0 || self.y > max_y {
            self.y_inc = -self.y_inc;
            self.y += 2 * self.y_inc;
        }
    }
}
