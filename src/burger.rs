// The burger engine: a handful of burgers bouncing around a black frame.
// Visual expectation: every `render_frame` call returns the next frame of the
// animation; asking for a different size starts a fresh set of burgers.

use crate::error::Error;
use crate::sprite::Sprite;
use crate::types::{BurgerInstance, CanvasSize};
use image::RgbImage;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// How many burgers a fresh canvas gets (upper bound exclusive).
pub const BURGER_COUNT: Range<usize> = 2..10;

/// Per-axis speed in pixels per frame (upper bound exclusive).
pub const BURGER_SPEED: Range<i32> = 1..3;

pub struct BurgerFeed<R = StdRng> {
    sprite: Sprite,
    canvas: Option<CanvasSize>, // None until the first frame
    burgers: Vec<BurgerInstance>,
    rng: R,
}

impl BurgerFeed<StdRng> {
    /// Embedded burger, randomness from the OS.
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_rng(Sprite::burger()?, StdRng::from_entropy()))
    }

    /// Embedded burger, reproducible burger placement.
    pub fn seeded(seed: u64) -> Result<Self, Error> {
        Ok(Self::with_rng(Sprite::burger()?, StdRng::seed_from_u64(seed)))
    }
}

impl<R: Rng> BurgerFeed<R> {
    pub fn with_rng(sprite: Sprite, rng: R) -> Self {
        Self { sprite, canvas: None, burgers: Vec::new(), rng }
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Burgers as they will be drawn on the next frame.
    pub fn burgers(&self) -> &[BurgerInstance] {
        &self.burgers
    }

    pub fn canvas(&self) -> Option<CanvasSize> {
        self.canvas
    }

    /// Render the next `width` x `height` frame and advance every burger.
    ///
    /// The first call, and any call with a new size, replaces the burger list
    /// with a random one that fits the new canvas.
    pub fn render_frame(&mut self, width: u32, height: u32) -> Result<RgbImage, Error> {
        let (max_x, max_y) = self.bounds(width, height)?;

        let canvas = CanvasSize::new(width, height);
        if self.canvas != Some(canvas) {
            self.respawn(canvas, max_x, max_y);
        }

        // Fresh black frame; later burgers overwrite earlier ones.
        let mut frame = RgbImage::new(width, height);
        for burger in &mut self.burgers {
            self.sprite.blit(&mut frame, burger.x, burger.y);
            burger.advance(max_x, max_y);
        }

        Ok(frame)
    }

    /// Largest top-left corner that keeps the sprite (plus a 1 px margin) on screen.
    fn bounds(&self, width: u32, height: u32) -> Result<(i32, i32), Error> {
        let (sw, sh) = (self.sprite.width(), self.sprite.height());
        // Placement draws from [0, max), so max must be at least 1.
        if width < sw + 2 || height < sh + 2 {
            return Err(Error::InvalidCanvas(format!(
                "{width}x{height} cannot fit a {sw}x{sh} sprite (need at least {}x{})",
                sw + 2,
                sh + 2
            )));
        }
        let max_x = i32::try_from(width - sw - 1)
            .map_err(|_| Error::InvalidCanvas(format!("width {width} is too large")))?;
        let max_y = i32::try_from(height - sh - 1)
            .map_err(|_| Error::InvalidCanvas(format!("height {height} is too large")))?;
        Ok((max_x, max_y))
    }

    fn respawn(&mut self, canvas: CanvasSize, max_x: i32, max_y: i32) {
        let count = self.rng.gen_range(BURGER_COUNT);
        self.burgers.clear();
        for _ in 0..count {
            let x = self.rng.gen_range(0..max_x);
            let y = self.rng.gen_range(0..max_y);
            let x_inc = self.rng.gen_range(BURGER_SPEED);
            let y_inc = self.rng.gen_range(BURGER_SPEED);
            self.burgers.push(BurgerInstance { x, y, x_inc, y_inc });
        }
        self.canvas = Some(canvas);
        debug!("canvas {}x{}: spawned {count} burgers", canvas.width, canvas.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    // 4x4 sprite: black surround (flooded away) and a 2x2 colored block at (2..4, 2..4).
    fn block_sprite() -> Sprite {
        let mut img = RgbImage::new(4, 4);
        img.put_pixel(2, 2, RED);
        img.put_pixel(3, 2, GREEN);
        img.put_pixel(2, 3, BLUE);
        img.put_pixel(3, 3, WHITE);
        Sprite::from_rgb(img)
    }

    fn block_feed(seed: u64) -> BurgerFeed {
        BurgerFeed::with_rng(block_sprite(), StdRng::seed_from_u64(seed))
    }

    fn assert_fits(feed: &BurgerFeed, width: i32, height: i32) {
        let (sw, sh) = (feed.sprite().width() as i32, feed.sprite().height() as i32);
        for b in feed.burgers() {
            assert!((0..=width - sw - 1).contains(&b.x), "{b:?}");
            assert!((0..=height - sh - 1).contains(&b.y), "{b:?}");
        }
    }

    #[test]
    fn frame_has_requested_size() {
        let mut feed = block_feed(1);
        let frame = feed.render_frame(31, 17).unwrap();
        assert_eq!(frame.dimensions(), (31, 17));
        assert_eq!(frame.as_raw().len(), 31 * 17 * 3);
    }

    #[test]
    fn first_frame_spawns_burgers_in_range() {
        for seed in 0..50 {
            let mut feed = block_feed(seed);
            assert!(feed.canvas().is_none());
            feed.render_frame(40, 30).unwrap();
            assert_eq!(feed.canvas(), Some(CanvasSize::new(40, 30)));
            assert!(BURGER_COUNT.contains(&feed.burgers().len()));
            for b in feed.burgers() {
                assert!(b.x_inc.abs() >= 1 && b.x_inc.abs() <= 2);
                assert!(b.y_inc.abs() >= 1 && b.y_inc.abs() <= 2);
            }
            assert_fits(&feed, 40, 30);
        }
    }

    #[test]
    fn same_size_keeps_burgers_and_moves_them() {
        let mut feed = block_feed(7);
        let first = feed.render_frame(60, 40).unwrap();
        let before = feed.burgers().to_vec();

        let second = feed.render_frame(60, 40).unwrap();
        assert_eq!(feed.burgers().len(), before.len());
        for (old, new) in before.iter().zip(feed.burgers()) {
            let mut expected = *old;
            expected.advance(60 - 4 - 1, 40 - 4 - 1);
            assert_eq!(*new, expected);
        }
        assert_ne!(first, second);
    }

    #[test]
    fn same_seed_gives_same_frames() {
        let mut a = block_feed(42);
        let mut b = block_feed(42);
        for _ in 0..5 {
            assert_eq!(a.render_frame(50, 20).unwrap(), b.render_frame(50, 20).unwrap());
        }
    }

    #[test]
    fn resize_replaces_burger_list() {
        let mut feed = block_feed(3);
        for i in 0..20 {
            let (w, h) = if i % 2 == 0 { (80, 25) } else { (12, 90) };
            feed.render_frame(w, h).unwrap();
            assert!(BURGER_COUNT.contains(&feed.burgers().len()));
            assert_eq!(feed.canvas(), Some(CanvasSize::new(w, h)));
            assert_fits(&feed, w as i32, h as i32);
        }
    }

    #[test]
    fn too_small_canvas_is_rejected() {
        let mut feed = block_feed(0);
        assert!(matches!(feed.render_frame(5, 20), Err(Error::InvalidCanvas(_))));
        assert!(matches!(feed.render_frame(20, 4), Err(Error::InvalidCanvas(_))));
        assert!(matches!(feed.render_frame(0, 0), Err(Error::InvalidCanvas(_))));
        assert!(feed.canvas().is_none());
        assert!(feed.render_frame(6, 6).is_ok());
    }

    #[test]
    fn sentinel_pixels_are_never_drawn() {
        let mut feed = block_feed(0);
        feed.canvas = Some(CanvasSize::new(20, 12));
        feed.burgers = vec![BurgerInstance { x: 0, y: 0, x_inc: 1, y_inc: 1 }];

        let frame = feed.render_frame(20, 12).unwrap();
        let lit: Vec<_> = frame
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != BLACK)
            .map(|(x, y, p)| (x, y, *p))
            .collect();
        assert_eq!(lit, vec![(2, 2, RED), (3, 2, GREEN), (2, 3, BLUE), (3, 3, WHITE)]);
    }

    #[test]
    fn later_burgers_draw_on_top() {
        let mut feed = block_feed(0);
        feed.canvas = Some(CanvasSize::new(20, 12));
        feed.burgers = vec![
            BurgerInstance { x: 0, y: 0, x_inc: 1, y_inc: 1 },
            BurgerInstance { x: 1, y: 0, x_inc: 1, y_inc: 1 },
        ];

        let frame = feed.render_frame(20, 12).unwrap();
        // Overlap column: second burger's left half wins.
        assert_eq!(*frame.get_pixel(3, 2), RED);
        assert_eq!(*frame.get_pixel(3, 3), BLUE);
        // Second burger's sentinel surround leaves the first one visible.
        assert_eq!(*frame.get_pixel(2, 2), RED);
        assert_eq!(*frame.get_pixel(2, 3), BLUE);
        assert_eq!(*frame.get_pixel(4, 2), GREEN);
        assert_eq!(*frame.get_pixel(4, 3), WHITE);
    }

    #[test]
    fn burgers_bounce_off_canvas_edge() {
        let mut feed = block_feed(0);
        feed.canvas = Some(CanvasSize::new(20, 12));
        feed.burgers = vec![BurgerInstance { x: 20 - 4 - 2, y: 3, x_inc: 2, y_inc: -1 }];

        feed.render_frame(20, 12).unwrap();
        let b = feed.burgers()[0];
        assert_eq!(b.x_inc, -2);
        assert!((0..=20 - 4 - 1).contains(&b.x));
        assert_eq!((b.y, b.y_inc), (2, -1));
    }
}
