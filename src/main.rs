// What you SEE now:
// • A black window with a few burgers bouncing off its edges.
// • Resize the window: a fresh set of burgers is dealt for the new size.
// • SPACE pauses/resumes the burgers. ESC quits.
// • With --dump, no window opens: frames are rendered off-screen and the
//   last one is written to a PNG.

mod cli;
mod draw;

use burger_feed::{BurgerFeed, Error, FrameBuffer};
use clap::Parser;
use cli::Cli;
use draw::{Drawer, draw_text_5x7};
use log::{info, warn};
use std::path::Path;
use std::time::{Duration, Instant};

fn main() -> Result<(), Error> {
    env_logger::init();
    let cli = Cli::parse();

    let feed = match cli.seed {
        Some(seed) => BurgerFeed::seeded(seed)?,
        None => BurgerFeed::new()?,
    };

    match &cli.dump {
        Some(path) => dump_frames(feed, &cli, path),
        None => run_window(feed, &cli),
    }
}

/// Render `cli.frames` frames off-screen and save the last one.
fn dump_frames(mut feed: BurgerFeed, cli: &Cli, path: &Path) -> Result<(), Error> {
    let mut last = None;
    for _ in 0..cli.frames {
        last = Some(feed.render_frame(cli.width, cli.height)?);
    }
    // clap guarantees at least one frame
    if let Some(frame) = last {
        frame
            .save(path)
            .map_err(|e| Error::FrameSave(format!("{}: {e}", path.display())))?;
        info!(
            "wrote frame {} ({} burgers) to {}",
            cli.frames,
            feed.burgers().len(),
            path.display()
        );
    }
    Ok(())
}

fn run_window(mut feed: BurgerFeed, cli: &Cli) -> Result<(), Error> {
    /* --- Window setup ---
       Visual: window opens at the requested size, still black. */
    let mut drawer = Drawer::new(
        "Burger Feed",
        cli.width as usize,
        cli.height as usize,
        cli.fps as usize,
    )?;

    /* --- Last rendered frame ---
       Visual: kept around so a paused feed keeps showing the same burgers. */
    let mut frame = FrameBuffer::blank(cli.width as usize, cli.height as usize);
    let mut paused = false;

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        if drawer.space_pressed_once() {
            paused = !paused;
        }

        /* 1) Next burger frame at the window's current size.
           Visual: burgers step by one frame (or a new set appears after a resize). */
        let (w, h) = drawer.size();
        if !paused || frame.width != w || frame.height != h {
            frame = match feed.render_frame(w as u32, h as u32) {
                Ok(rgb) => FrameBuffer::from_rgb(&rgb),
                Err(Error::InvalidCanvas(msg)) => {
                    // Window dragged smaller than a burger: show black until it grows back.
                    warn!("{msg}");
                    FrameBuffer::blank(w, h)
                }
                Err(e) => return Err(e),
            };
        }

        /* 2) HUD on a copy so the paused frame stays clean. */
        let mut screen = frame.clone();
        let status = if paused { " | PAUSED" } else { "" };
        let hud = format!(
            "BURGERS: {} | {}X{} | {}{}",
            feed.burgers().len(),
            w,
            h,
            hud_fps_text,
            status
        );
        draw_text_5x7(&mut screen, 8, 8, &hud, 0x00_FF_FF_FF);

        /* 3) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 4) FPS counter (logged + HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            info!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
