// cli.rs - Command-line configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "burger-feed")]
#[command(about = "Bouncing burger test feed", long_about = None)]
pub struct Cli {
    /// Initial frame width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Initial frame height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Target frames per second for the window
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Seed for burger placement; omit for a different run every time
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render without a window and save the last frame as PNG here
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Frames to render before saving (with --dump)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,
}
