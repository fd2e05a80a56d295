// Synthetic image feed: burgers bouncing around a black frame.
//
// `BurgerFeed::render_frame(width, height)` is the whole runtime surface; what
// happens to the frame afterwards (window, encoder, network) is up to the caller.

pub mod burger;
pub mod error;
pub mod sprite;
pub mod types;

pub use burger::BurgerFeed;
pub use error::Error;
pub use sprite::Sprite;
pub use types::{BurgerInstance, CanvasSize, FrameBuffer};
