// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    SpriteDecode(String),  // The embedded sprite payload could not be decoded
    InvalidCanvas(String), // Requested frame is too small to place a sprite
    WindowInit(String),    // Creating the window failed
    WindowUpdate(String),  // Updating the window buffer failed
    FrameSave(String),     // Writing a frame to disk failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SpriteDecode(s) => write!(f, "Sprite decode error: {s}"),
            Error::InvalidCanvas(s) => write!(f, "Invalid canvas: {s}"),
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::FrameSave(s) => write!(f, "Frame save error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
