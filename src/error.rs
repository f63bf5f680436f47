//! Errors

use thiserror::Error;

use crate::Coord;

/// Errors raised outside the rasterizer itself
#[derive(Error, Debug)]
pub enum DisplayError {
    /// Pixel lies outside the display
    #[error("pixel ({x},{y}) outside {width}x{height} display")]
    OutOfBounds { x: Coord, y: Coord, width: Coord, height: Coord },
    /// Controller memory does not match the display resolution
    #[error("controller is {found_width}x{found_height}, display needs {width}x{height}")]
    Resolution { width: Coord, height: Coord, found_width: Coord, found_height: Coord },
    /// Image is too large for display coordinates
    #[error("image of {width}x{height} pixels does not fit display coordinates")]
    Size { width: u32, height: u32 },
    /// Image could not be encoded or decoded
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    /// Image file could not be read or written
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
