//! Monochrome frame buffer

use std::fmt;
use std::path::Path;

use crate::Coord;
use crate::Controller;
use crate::DisplayError;
use crate::PixelSink;
use crate::PixelValue;
use crate::Point;
use crate::snapshot;

/// Number of rows stored in one byte of display memory
pub const PAGE_HEIGHT: usize = 8;

/// Frame Buffer
///
/// Display memory is stored the way KS0108B style controllers hold it:
/// the screen is split into pages of 8 rows, byte `page * width + x`
/// holds column `x` of that page and bit `y % 8` is row `y`.
///
///     use glcd::{FrameBuffer,PixelValue};
///
///     let mut fb = FrameBuffer::new(4, 10);
///     assert_eq!(fb.data().len(), 8);
///     fb.set(1, 9, PixelValue::On);
///     assert_eq!(fb.data()[4 + 1], 0b0000_0010);
///
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct FrameBuffer {
    data: Vec<u8>,
    width: Coord,
    height: Coord,
    on: bool,
}

impl FrameBuffer {
    /// Create a new cleared buffer of width * height pixels
    pub fn new(width: Coord, height: Coord) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create frame buffer with 0 width or height");
        }
        let pages = (height as usize + PAGE_HEIGHT - 1) / PAGE_HEIGHT;
        FrameBuffer {
            data: vec![0u8; width as usize * pages],
            width, height, on: false,
        }
    }
    /// Width in pixels
    pub fn width(&self) -> Coord {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> Coord {
        self.height
    }
    /// Raw display memory, one byte per column per page
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    /// Panel has been switched on
    pub fn is_on(&self) -> bool {
        self.on
    }
    fn offset(&self, x: Coord, y: Coord) -> (usize, u8) {
        assert!(x < self.width, "request {} >= {} width :: frame buffer", x, self.width);
        assert!(y < self.height, "request {} >= {} height :: frame buffer", y, self.height);
        let page = y as usize / PAGE_HEIGHT;
        let bit = y as usize % PAGE_HEIGHT;
        (page * self.width as usize + x as usize, 1 << bit)
    }
    /// State of pixel at (`x`,`y`)
    ///
    /// Panics if the location is outside the buffer
    pub fn get(&self, x: Coord, y: Coord) -> PixelValue {
        let (i, mask) = self.offset(x, y);
        PixelValue::from(self.data[i] & mask != 0)
    }
    /// Set pixel at (`x`,`y`) to `value`
    ///
    /// Panics if the location is outside the buffer
    pub fn set(&mut self, x: Coord, y: Coord, value: PixelValue) {
        let (i, mask) = self.offset(x, y);
        match value {
            PixelValue::On  => self.data[i] |= mask,
            PixelValue::Off => self.data[i] &= !mask,
        }
    }
    /// Set every pixel to `value`
    pub fn fill(&mut self, value: PixelValue) {
        let v = if value.is_lit() { 0xFF } else { 0x00 };
        self.data.iter_mut().for_each(|b| *b = v);
    }
    /// Clear all pixels
    pub fn clear(&mut self) {
        self.fill(PixelValue::Off);
    }
    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.lit_points().len()
    }
    /// Lit pixels in row major order
    pub fn lit_points(&self) -> Vec<Point> {
        let mut out = vec![];
        for y in 0 .. self.height {
            for x in 0 .. self.width {
                if self.get(x, y).is_lit() {
                    out.push(Point::new(x, y));
                }
            }
        }
        out
    }
    /// Gray levels in row major order, one byte per pixel
    pub fn to_luma(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0 .. self.height {
            for x in 0 .. self.width {
                out.push(self.get(x, y).luma());
            }
        }
        out
    }
    /// Write the buffer to an image file
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), DisplayError> {
        snapshot::write_file(self, filename)
    }
}

impl PixelSink for FrameBuffer {
    fn set_pixel(&mut self, x: Coord, y: Coord, value: PixelValue) {
        self.set(x, y, value);
    }
}

impl Controller for FrameBuffer {
    fn size(&self) -> (Coord, Coord) {
        (self.width, self.height)
    }
    fn reset(&mut self) {
        self.clear();
        self.on = false;
    }
    fn display_on(&mut self) {
        self.on = true;
    }
    fn clear(&mut self) {
        FrameBuffer::clear(self);
    }
}

/// One text row per pixel row, `#` is lit and `.` is unlit
impl fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0 .. self.height {
            for x in 0 .. self.width {
                let c = if self.get(x, y).is_lit() { '#' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
