//! Monochrome pixel values

use std::ops::Not;

/// State of a single pixel on a monochrome panel
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum PixelValue {
    /// Pixel is cleared
    Off,
    /// Pixel is lit
    On,
}

impl Default for PixelValue {
    fn default() -> PixelValue {
        PixelValue::Off
    }
}

impl PixelValue {
    /// Pixel is lit
    pub fn is_lit(self) -> bool {
        self == PixelValue::On
    }
    /// Opposite state
    pub fn invert(self) -> Self {
        match self {
            PixelValue::On  => PixelValue::Off,
            PixelValue::Off => PixelValue::On,
        }
    }
    /// Gray level of the pixel as seen on the panel
    ///
    /// Lit pixels are dark (0) on a light (255) background
    pub fn luma(self) -> u8 {
        match self {
            PixelValue::On  => 0,
            PixelValue::Off => 255,
        }
    }
    /// Pixel state from a gray level, values below 128 are lit
    pub fn from_luma(v: u8) -> Self {
        if v < 128 { PixelValue::On } else { PixelValue::Off }
    }
}

impl From<bool> for PixelValue {
    fn from(lit: bool) -> Self {
        if lit { PixelValue::On } else { PixelValue::Off }
    }
}

impl From<PixelValue> for bool {
    fn from(v: PixelValue) -> bool {
        v.is_lit()
    }
}

impl Not for PixelValue {
    type Output = PixelValue;
    fn not(self) -> PixelValue {
        self.invert()
    }
}
