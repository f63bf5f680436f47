//! Integer line rasterization for monochrome graphic LCDs
//!
//! How does this work
//!    lcd = Lcd( DisplayKind, Controller( FrameBuffer | Ks0108b( DataBus + ControlLines ) ) )
//!    lcd.configure()      -- reset, display on, clear
//!    lcd.draw_line(p1, p2, PixelValue::On)
//!      line::draw_line()
//!        normalize()        -- p1.x <= p2.x
//!        draw_degenerate()  -- vertical / horizontal / single point
//!        LineKind::classify()
//!        rasterize()        -- 'CASE[1,2,3,4]'
//!          PixelSink::set_pixel()
//!
//! Only integer addition, subtraction and shifts are used by the rasterizer.
//!
//!     use glcd::{FrameBuffer,Point,PixelValue};
//!
//!     let mut fb = FrameBuffer::new(8, 8);
//!     glcd::draw_line(&mut fb, Point::new(0,0), Point::new(5,2), PixelValue::On);
//!     assert_eq!(fb.lit_count(), 6);
//!     assert!(fb.get(2,1).is_lit());

pub mod point;
pub mod color;
pub mod line;
pub mod buffer;
pub mod bus;
pub mod ks0108b;
pub mod display;
pub mod error;
pub mod snapshot;

pub use point::*;
pub use color::*;
pub use line::*;
pub use buffer::*;
pub use bus::*;
pub use ks0108b::*;
pub use display::*;
pub use error::*;

/// Pixel column or row on the display
pub type Coord = u16;

/// Set or clear a single pixel on a device
///
/// Coordinates are expected to lie within the device; no clipping is done
/// by callers in this crate.
pub trait PixelSink {
    /// Light or clear the pixel at (`x`,`y`)
    fn set_pixel(&mut self, x: Coord, y: Coord, value: PixelValue);
}

/// Display bring-up operations
pub trait Controller: PixelSink {
    /// Width and height of display memory in pixels
    fn size(&self) -> (Coord, Coord);
    /// Return the controller to its power-on state
    fn reset(&mut self);
    /// Turn the panel on
    fn display_on(&mut self);
    /// Clear every pixel of display memory
    fn clear(&mut self);
}

impl<S> PixelSink for &mut S where S: PixelSink + ?Sized {
    fn set_pixel(&mut self, x: Coord, y: Coord, value: PixelValue) {
        (**self).set_pixel(x, y, value);
    }
}

/// Records emitted points in order, the pixel value is dropped
impl PixelSink for Vec<Point> {
    fn set_pixel(&mut self, x: Coord, y: Coord, _value: PixelValue) {
        self.push(Point::new(x, y));
    }
}
