//! Rendering context for a concrete display

use log::{debug, warn};

use crate::line;
use crate::Coord;
use crate::Controller;
use crate::DisplayError;
use crate::FrameBuffer;
use crate::PixelSink;
use crate::PixelValue;
use crate::Point;

/// Supported panels
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum DisplayKind {
    /// 128x64 panel driven by a pair of KS0108B controllers
    Small,
    /// 160x128 panel driven by a T6963 controller
    Large,
}

impl Default for DisplayKind {
    fn default() -> DisplayKind {
        DisplayKind::Small
    }
}

impl DisplayKind {
    /// Width and height in pixels
    pub fn resolution(self) -> (Coord, Coord) {
        match self {
            DisplayKind::Small => (128, 64),
            DisplayKind::Large => (160, 128),
        }
    }
    /// Width in pixels
    pub fn width(self) -> Coord {
        self.resolution().0
    }
    /// Height in pixels
    pub fn height(self) -> Coord {
        self.resolution().1
    }
    /// Location (`x`,`y`) is on the panel
    pub fn contains(self, x: Coord, y: Coord) -> bool {
        let (w, h) = self.resolution();
        x < w && y < h
    }
}

/// Display with its controller
///
/// The kind of display travels with the controller that draws on it.
/// The controller's size must equal the kind's resolution, checked
/// drawing tests end points against it.
///
///     use glcd::{Lcd,DisplayKind,Point,PixelValue};
///
///     let mut lcd = Lcd::with_frame_buffer(DisplayKind::Small);
///     lcd.configure();
///     lcd.draw_line(Point::new(0,0), Point::new(127,63), PixelValue::On);
///     assert_eq!(lcd.controller().lit_count(), 128);
///
///     let err = lcd.try_draw_line(Point::new(0,0), Point::new(128,0), PixelValue::On);
///     assert!(err.is_err());
///
#[derive(Debug)]
pub struct Lcd<C> where C: Controller {
    kind: DisplayKind,
    controller: C,
}

impl Lcd<FrameBuffer> {
    /// Display backed by an in-memory frame buffer of the kind's size
    pub fn with_frame_buffer(kind: DisplayKind) -> Self {
        let (w, h) = kind.resolution();
        Self { kind, controller: FrameBuffer::new(w, h) }
    }
}

impl<C> Lcd<C> where C: Controller {
    /// Create a new display from its kind and controller
    ///
    /// The controller's memory must match the kind's resolution
    pub fn new(kind: DisplayKind, controller: C) -> Result<Self, DisplayError> {
        let (width, height) = kind.resolution();
        let (found_width, found_height) = controller.size();
        if (found_width, found_height) != (width, height) {
            warn!("LCD {:?} rejected {}x{} controller", kind, found_width, found_height);
            return Err(DisplayError::Resolution { width, height, found_width, found_height });
        }
        Ok(Self { kind, controller })
    }
    /// Kind of display
    pub fn kind(&self) -> DisplayKind {
        self.kind
    }
    /// Underlying controller
    pub fn controller(&self) -> &C {
        &self.controller
    }
    /// Underlying controller, mutable
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }
    /// Release the controller
    pub fn into_inner(self) -> C {
        self.controller
    }
    /// Bring up the display: reset, switch on, clear
    pub fn configure(&mut self) {
        debug!("LCD CONFIGURE {:?}", self.kind);
        self.controller.reset();
        self.controller.display_on();
        self.controller.clear();
    }
    /// Set pixel at (`x`,`y`), the location must be on the display
    pub fn draw_pixel(&mut self, x: Coord, y: Coord, value: PixelValue) {
        self.controller.set_pixel(x, y, value);
    }
    /// Draw a line from `p1` to `p2`, both must be on the display
    pub fn draw_line(&mut self, p1: Point, p2: Point, value: PixelValue) {
        line::draw_line(&mut self.controller, p1, p2, value);
    }
    fn check(&self, p: Point) -> Result<(), DisplayError> {
        let (width, height) = self.controller.size();
        if p.x < width && p.y < height {
            return Ok(());
        }
        warn!("LCD {:?} rejected pixel {:?}", self.kind, p);
        Err(DisplayError::OutOfBounds { x: p.x, y: p.y, width, height })
    }
    /// Set pixel at (`x`,`y`) if it lies on the display
    pub fn try_draw_pixel(&mut self, x: Coord, y: Coord, value: PixelValue) -> Result<(), DisplayError> {
        self.check(Point::new(x, y))?;
        self.draw_pixel(x, y, value);
        Ok(())
    }
    /// Draw a line if both end points lie on the display
    ///
    /// Nothing is drawn when either end point is outside
    pub fn try_draw_line(&mut self, p1: Point, p2: Point, value: PixelValue) -> Result<(), DisplayError> {
        // Every pixel of a line lies in the box spanned by its end points
        self.check(p1)?;
        self.check(p2)?;
        self.draw_line(p1, p2, value);
        Ok(())
    }
}

impl<C> PixelSink for Lcd<C> where C: Controller {
    fn set_pixel(&mut self, x: Coord, y: Coord, value: PixelValue) {
        self.draw_pixel(x, y, value);
    }
}
