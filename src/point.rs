//! Points and Segments

use crate::Coord;
use crate::PixelSink;
use crate::PixelValue;
use crate::line;

/// Pixel location
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub struct Point {
    /// Column
    pub x: Coord,
    /// Row
    pub y: Coord,
}

impl Point {
    /// Create a new Point
    pub const fn new(x: Coord, y: Coord) -> Self {
        Point { x, y }
    }
}

impl From<(Coord,Coord)> for Point {
    fn from((x,y): (Coord,Coord)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (Coord,Coord) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Line segment between two end points
///
/// The order of the end points does not change which pixels are drawn
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Segment {
    /// First end point
    pub p1: Point,
    /// Second end point
    pub p2: Point,
}

impl Segment {
    /// Create a new Segment
    pub fn new(p1: Point, p2: Point) -> Self {
        Segment { p1, p2 }
    }
    /// Segment with end points ordered so that `p1.x <= p2.x`
    pub fn normalized(&self) -> Segment {
        let (p1, p2) = line::normalize(self.p1, self.p2);
        Segment { p1, p2 }
    }
    /// Both end points share a column
    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }
    /// Both end points share a row
    pub fn is_horizontal(&self) -> bool {
        self.p1.y == self.p2.y
    }
    /// Both end points are the same pixel
    pub fn is_point(&self) -> bool {
        self.p1 == self.p2
    }
    /// Number of pixels the segment covers, `max(|dx|,|dy|) + 1`
    pub fn pixel_count(&self) -> usize {
        let dx = (i32::from(self.p2.x) - i32::from(self.p1.x)).abs();
        let dy = (i32::from(self.p2.y) - i32::from(self.p1.y)).abs();
        dx.max(dy) as usize + 1
    }
    /// Draw the segment with `value` into `sink`
    pub fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, value: PixelValue) {
        line::draw_line(sink, self.p1, self.p2, value);
    }
    /// Rasterized pixels in drawing order
    ///
    ///     use glcd::{Point,Segment};
    ///
    ///     let s = Segment::new(Point::new(7,2), Point::new(7,0));
    ///     assert_eq!(s.points(), vec![Point::new(7,0), Point::new(7,1), Point::new(7,2)]);
    ///
    pub fn points(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.pixel_count());
        self.draw(&mut out, PixelValue::On);
        out
    }
}
