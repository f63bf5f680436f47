//! Integer Line Rasterizer
//!
//! Bresenham style stepping using only addition, subtraction and shifts.
//! Segments are normalized so x never decreases, vertical and horizontal
//! segments are drawn directly, and everything else falls into one of four
//! octant cases, mirrored about the x-axis (sign of dy) and the diagonal
//! (|dy| against dx).
//!
//! Deltas and the decision variable are `i32`; with 16 bit coordinates the
//! largest intermediate is `2*dx + 2*|dy| <= 262_140`.

use log::trace;

use crate::Coord;
use crate::Point;
use crate::PixelSink;
use crate::PixelValue;

/// Order end points so that `p1.x <= p2.x`
///
/// Points are swapped as whole tuples
pub fn normalize(p1: Point, p2: Point) -> (Point, Point) {
    if p1.x > p2.x {
        (p2, p1)
    } else {
        (p1, p2)
    }
}

/// Signed deltas of a normalized segment and their doubled forms
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Deltas {
    /// p2.x - p1.x, never negative after normalizing
    pub dx: i32,
    /// p2.y - p1.y
    pub dy: i32,
    /// 2 * dx
    pub dx2: i32,
    /// 2 * dy, keeps the sign of dy
    pub dy2: i32,
    /// dy2 - dx2
    pub diff: i32,
    /// dy2 + dx2
    pub sum: i32,
}

impl Deltas {
    /// Compute deltas from `p1` to `p2`
    ///
    /// Differences are taken in `i32` before any sign test
    pub fn new(p1: Point, p2: Point) -> Self {
        let dx = i32::from(p2.x) - i32::from(p1.x);
        let dy = i32::from(p2.y) - i32::from(p1.y);
        let dx2 = dx << 1;
        let dy2 = dy << 1;
        Self { dx, dy, dx2, dy2, diff: dy2 - dx2, sum: dy2 + dx2 }
    }
}

/// Slope regime of a segment that is neither vertical nor horizontal
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Octant {
    /// Case 1: 0 <= m <= 1, x major, y increasing
    ShallowPositive,
    /// Case 2: 1 < m, y major increasing, mirrored about y = x
    SteepPositive,
    /// Case 3: -1 <= m < 0, x major, y decreasing, mirrored about the x-axis
    ShallowNegative,
    /// Case 4: m < -1, y major decreasing, mirrored about both
    SteepNegative,
}

impl Octant {
    /// Select the case from the sign of dy and |dy| against dx
    ///
    /// Lines at exactly 45 degrees are shallow
    pub fn classify(d: &Deltas) -> Self {
        if d.dy >= 0 {
            if d.dy <= d.dx {
                Octant::ShallowPositive
            } else {
                Octant::SteepPositive
            }
        } else if d.dx >= -d.dy {
            Octant::ShallowNegative
        } else {
            Octant::SteepNegative
        }
    }
    /// y is the major axis
    pub fn is_steep(self) -> bool {
        match self {
            Octant::SteepPositive | Octant::SteepNegative => true,
            Octant::ShallowPositive | Octant::ShallowNegative => false,
        }
    }
}

/// Shape of a normalized segment
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum LineKind {
    /// Single column, includes the single point case
    Vertical,
    /// Single row
    Horizontal,
    /// Anything else
    Sloped(Octant),
}

impl LineKind {
    /// Classify a segment; expects `p1.x <= p2.x`
    pub fn classify(p1: Point, p2: Point) -> Self {
        if p1.x == p2.x {
            LineKind::Vertical
        } else if p1.y == p2.y {
            LineKind::Horizontal
        } else {
            LineKind::Sloped(Octant::classify(&Deltas::new(p1, p2)))
        }
    }
}

/// Draw a line from `p1` to `p2` into `sink`
///
/// Every pixel is emitted exactly once, in increasing order along the
/// major axis. Both end points are drawn. The order of `p1` and `p2`
/// does not change the set of pixels drawn.
///
///     use glcd::{Point,PixelValue};
///
///     let mut pts : Vec<Point> = vec![];
///     glcd::draw_line(&mut pts, Point::new(0,0), Point::new(5,2), PixelValue::On);
///     let xy : Vec<_> = pts.iter().map(|p| (p.x,p.y)).collect();
///     assert_eq!(xy, vec![(0,0),(1,0),(2,1),(3,1),(4,2),(5,2)]);
///
pub fn draw_line<S>(sink: &mut S, p1: Point, p2: Point, value: PixelValue)
    where S: PixelSink + ?Sized
{
    let (p1, p2) = normalize(p1, p2);
    if draw_degenerate(sink, p1, p2, value) {
        return;
    }
    rasterize(sink, p1, p2, value);
}

/// Draw vertical and horizontal segments
///
/// Expects normalized end points. Returns `true` if the segment was
/// drawn, `false` if it is sloped and nothing was emitted.
pub fn draw_degenerate<S>(sink: &mut S, p1: Point, p2: Point, value: PixelValue) -> bool
    where S: PixelSink + ?Sized
{
    if p1.x == p2.x {
        let (y1, y2) = if p1.y > p2.y { (p2.y, p1.y) } else { (p1.y, p2.y) };
        trace!("LINE VERTICAL x {} y {} ..= {}", p1.x, y1, y2);
        for y in y1 ..= y2 {
            sink.set_pixel(p1.x, y, value);
        }
        return true;
    }
    if p1.y == p2.y {
        trace!("LINE HORIZONTAL y {} x {} ..= {}", p1.y, p1.x, p2.x);
        for x in p1.x ..= p2.x {
            sink.set_pixel(x, p1.y, value);
        }
        return true;
    }
    false
}

/// Step a sloped segment with the decision variable
///
/// Expects `p1.x < p2.x` and `p1.y != p2.y`. The decision variable F
/// is compared against 0 each step; F <= 0 leaves the minor axis alone.
pub fn rasterize<S>(sink: &mut S, p1: Point, p2: Point, value: PixelValue)
    where S: PixelSink + ?Sized
{
    debug_assert!(p1.x < p2.x, "rasterize expects p1.x < p2.x: {:?} {:?}", p1, p2);
    debug_assert!(p1.y != p2.y, "rasterize expects a sloped segment: {:?} {:?}", p1, p2);

    let d = Deltas::new(p1, p2);
    let octant = Octant::classify(&d);
    trace!("LINE {:?} {:?} -> {:?} dx {} dy {} major {}", octant, p1, p2, d.dx, d.dy,
           if octant.is_steep() { "y" } else { "x" });

    let (x2, y2) = (i32::from(p2.x), i32::from(p2.y));
    let mut x = i32::from(p1.x);
    let mut y = i32::from(p1.y);

    // Cursors stay within the bounding box of p1 and p2 while emitting
    let mut emit = |x: i32, y: i32| sink.set_pixel(x as Coord, y as Coord, value);

    match octant {
        Octant::ShallowPositive => {
            let mut f = d.dy2 - d.dx;
            while x <= x2 {
                emit(x, y);
                if f <= 0 {
                    f += d.dy2;
                } else {
                    y += 1;
                    f += d.diff;
                }
                x += 1;
            }
        }
        Octant::SteepPositive => {
            let mut f = d.dx2 - d.dy;
            while y <= y2 {
                emit(x, y);
                if f <= 0 {
                    f += d.dx2;
                } else {
                    x += 1;
                    f -= d.diff;
                }
                y += 1;
            }
        }
        Octant::ShallowNegative => {
            let mut f = -d.dy2 - d.dx;
            while x <= x2 {
                emit(x, y);
                if f <= 0 {
                    f -= d.dy2;
                } else {
                    y -= 1;
                    f -= d.sum;
                }
                x += 1;
            }
        }
        Octant::SteepNegative => {
            let mut f = d.dx2 + d.dy;
            while y >= y2 {
                emit(x, y);
                if f <= 0 {
                    f += d.dx2;
                } else {
                    x += 1;
                    f += d.sum;
                }
                y -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Point;
    use super::*;

    fn kind(x1: u16, y1: u16, x2: u16, y2: u16) -> LineKind {
        let (p1, p2) = normalize(Point::new(x1,y1), Point::new(x2,y2));
        LineKind::classify(p1, p2)
    }

    #[test]
    fn normalize_swaps_whole_points() {
        let (a, b) = normalize(Point::new(9,1), Point::new(2,7));
        assert_eq!(a, Point::new(2,7));
        assert_eq!(b, Point::new(9,1));
        let (a, b) = normalize(Point::new(2,7), Point::new(9,1));
        assert_eq!(a, Point::new(2,7));
        assert_eq!(b, Point::new(9,1));
        let (a, b) = normalize(Point::new(4,9), Point::new(4,0));
        assert_eq!(a, Point::new(4,9));
        assert_eq!(b, Point::new(4,0));
    }

    #[test]
    fn deltas_are_signed() {
        let d = Deltas::new(Point::new(0,5), Point::new(5,3));
        assert_eq!(d, Deltas { dx: 5, dy: -2, dx2: 10, dy2: -4, diff: -14, sum: 6 });
        let d = Deltas::new(Point::new(0,0), Point::new(u16::MAX, u16::MAX));
        assert_eq!(d.dx2, 131_070);
        assert_eq!(d.sum, 262_140);
    }

    #[test]
    fn classify_cases() {
        assert_eq!(kind(3,3,3,3), LineKind::Vertical);
        assert_eq!(kind(7,2,7,0), LineKind::Vertical);
        assert_eq!(kind(4,5,1,5), LineKind::Horizontal);

        assert_eq!(kind(0,0,5,2), LineKind::Sloped(Octant::ShallowPositive));
        assert_eq!(kind(0,0,5,5), LineKind::Sloped(Octant::ShallowPositive));
        assert_eq!(kind(0,0,2,5), LineKind::Sloped(Octant::SteepPositive));
        assert_eq!(kind(0,5,5,3), LineKind::Sloped(Octant::ShallowNegative));
        assert_eq!(kind(0,5,5,0), LineKind::Sloped(Octant::ShallowNegative));
        assert_eq!(kind(0,5,2,0), LineKind::Sloped(Octant::SteepNegative));

        // Reversed input lands in the same case
        assert_eq!(kind(5,2,0,0), LineKind::Sloped(Octant::ShallowPositive));
        assert_eq!(kind(2,0,0,5), LineKind::Sloped(Octant::SteepNegative));
    }

    #[test]
    fn steep_octants() {
        assert!(Octant::SteepPositive.is_steep());
        assert!(Octant::SteepNegative.is_steep());
        assert!(!Octant::ShallowPositive.is_steep());
        assert!(!Octant::ShallowNegative.is_steep());
    }

    #[test]
    fn degenerate_skips_sloped() {
        let mut pts : Vec<Point> = vec![];
        let drawn = draw_degenerate(&mut pts, Point::new(0,0), Point::new(1,1), PixelValue::On);
        assert!(!drawn);
        assert!(pts.is_empty());
    }
}
