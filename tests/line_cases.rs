
extern crate glcd;

use glcd::{Point,PixelValue,Segment};

fn line(x1: u16, y1: u16, x2: u16, y2: u16) -> Vec<(u16,u16)> {
    let _ = env_logger::builder().is_test(true).try_init();
    Segment::new(Point::new(x1,y1), Point::new(x2,y2))
        .points()
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect()
}

#[test]
fn single_point() {
    assert_eq!(line(3,3,3,3), vec![(3,3)]);
}

#[test]
fn horizontal() {
    assert_eq!(line(1,5,4,5), vec![(1,5),(2,5),(3,5),(4,5)]);
    // Reversed input is normalized to run left to right
    assert_eq!(line(4,5,1,5), vec![(1,5),(2,5),(3,5),(4,5)]);
}

#[test]
fn vertical() {
    assert_eq!(line(7,2,7,0), vec![(7,0),(7,1),(7,2)]);
    assert_eq!(line(7,0,7,2), vec![(7,0),(7,1),(7,2)]);
}

#[test]
fn shallow_positive() {
    assert_eq!(line(0,0,5,2), vec![(0,0),(1,0),(2,1),(3,1),(4,2),(5,2)]);
}

#[test]
fn steep_positive() {
    assert_eq!(line(0,0,2,5), vec![(0,0),(0,1),(1,2),(1,3),(2,4),(2,5)]);
}

#[test]
fn shallow_negative() {
    assert_eq!(line(0,5,5,3), vec![(0,5),(1,5),(2,4),(3,4),(4,3),(5,3)]);
}

#[test]
fn steep_negative() {
    assert_eq!(line(0,5,2,0), vec![(0,5),(0,4),(1,3),(1,2),(2,1),(2,0)]);
}

#[test]
fn diagonals() {
    assert_eq!(line(0,0,3,3), vec![(0,0),(1,1),(2,2),(3,3)]);
    assert_eq!(line(0,3,3,0), vec![(0,3),(1,2),(2,1),(3,0)]);
}

#[test]
fn ties_do_not_step() {
    // dx = 2, dy = 1 starts with F = 0
    assert_eq!(line(0,0,2,1), vec![(0,0),(1,0),(2,1)]);
    assert_eq!(line(0,1,2,0), vec![(0,1),(1,1),(2,0)]);
    assert_eq!(line(0,0,1,2), vec![(0,0),(0,1),(1,2)]);
    assert_eq!(line(0,2,1,0), vec![(0,2),(0,1),(1,0)]);
}

#[test]
fn reversed_steep_negative_runs_from_the_left() {
    // (2,0) -> (0,5) is normalized to start at (0,5)
    assert_eq!(line(2,0,0,5), vec![(0,5),(0,4),(1,3),(1,2),(2,1),(2,0)]);
}

#[test]
fn pixel_value_is_passed_through() {
    struct Record(Vec<PixelValue>);
    impl glcd::PixelSink for Record {
        fn set_pixel(&mut self, _x: u16, _y: u16, value: PixelValue) {
            self.0.push(value);
        }
    }
    let mut r = Record(vec![]);
    glcd::draw_line(&mut r, Point::new(0,0), Point::new(4,1), PixelValue::Off);
    assert_eq!(r.0, vec![PixelValue::Off; 5]);

    let mut r = Record(vec![]);
    glcd::draw_line(&mut r, Point::new(9,9), Point::new(9,3), PixelValue::On);
    assert_eq!(r.0, vec![PixelValue::On; 7]);
}

#[test]
fn segment_helpers() {
    let s = Segment::new(Point::new(9,1), Point::new(2,7));
    assert_eq!(s.normalized(), Segment::new(Point::new(2,7), Point::new(9,1)));
    assert_eq!(s.pixel_count(), 8);
    assert!(!s.is_vertical());
    assert!(!s.is_horizontal());
    assert!(!s.is_point());
    assert!(Segment::new(Point::new(3,3), Point::new(3,3)).is_point());
    assert_eq!(Segment::new(Point::new(3,3), Point::new(3,3)).pixel_count(), 1);
}
