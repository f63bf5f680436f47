
extern crate glcd;

use glcd::PixelValue;

#[test]
fn pixel_values() {
    assert_eq!(PixelValue::default(), PixelValue::Off);
    assert_eq!(PixelValue::from(true), PixelValue::On);
    assert_eq!(PixelValue::from(false), PixelValue::Off);
    assert!(bool::from(PixelValue::On));

    assert_eq!(!PixelValue::On, PixelValue::Off);
    assert_eq!(PixelValue::Off.invert(), PixelValue::On);

    assert_eq!(PixelValue::On.luma(), 0);
    assert_eq!(PixelValue::Off.luma(), 255);
    assert_eq!(PixelValue::from_luma(127), PixelValue::On);
    assert_eq!(PixelValue::from_luma(128), PixelValue::Off);
}
