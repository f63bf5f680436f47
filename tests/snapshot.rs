
extern crate glcd;

use std::path::PathBuf;

use glcd::{DisplayKind,FrameBuffer,Lcd,PixelValue,Point};
use glcd::snapshot;

fn tmp(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("glcd-{}-{}", std::process::id(), name));
    dir
}

fn star() -> FrameBuffer {
    let mut lcd = Lcd::with_frame_buffer(DisplayKind::Small);
    lcd.configure();
    let c = Point::new(64, 32);
    for &(x,y) in [(0,0),(64,0),(127,0),(127,32),(127,63),(64,63),(0,63),(0,32),(100,10)].iter() {
        lcd.draw_line(c, Point::new(x,y), PixelValue::On);
    }
    lcd.into_inner()
}

#[test]
fn png_round_trip() {
    let _ = env_logger::builder().is_test(true).try_init();
    let fb = star();
    let f = tmp("star.png");
    fb.to_file(&f).unwrap();
    let back = snapshot::read_file(&f).unwrap();
    assert_eq!((back.width(), back.height()), (128, 64));
    assert_eq!(back.data(), fb.data());
    assert!(snapshot::img_diff(&f, &f).unwrap());
    std::fs::remove_file(&f).unwrap();
}

#[test]
fn diff_detects_changes() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut fb = star();
    let f1 = tmp("diff1.png");
    let f2 = tmp("diff2.png");
    let f3 = tmp("diff3.png");
    fb.to_file(&f1).unwrap();
    fb.set(1, 1, PixelValue::On);
    fb.to_file(&f2).unwrap();
    FrameBuffer::new(10, 10).to_file(&f3).unwrap();

    assert!(!snapshot::img_diff(&f1, &f2).unwrap());
    assert!(!snapshot::img_diff(&f1, &f3).unwrap());
    for f in [f1, f2, f3].iter() {
        std::fs::remove_file(f).unwrap();
    }
}

#[test]
fn missing_file_is_an_error() {
    assert!(snapshot::read_file(tmp("does-not-exist.png")).is_err());
}
