//! Reading and writing of frame buffer images
//!
//! Buffers are stored as 8 bit grayscale, lit pixels black on white.
//! The format follows the file extension (`.png`, `.pgm`, `.pbm`).

use std::convert::TryFrom;
use std::path::Path;

use log::debug;

use crate::Coord;
use crate::DisplayError;
use crate::FrameBuffer;
use crate::PixelValue;

/// Write `fb` to `filename`
pub fn write_file<P: AsRef<Path>>(fb: &FrameBuffer, filename: P) -> Result<(), DisplayError> {
    debug!("SNAPSHOT WRITE {} {}x{}", filename.as_ref().display(), fb.width(), fb.height());
    image::save_buffer(filename, &fb.to_luma(),
                       u32::from(fb.width()), u32::from(fb.height()),
                       image::Gray(8))?;
    Ok(())
}

/// Read `filename` into a new frame buffer
///
/// Gray levels below 128 are lit
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<FrameBuffer, DisplayError> {
    let img = image::open(filename)?.to_luma();
    let (w, h) = img.dimensions();
    let size = || DisplayError::Size { width: w, height: h };
    let width = Coord::try_from(w).map_err(|_| size())?;
    let height = Coord::try_from(h).map_err(|_| size())?;
    if width == 0 || height == 0 {
        return Err(size());
    }
    let mut fb = FrameBuffer::new(width, height);
    for (x, y, px) in img.enumerate_pixels() {
        fb.set(x as Coord, y as Coord, PixelValue::from_luma(px.data[0]));
    }
    Ok(fb)
}

/// Compare two image files pixel by pixel
///
/// Differences are logged; returns `true` if the images match
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, DisplayError> {
    let a = read_file(f1)?;
    let b = read_file(f2)?;
    if a.width() != b.width() || a.height() != b.height() {
        debug!("SNAPSHOT DIFF size {}x{} != {}x{}",
               a.width(), a.height(), b.width(), b.height());
        return Ok(false);
    }
    let mut flag = true;
    for y in 0 .. a.height() {
        for x in 0 .. a.width() {
            let (v1, v2) = (a.get(x, y), b.get(x, y));
            if v1 != v2 {
                debug!("SNAPSHOT DIFF [{},{}]: {:?} {:?}", x, y, v1, v2);
                flag = false;
            }
        }
    }
    Ok(flag)
}
