use image::{DynamicImage, GenericImageView};

use crate::error::{DewarpError, DewarpResult};

/// Largest square centered in the source image, treated as the fisheye frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareRegion {
    pub x0: u32,
    pub y0: u32,
    pub side: u32,
}

impl SquareRegion {
    /// Centered square of side `min(width, height)`. Offsets use floor division,
    /// so an odd size difference leaves the extra pixel on the right/bottom.
    pub fn centered(width: u32, height: u32) -> DewarpResult<SquareRegion> {
        if width == 0 || height == 0 {
            return Err(DewarpError::EmptyImage { width, height });
        }
        let side = width.min(height);
        Ok(SquareRegion {
            x0: width / 2 - side / 2,
            y0: height / 2 - side / 2,
            side,
        })
    }

    pub fn xf(&self) -> u32 {
        self.x0 + self.side
    }

    pub fn yf(&self) -> u32 {
        self.y0 + self.side
    }

    pub fn crop(&self, img: &DynamicImage) -> DynamicImage {
        img.crop_imm(self.x0, self.y0, self.side, self.side)
    }
}

/// Crops `img` to its centered square region.
pub fn crop_square(img: &DynamicImage) -> DewarpResult<(SquareRegion, DynamicImage)> {
    let (w, h) = img.dimensions();
    let region = SquareRegion::centered(w, h)?;
    log::trace!(
        "square region [{}, {}) x [{}, {}) of {}x{}",
        region.x0,
        region.xf(),
        region.y0,
        region.yf(),
        w,
        h
    );
    Ok((region, region.crop(img)))
}
