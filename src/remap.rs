use image::{DynamicImage, ImageBuffer, Pixel};

use crate::error::{DewarpError, DewarpResult};
use crate::mapper::CoordinateMap;

/// Samples `src` at the fractional coordinates in `xs`/`ys` with bilinear
/// interpolation. Taps outside the source read as zero, so uncovered output
/// is black (transparent for images with alpha). The output has the map's size.
///
/// Luma8, LumaA8, Rgb8 and Rgba8 keep their layout, anything else is
/// converted to Rgba8 first.
pub fn remap(
    src: &DynamicImage,
    xs: &CoordinateMap,
    ys: &CoordinateMap,
) -> DewarpResult<DynamicImage> {
    if xs.shape() != ys.shape() {
        return Err(DewarpError::MapShapeMismatch {
            xs: xs.shape(),
            ys: ys.shape(),
        });
    }
    let out = match src {
        DynamicImage::ImageLuma8(img) => DynamicImage::ImageLuma8(remap_buffer(img, xs, ys)),
        DynamicImage::ImageLumaA8(img) => DynamicImage::ImageLumaA8(remap_buffer(img, xs, ys)),
        DynamicImage::ImageRgb8(img) => DynamicImage::ImageRgb8(remap_buffer(img, xs, ys)),
        DynamicImage::ImageRgba8(img) => DynamicImage::ImageRgba8(remap_buffer(img, xs, ys)),
        other => {
            log::debug!("remap converting {:?} to rgba8", other.color());
            DynamicImage::ImageRgba8(remap_buffer(&other.to_rgba8(), xs, ys))
        }
    };
    Ok(out)
}

fn remap_buffer<P>(
    src: &ImageBuffer<P, Vec<u8>>,
    xs: &CoordinateMap,
    ys: &CoordinateMap,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + Send + Sync,
{
    let stride = xs.stride();
    ImageBuffer::from_par_fn(xs.width, xs.height, |x, y| {
        let idx = y as usize * stride + x as usize;
        sample_bilinear(src, xs.data[idx], ys.data[idx])
    })
}

fn sample_bilinear<P>(img: &ImageBuffer<P, Vec<u8>>, x: f32, y: f32) -> P
where
    P: Pixel<Subpixel = u8>,
{
    let channels = P::CHANNEL_COUNT as usize;
    let mut acc = [0f32; 4];
    if x.is_finite() && y.is_finite() {
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let taps = [
            (0, 0, (1.0 - fx) * (1.0 - fy)),
            (1, 0, fx * (1.0 - fy)),
            (0, 1, (1.0 - fx) * fy),
            (1, 1, fx * fy),
        ];
        let (w, h) = (img.width() as i64, img.height() as i64);
        for (dx, dy, weight) in taps {
            if weight == 0.0 {
                continue;
            }
            let px = x0 as i64 + dx;
            let py = y0 as i64 + dy;
            if px < 0 || py < 0 || px >= w || py >= h {
                continue;
            }
            let p = img.get_pixel(px as u32, py as u32);
            for (a, c) in acc.iter_mut().zip(p.channels()) {
                *a += weight * *c as f32;
            }
        }
    }
    let mut out = [0u8; 4];
    for (o, a) in out.iter_mut().zip(acc) {
        *o = a.round().clamp(0.0, 255.0) as u8;
    }
    *P::from_slice(&out[..channels])
}
