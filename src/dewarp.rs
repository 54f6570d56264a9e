use image::DynamicImage;

use crate::error::DewarpResult;
use crate::mapper::init_dewarp_map;
use crate::params::DewarpParams;
use crate::projection::ProjectionKind;
use crate::region::crop_square;
use crate::remap::remap;

/// Converts a fisheye image into a perspective image.
///
/// * `fov` - field of view of the fisheye image in degrees, `0 < fov <= 180`.
///   180 is a full hemisphere.
/// * `pfov` - field of view of the output perspective image in degrees,
///   `0 < pfov < 180`. It applies across the diagonal of the centered square.
/// * `projection` - lens model of the fisheye image.
///
/// The result is square with side `min(width, height)` of the input.
pub fn dewarp(
    img: &DynamicImage,
    fov: f64,
    pfov: f64,
    projection: ProjectionKind,
) -> DewarpResult<DynamicImage> {
    let params = DewarpParams::new(fov, pfov, projection)?;
    dewarp_with_params(img, &params)
}

pub fn dewarp_with_params(img: &DynamicImage, params: &DewarpParams) -> DewarpResult<DynamicImage> {
    let (region, roi) = crop_square(img)?;
    log::debug!(
        "dewarp {} fov={} pfov={} region={}x{}+{}+{}",
        params.projection(),
        params.fov(),
        params.pfov(),
        region.side,
        region.side,
        region.x0,
        region.y0
    );
    let maps = init_dewarp_map(roi.width(), roi.height(), params);
    remap(&roi, &maps.xs, &maps.ys)
}
