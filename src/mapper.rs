use std::f64::consts::PI;

use rayon::prelude::*;

use crate::grid::PixelGrid;
use crate::params::DewarpParams;
use crate::projection::ProjectionKind;

/// Row-major `f32` map with one entry per destination pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl CoordinateMap {
    pub fn new(width: u32, height: u32) -> CoordinateMap {
        CoordinateMap {
            width,
            height,
            data: vec![0.0; width as usize * height as usize],
        }
    }
    pub fn shape(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    /// Elements per row.
    pub fn stride(&self) -> usize {
        self.width as usize
    }
    pub fn get(&self, col: u32, row: u32) -> f32 {
        self.data[row as usize * self.stride() + col as usize]
    }
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Source x and y maps for a dewarp.
#[derive(Debug, Clone, PartialEq)]
pub struct DewarpMaps {
    pub xs: CoordinateMap,
    pub ys: CoordinateMap,
}

/// Per-operation constants of the radial transform.
#[derive(Debug, Clone, Copy)]
pub struct RadialMapper {
    pub projection: ProjectionKind,
    /// Inverse focal length of the output perspective camera.
    pub ofocinv: f64,
    /// Focal length of the input fisheye lens model.
    pub ifoc: f64,
    pub xcenter: f64,
    pub ycenter: f64,
}

impl RadialMapper {
    pub fn new(grid: &PixelGrid, params: &DewarpParams) -> RadialMapper {
        let diagonal = grid.diagonal();
        // the output is always rectilinear, whatever the input lens model
        let ofoc = diagonal / (2.0 * (params.pfov() * PI / 360.0).tan());
        let (xcenter, ycenter) = grid.center();
        let projection = params.projection();
        RadialMapper {
            projection,
            ofocinv: 1.0 / ofoc,
            ifoc: projection.scale_constant(diagonal, params.fov()),
            xcenter,
            ycenter,
        }
    }

    /// Source coordinate for destination pixel `(col, row)`.
    ///
    /// The exact center pixel maps to `(0, 0)`, not to the center.
    #[inline]
    pub fn map_point(&self, col: u32, row: u32) -> (f64, f64) {
        let xd = col as f64 - self.xcenter;
        let yd = row as f64 - self.ycenter;
        let rd = xd.hypot(yd);
        if rd == 0.0 {
            return (0.0, 0.0);
        }
        let phiang = (self.ofocinv * rd).atan();
        let rr = self.projection.radius(self.ifoc, phiang);
        let scale = rr / rd;
        (scale * xd + self.xcenter, scale * yd + self.ycenter)
    }
}

/// Computes the source coordinate maps for a `width` x `height` region.
///
/// Rows are filled in parallel; each task writes only its own row.
pub fn init_dewarp_map(width: u32, height: u32, params: &DewarpParams) -> DewarpMaps {
    let grid = PixelGrid::new(width, height);
    let mapper = RadialMapper::new(&grid, params);
    log::debug!(
        "{} map {}x{}: ofocinv={:.6} ifoc={:.6}",
        mapper.projection,
        width,
        height,
        mapper.ofocinv,
        mapper.ifoc
    );
    let mut xs = CoordinateMap::new(width, height);
    let mut ys = CoordinateMap::new(width, height);
    if grid.is_empty() {
        return DewarpMaps { xs, ys };
    }
    let stride = xs.stride();
    xs.data
        .par_chunks_mut(stride)
        .zip(ys.data.par_chunks_mut(stride))
        .enumerate()
        .for_each(|(row, (xrow, yrow))| {
            for (col, (x, y)) in xrow.iter_mut().zip(yrow.iter_mut()).enumerate() {
                let (sx, sy) = mapper.map_point(col as u32, row as u32);
                *x = sx as f32;
                *y = sy as f32;
            }
        });
    DewarpMaps { xs, ys }
}
