use serde::{Deserialize, Serialize};

use crate::error::{DewarpError, DewarpResult};
use crate::projection::ProjectionKind;

/// Checks the input and output fields of view, both in degrees.
///
/// `fov` is the fisheye coverage, `0 < fov <= 180`; `pfov` is the perspective
/// camera's field of view, `0 < pfov < 180`.
pub fn validate_fov(fov: f64, pfov: f64) -> DewarpResult<()> {
    // negated comparisons so NaN is rejected too
    if !(fov > 0.0 && fov <= 180.0) {
        return Err(DewarpError::InvalidFov(fov));
    }
    if !(pfov > 0.0 && pfov < 180.0) {
        return Err(DewarpError::InvalidPfov(pfov));
    }
    Ok(())
}

/// Validated parameters of one dewarp operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParamsConfig")]
pub struct DewarpParams {
    fov: f64,
    pfov: f64,
    projection: ProjectionKind,
}

impl DewarpParams {
    pub fn new(fov: f64, pfov: f64, projection: ProjectionKind) -> DewarpResult<DewarpParams> {
        validate_fov(fov, pfov)?;
        Ok(DewarpParams {
            fov,
            pfov,
            projection,
        })
    }
    pub fn fov(&self) -> f64 {
        self.fov
    }
    pub fn pfov(&self) -> f64 {
        self.pfov
    }
    pub fn projection(&self) -> ProjectionKind {
        self.projection
    }
}

impl Default for DewarpParams {
    fn default() -> Self {
        Self {
            fov: 180.0,
            pfov: 120.0,
            projection: ProjectionKind::Linear,
        }
    }
}

/// Unchecked form of [`DewarpParams`] as it appears in a config file.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    pub fov: f64,
    pub pfov: f64,
    pub projection: ProjectionKind,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        let p = DewarpParams::default();
        Self {
            fov: p.fov,
            pfov: p.pfov,
            projection: p.projection,
        }
    }
}

impl TryFrom<ParamsConfig> for DewarpParams {
    type Error = DewarpError;

    fn try_from(config: ParamsConfig) -> Result<Self, Self::Error> {
        DewarpParams::new(config.fov, config.pfov, config.projection)
    }
}
