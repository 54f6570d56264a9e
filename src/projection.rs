use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DewarpError;

/// Idealized fisheye lens model, relating the incidence angle of a ray to
/// its radial distance from the image center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectionKind {
    /// Equidistant, `r = f * theta`.
    #[default]
    Linear,
    /// Equisolid angle, `r = f * sin(theta / 2)`.
    EqualArea,
    /// `r = f * sin(theta)`.
    Orthographic,
    /// `r = f * tan(theta / 2)`.
    Stereographic,
}

impl ProjectionKind {
    pub const ALL: [ProjectionKind; 4] = [
        ProjectionKind::Linear,
        ProjectionKind::EqualArea,
        ProjectionKind::Orthographic,
        ProjectionKind::Stereographic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProjectionKind::Linear => "Linear",
            ProjectionKind::EqualArea => "EqualArea",
            ProjectionKind::Orthographic => "Orthographic",
            ProjectionKind::Stereographic => "Stereographic",
        }
    }

    /// Focal length that maps the input field of view (degrees) onto `diagonal` pixels.
    pub fn scale_constant(&self, diagonal: f64, fov: f64) -> f64 {
        match self {
            ProjectionKind::Linear => diagonal * 180.0 / (fov * PI),
            ProjectionKind::EqualArea => diagonal / (2.0 * (fov * PI / 720.0).sin()),
            ProjectionKind::Orthographic => diagonal / (2.0 * (fov * PI / 360.0).sin()),
            ProjectionKind::Stereographic => diagonal / (2.0 * (fov * PI / 720.0).tan()),
        }
    }

    /// Image radius of a ray at incidence angle `phi` (radians) for focal length `ifoc`.
    #[inline]
    pub fn radius(&self, ifoc: f64, phi: f64) -> f64 {
        let f = match self {
            ProjectionKind::Linear => phi,
            ProjectionKind::EqualArea => (phi / 2.0).sin(),
            ProjectionKind::Orthographic => phi.sin(),
            ProjectionKind::Stereographic => (phi / 2.0).tan(),
        };
        ifoc * f
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectionKind {
    type Err = DewarpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "linear" => Ok(ProjectionKind::Linear),
            "equalarea" => Ok(ProjectionKind::EqualArea),
            "orthographic" => Ok(ProjectionKind::Orthographic),
            "stereographic" => Ok(ProjectionKind::Stereographic),
            _ => Err(DewarpError::UnrecognizedProjection(s.to_string())),
        }
    }
}
