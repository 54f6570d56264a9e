use thiserror::Error;

pub type DewarpResult<T> = Result<T, DewarpError>;

#[derive(Debug, Error)]
pub enum DewarpError {
    #[error("invalid FOV: {0}, must be in the range 0 < fov <= 180")]
    InvalidFov(f64),

    #[error("invalid PFOV: {0}, must be in the range 0 < pfov < 180")]
    InvalidPfov(f64),

    #[error(
        "unrecognized projection type: {0:?}, expected one of Linear, EqualArea, Orthographic, Stereographic"
    )]
    UnrecognizedProjection(String),

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("coordinate maps differ in shape: xs {xs:?}, ys {ys:?}")]
    MapShapeMismatch { xs: (u32, u32), ys: (u32, u32) },

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
