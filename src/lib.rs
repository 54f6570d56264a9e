pub mod dewarp;
pub mod error;
pub mod grid;
pub mod io;
pub mod mapper;
pub mod params;
pub mod projection;
pub mod region;
pub mod remap;

pub use dewarp::{dewarp, dewarp_with_params};
pub use error::{DewarpError, DewarpResult};
pub use mapper::{CoordinateMap, DewarpMaps, RadialMapper, init_dewarp_map};
pub use params::DewarpParams;
pub use projection::ProjectionKind;
