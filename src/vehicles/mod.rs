pub mod aircraft;
pub mod config;

pub use aircraft::{Aircraft, ControlInputs, ControlSurfaces};
pub use config::{AircraftConfig, AirfoilKind, MassElementConfig, SurfaceConfig};
