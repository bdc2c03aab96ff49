pub mod aerodynamics;
pub mod physics;
pub mod propulsion;
pub mod utils;
pub mod vehicles;

pub use aerodynamics::{Airfoil, AirfoilSample, Wing};
pub use physics::{RigidBody, RigidBodyParams};
pub use propulsion::Engine;
pub use utils::errors::SimError;
pub use vehicles::{Aircraft, AircraftConfig, ControlInputs, ControlSurfaces};
