pub mod airfoil;
pub mod data;
pub mod wing;

pub use airfoil::{Airfoil, AirfoilSample};
pub use wing::Wing;
