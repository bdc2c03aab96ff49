use std::fs;
use std::path::Path;
use std::sync::Arc;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::aerodynamics::{Airfoil, Wing};
use crate::physics::inertia;
use crate::utils::constants::up;
use crate::utils::errors::SimError;

use super::aircraft::{Aircraft, ControlSurfaces};

/// Named airfoil polars compiled into the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirfoilKind {
    Naca0012,
    Naca2412,
}

/// One aerodynamic surface of the airframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Mounting position in body space (m).
    pub position: [f64; 3],
    /// Span along the hinge line (m).
    pub wingspan: f64,
    /// Chord (m).
    pub chord: f64,
    pub airfoil: AirfoilKind,
    /// Surface normal in body space. Defaults to straight up; vertical
    /// surfaces point theirs along +z.
    #[serde(default)]
    pub normal: Option<[f64; 3]>,
}

/// A cuboid mass element of the airframe, used to assemble the inertia
/// tensor. Positions are taken relative to the center of gravity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassElementConfig {
    pub position: [f64; 3],
    pub size: [f64; 3],
    /// Fraction of the total airframe mass carried by this element.
    pub mass_fraction: f64,
}

/// Everything needed to assemble an [`Aircraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    /// Total mass (kg).
    pub mass: f64,
    /// Maximum engine thrust (N).
    pub max_thrust: f64,
    /// Mass distribution feeding the composite inertia tensor.
    pub mass_elements: Vec<MassElementConfig>,
    pub left_wing: SurfaceConfig,
    pub left_aileron: SurfaceConfig,
    pub right_aileron: SurfaceConfig,
    pub right_wing: SurfaceConfig,
    pub elevator: SurfaceConfig,
    pub rudder: SurfaceConfig,
}

impl AircraftConfig {
    pub fn from_yaml_str(raw: &str) -> Result<Self, SimError> {
        let config: AircraftConfig = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.mass <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if self.max_thrust < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "max_thrust must not be negative, got {}",
                self.max_thrust
            )));
        }
        if self.mass_elements.is_empty() {
            return Err(SimError::InvalidConfig(
                "at least one mass element is required".into(),
            ));
        }
        let total_fraction: f64 = self.mass_elements.iter().map(|e| e.mass_fraction).sum();
        if total_fraction <= 0.0 {
            return Err(SimError::InvalidConfig(
                "mass fractions must sum to a positive total".into(),
            ));
        }
        for surface in self.surfaces() {
            if surface.wingspan <= 0.0 || surface.chord <= 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "surface dimensions must be positive, got {} x {}",
                    surface.wingspan, surface.chord
                )));
            }
        }
        Ok(())
    }

    fn surfaces(&self) -> [&SurfaceConfig; 6] {
        [
            &self.left_wing,
            &self.left_aileron,
            &self.right_aileron,
            &self.right_wing,
            &self.elevator,
            &self.rudder,
        ]
    }

    /// Composite inertia tensor assembled from the mass element list.
    pub fn inertia(&self) -> Matrix3<f64> {
        let mut elements: Vec<inertia::MassElement> = self
            .mass_elements
            .iter()
            .map(|element| {
                inertia::cube_element(
                    Vector3::from(element.position),
                    Vector3::from(element.size),
                    self.mass * element.mass_fraction,
                )
            })
            .collect();
        inertia::composite_tensor(&mut elements, true)
    }

    /// The demonstration trainer airframe: a ten tonne single-engine design
    /// with cambered main wings and symmetric control surfaces.
    pub fn trainer() -> Self {
        Self {
            name: "trainer".to_string(),
            mass: 10_000.0,
            max_thrust: 20_000.0,
            mass_elements: vec![
                MassElementConfig {
                    position: [-0.5, 0.0, -2.7],
                    size: [3.5, 0.1, 6.96],
                    mass_fraction: 0.25,
                },
                MassElementConfig {
                    position: [0.0, 0.0, -2.0],
                    size: [1.26, 0.1, 3.8],
                    mass_fraction: 0.05,
                },
                MassElementConfig {
                    position: [0.0, 0.0, 2.0],
                    size: [1.26, 0.1, 3.8],
                    mass_fraction: 0.05,
                },
                MassElementConfig {
                    position: [-0.5, 0.0, 2.7],
                    size: [3.5, 0.1, 6.96],
                    mass_fraction: 0.25,
                },
                MassElementConfig {
                    position: [-6.6, -0.1, 0.0],
                    size: [2.7, 0.1, 6.54],
                    mass_fraction: 0.2,
                },
                MassElementConfig {
                    position: [-6.6, 0.0, 0.0],
                    size: [5.31, 3.1, 0.1],
                    mass_fraction: 0.2,
                },
            ],
            left_wing: SurfaceConfig {
                position: [-0.5, 0.0, -2.7],
                wingspan: 6.96,
                chord: 3.5,
                airfoil: AirfoilKind::Naca2412,
                normal: None,
            },
            left_aileron: SurfaceConfig {
                position: [0.0, 0.0, -2.0],
                wingspan: 3.8,
                chord: 1.26,
                airfoil: AirfoilKind::Naca0012,
                normal: None,
            },
            right_aileron: SurfaceConfig {
                position: [0.0, 0.0, 2.0],
                wingspan: 3.8,
                chord: 1.26,
                airfoil: AirfoilKind::Naca0012,
                normal: None,
            },
            right_wing: SurfaceConfig {
                position: [-0.5, 0.0, 2.7],
                wingspan: 6.96,
                chord: 3.5,
                airfoil: AirfoilKind::Naca2412,
                normal: None,
            },
            elevator: SurfaceConfig {
                position: [-6.6, -0.1, 0.0],
                wingspan: 6.54,
                chord: 2.7,
                airfoil: AirfoilKind::Naca0012,
                normal: None,
            },
            rudder: SurfaceConfig {
                position: [-6.6, 0.0, 0.0],
                wingspan: 5.31,
                chord: 3.1,
                airfoil: AirfoilKind::Naca0012,
                normal: Some([0.0, 0.0, 1.0]),
            },
        }
    }
}

impl Aircraft {
    /// Assemble an aircraft from a validated configuration.
    pub fn from_config(config: &AircraftConfig) -> Result<Self, SimError> {
        config.validate()?;

        // One polar per section, shared by every surface that flies it.
        let naca_0012 = Arc::new(Airfoil::naca_0012());
        let naca_2412 = Arc::new(Airfoil::naca_2412());

        let build = |surface: &SurfaceConfig| {
            let airfoil = match surface.airfoil {
                AirfoilKind::Naca0012 => Arc::clone(&naca_0012),
                AirfoilKind::Naca2412 => Arc::clone(&naca_2412),
            };
            let normal = surface.normal.map(Vector3::from).unwrap_or_else(up);
            Wing::from_planform(
                Vector3::from(surface.position),
                surface.wingspan,
                surface.chord,
                airfoil,
                normal,
            )
        };

        let surfaces = ControlSurfaces {
            left_wing: build(&config.left_wing),
            left_aileron: build(&config.left_aileron),
            right_aileron: build(&config.right_aileron),
            right_wing: build(&config.right_wing),
            elevator: build(&config.elevator),
            rudder: build(&config.rudder),
        };

        Ok(Aircraft::new(
            config.mass,
            config.max_thrust,
            config.inertia(),
            surfaces,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_trainer_is_valid() {
        let config = AircraftConfig::trainer();
        assert!(config.validate().is_ok());

        let fractions: f64 = config.mass_elements.iter().map(|e| e.mass_fraction).sum();
        assert_relative_eq!(fractions, 1.0);
    }

    #[test]
    fn test_trainer_builds_aircraft() {
        let aircraft = Aircraft::from_config(&AircraftConfig::trainer()).unwrap();
        assert_relative_eq!(aircraft.rigid_body.mass(), 10_000.0);
        assert_relative_eq!(aircraft.engine.thrust(), 20_000.0);
        assert_relative_eq!(aircraft.surfaces.left_wing.area(), 6.96 * 3.5);
        assert_relative_eq!(aircraft.surfaces.rudder.area(), 5.31 * 3.1);
    }

    #[test]
    fn test_trainer_inertia_is_symmetric_and_invertible() {
        let inertia = AircraftConfig::trainer().inertia();
        assert_eq!(inertia, inertia.transpose());
        assert!(inertia.try_inverse().is_some());
        // Lateral symmetry keeps the x/z products of inertia at zero.
        assert_relative_eq!(inertia[(0, 2)], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AircraftConfig::trainer();
        let raw = serde_yaml::to_string(&config).unwrap();
        let parsed = AircraftConfig::from_yaml_str(&raw).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let mut config = AircraftConfig::trainer();
        config.mass = 0.0;
        assert!(config.validate().is_err());

        let mut config = AircraftConfig::trainer();
        config.elevator.chord = -1.0;
        assert!(config.validate().is_err());

        let mut config = AircraftConfig::trainer();
        config.mass_elements.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(AircraftConfig::from_yaml_str("name: [oops").is_err());
    }
}
