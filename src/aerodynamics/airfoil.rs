use serde::{Deserialize, Serialize};

use crate::utils::errors::SimError;
use crate::utils::math::scale;

use super::data;

/// One measured point of a lift/drag polar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirfoilSample {
    /// Angle of attack (degrees).
    pub alpha: f64,
    /// Lift coefficient.
    pub cl: f64,
    /// Drag coefficient.
    pub cd: f64,
}

/// An empirical lift/drag polar indexed by angle of attack.
///
/// `sample` returns the nearest tabulated entry rather than interpolating,
/// and silently clamps queries outside the tabulated range. The table is
/// immutable once built; wings share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Airfoil {
    min_alpha: f64,
    max_alpha: f64,
    data: Vec<AirfoilSample>,
}

impl Airfoil {
    /// Build an airfoil from a polar sorted by strictly ascending alpha.
    pub fn new(data: Vec<AirfoilSample>) -> Result<Self, SimError> {
        if data.is_empty() {
            return Err(SimError::AeroError("airfoil polar is empty".into()));
        }
        if data.windows(2).any(|pair| pair[0].alpha >= pair[1].alpha) {
            return Err(SimError::AeroError(
                "airfoil polar must be sorted by ascending alpha".into(),
            ));
        }
        Ok(Self::from_sorted(data))
    }

    fn from_sorted(data: Vec<AirfoilSample>) -> Self {
        let min_alpha = data[0].alpha;
        let max_alpha = data[data.len() - 1].alpha;
        Self {
            min_alpha,
            max_alpha,
            data,
        }
    }

    /// NACA 0012, the symmetric section used for control surfaces.
    pub fn naca_0012() -> Self {
        Self::from_sorted(data::naca_0012())
    }

    /// NACA 2412, the cambered section used for main wings.
    pub fn naca_2412() -> Self {
        Self::from_sorted(data::naca_2412())
    }

    /// Smallest tabulated angle of attack (degrees).
    pub fn min_alpha(&self) -> f64 {
        self.min_alpha
    }

    /// Largest tabulated angle of attack (degrees).
    pub fn max_alpha(&self) -> f64 {
        self.max_alpha
    }

    /// Lift and drag coefficients at the given angle of attack (degrees).
    pub fn sample(&self, alpha: f64) -> (f64, f64) {
        let last = (self.data.len() - 1) as f64;
        let index = scale(alpha, self.min_alpha, self.max_alpha, 0.0, last)
            .round()
            .clamp(0.0, last) as usize;
        debug_assert!(index < self.data.len(), "alpha = {}, index = {}", alpha, index);
        let sample = &self.data[index];
        (sample.cl, sample.cd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp() -> Airfoil {
        Airfoil::new(vec![
            AirfoilSample {
                alpha: -10.0,
                cl: -1.0,
                cd: 0.05,
            },
            AirfoilSample {
                alpha: 0.0,
                cl: 0.0,
                cd: 0.01,
            },
            AirfoilSample {
                alpha: 10.0,
                cl: 1.0,
                cd: 0.05,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_sample_clamps_below_minimum() {
        let (cl, cd) = ramp().sample(-90.0);
        assert_relative_eq!(cl, -1.0);
        assert_relative_eq!(cd, 0.05);
    }

    #[test]
    fn test_sample_clamps_above_maximum() {
        let (cl, _) = ramp().sample(45.0);
        assert_relative_eq!(cl, 1.0);
    }

    #[test]
    fn test_sample_hits_exact_entries() {
        let foil = ramp();
        assert_relative_eq!(foil.sample(-10.0).0, -1.0);
        assert_relative_eq!(foil.sample(0.0).0, 0.0);
        assert_relative_eq!(foil.sample(10.0).0, 1.0);
    }

    #[test]
    fn test_sample_rounds_to_nearest_entry() {
        let foil = ramp();
        assert_relative_eq!(foil.sample(4.0).0, 0.0);
        assert_relative_eq!(foil.sample(6.0).0, 1.0);
    }

    #[test]
    fn test_empty_polar_is_rejected() {
        assert!(Airfoil::new(Vec::new()).is_err());
    }

    #[test]
    fn test_unsorted_polar_is_rejected() {
        let result = Airfoil::new(vec![
            AirfoilSample {
                alpha: 5.0,
                cl: 0.5,
                cd: 0.01,
            },
            AirfoilSample {
                alpha: -5.0,
                cl: -0.5,
                cd: 0.01,
            },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_builtin_polars_are_valid() {
        for foil in [Airfoil::naca_0012(), Airfoil::naca_2412()] {
            assert_relative_eq!(foil.min_alpha(), -18.0);
            assert_relative_eq!(foil.max_alpha(), 18.0);
        }

        // Symmetric section carries no lift at zero alpha, cambered does.
        assert_relative_eq!(Airfoil::naca_0012().sample(0.0).0, 0.0);
        assert!(Airfoil::naca_2412().sample(0.0).0 > 0.0);
    }
}
