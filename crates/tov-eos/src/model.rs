//! Eos trait: the stable surface the structure integrator is written against.

use crate::error::{EosError, EosResult};
use tov_core::PhysicalConstants;

/// Validity envelope of an equation of state, in CGS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EosBounds {
    /// [g/cm³]
    pub min_density: f64,
    /// [g/cm³]
    pub max_density: f64,
    /// [Ba]
    pub min_pressure: f64,
    /// [Ba]
    pub max_pressure: f64,
}

impl EosBounds {
    /// Closed-interval membership; NaN is never contained.
    pub fn contains_density(&self, density: f64) -> bool {
        density >= self.min_density && density <= self.max_density
    }

    pub fn contains_pressure(&self, pressure: f64) -> bool {
        pressure >= self.min_pressure && pressure <= self.max_pressure
    }

    pub fn check_density(&self, density: f64) -> EosResult<()> {
        if self.contains_density(density) {
            Ok(())
        } else {
            Err(EosError::OutOfRange {
                quantity: "density",
                value: density,
                min: self.min_density,
                max: self.max_density,
            })
        }
    }

    pub fn check_pressure(&self, pressure: f64) -> EosResult<()> {
        if self.contains_pressure(pressure) {
            Ok(())
        } else {
            Err(EosError::OutOfRange {
                quantity: "pressure",
                value: pressure,
                min: self.min_pressure,
                max: self.max_pressure,
            })
        }
    }
}

/// Barotropic equation of state P(ρ) with its inverse.
///
/// Lookups are only defined inside [`bounds`](Eos::bounds); callers check first
/// (or use the `try_` variants).
pub trait Eos {
    /// Energy density [g/cm³] at `pressure` [Ba].
    fn density_at(&self, pressure: f64) -> f64;

    /// Pressure [Ba] at energy density `density` [g/cm³].
    fn pressure_at(&self, density: f64) -> f64;

    fn bounds(&self) -> EosBounds;

    /// Constants the EOS was converted with, if it depends on any.
    fn constants(&self) -> Option<&PhysicalConstants> {
        None
    }

    fn check_density_in_range(&self, density: f64) -> EosResult<()> {
        self.bounds().check_density(density)
    }

    fn check_pressure_in_range(&self, pressure: f64) -> EosResult<()> {
        self.bounds().check_pressure(pressure)
    }

    fn contains_pressure(&self, pressure: f64) -> bool {
        self.bounds().contains_pressure(pressure)
    }

    fn try_density_at(&self, pressure: f64) -> EosResult<f64> {
        self.check_pressure_in_range(pressure)?;
        Ok(self.density_at(pressure))
    }

    fn try_pressure_at(&self, density: f64) -> EosResult<f64> {
        self.check_density_in_range(density)?;
        Ok(self.pressure_at(density))
    }
}

impl<E: Eos + ?Sized> Eos for &E {
    fn density_at(&self, pressure: f64) -> f64 {
        (**self).density_at(pressure)
    }

    fn pressure_at(&self, density: f64) -> f64 {
        (**self).pressure_at(density)
    }

    fn bounds(&self) -> EosBounds {
        (**self).bounds()
    }

    fn constants(&self) -> Option<&PhysicalConstants> {
        (**self).constants()
    }
}
