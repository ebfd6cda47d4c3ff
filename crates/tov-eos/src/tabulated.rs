//! Tabulated equation of state built from discrete (energy density, pressure) samples.

use crate::error::{EosError, EosResult};
use crate::loader::EosTable;
use crate::model::{Eos, EosBounds};
use crate::spline::{CubicSpline, MIN_KNOTS};
use tov_core::{PhysicalConstants, ensure_positive, is_strictly_increasing};

/// Unit of the raw samples handed to [`EquationOfState::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EosUnits {
    /// Energy density and pressure both in MeV/fm³ (nuclear tables)
    #[default]
    MevPerFm3,
    /// Energy density already in g/cm³, pressure in Ba
    Cgs,
}

/// Immutable tabulated EOS in CGS with cubic interpolants in both directions.
///
/// Build once per table and share across runs; nothing mutates after `new`.
#[derive(Debug, Clone)]
pub struct EquationOfState {
    density: Vec<f64>,
    pressure: Vec<f64>,
    density_of_pressure: CubicSpline,
    pressure_of_density: CubicSpline,
    bounds: EosBounds,
    constants: PhysicalConstants,
}

impl EquationOfState {
    /// Convert the samples to CGS and build both interpolants.
    ///
    /// Fails with [`EosError::Construction`] on mismatched lengths, fewer than four
    /// samples, non-finite or non-positive values, or axes that are not strictly
    /// increasing after conversion.
    pub fn new(
        density: &[f64],
        pressure: &[f64],
        units: EosUnits,
        constants: &PhysicalConstants,
    ) -> EosResult<Self> {
        if density.len() != pressure.len() {
            return Err(EosError::construction(format!(
                "density and pressure sample counts differ ({} vs {})",
                density.len(),
                pressure.len()
            )));
        }
        if density.len() < MIN_KNOTS {
            return Err(EosError::construction(format!(
                "need at least {MIN_KNOTS} samples, got {}",
                density.len()
            )));
        }

        let (density_factor, pressure_factor) = match units {
            EosUnits::MevPerFm3 => (constants.mev_fm3_to_g_cm3(), constants.mev_fm3_to_ba),
            EosUnits::Cgs => (1.0, 1.0),
        };

        let density = density
            .iter()
            .map(|&e| ensure_positive(e * density_factor, "density sample"))
            .collect::<Result<Vec<_>, _>>()?;
        let pressure = pressure
            .iter()
            .map(|&p| ensure_positive(p * pressure_factor, "pressure sample"))
            .collect::<Result<Vec<_>, _>>()?;

        if !is_strictly_increasing(&density) {
            return Err(EosError::construction(
                "density samples are not strictly increasing",
            ));
        }
        if !is_strictly_increasing(&pressure) {
            return Err(EosError::construction(
                "pressure samples are not strictly increasing",
            ));
        }

        let density_of_pressure = CubicSpline::not_a_knot(&pressure, &density)?;
        let pressure_of_density = CubicSpline::not_a_knot(&density, &pressure)?;

        let n = density.len();
        let bounds = EosBounds {
            min_density: density[0],
            max_density: density[n - 1],
            min_pressure: pressure[0],
            max_pressure: pressure[n - 1],
        };

        tracing::debug!(
            samples = n,
            min_density = bounds.min_density,
            max_density = bounds.max_density,
            min_pressure = bounds.min_pressure,
            max_pressure = bounds.max_pressure,
            "built tabulated EOS"
        );

        Ok(Self {
            density,
            pressure,
            density_of_pressure,
            pressure_of_density,
            bounds,
            constants: *constants,
        })
    }

    /// Build from a loaded table (columns in MeV/fm³).
    pub fn from_table(table: &EosTable, constants: &PhysicalConstants) -> EosResult<Self> {
        Self::new(
            &table.energy_density,
            &table.pressure,
            EosUnits::MevPerFm3,
            constants,
        )
    }

    /// Converted samples `(density [g/cm³], pressure [Ba])`, for comparing the
    /// interpolants against the raw table.
    pub fn samples(&self) -> (&[f64], &[f64]) {
        (&self.density, &self.pressure)
    }

    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    /// Largest absolute deviation of each interpolant from the samples it was not
    /// built on: `(|P(ρ_i) - P_i|, |ρ(P_i) - ρ_i|)`.
    pub fn interpolation_residuals(&self) -> (f64, f64) {
        let mut dp: f64 = 0.0;
        let mut drho: f64 = 0.0;
        for (&rho, &p) in self.density.iter().zip(&self.pressure) {
            dp = dp.max((self.pressure_at(rho) - p).abs());
            drho = drho.max((self.density_at(p) - rho).abs());
        }
        (dp, drho)
    }
}

impl Eos for EquationOfState {
    fn density_at(&self, pressure: f64) -> f64 {
        self.density_of_pressure.eval(pressure)
    }

    fn pressure_at(&self, density: f64) -> f64 {
        self.pressure_of_density.eval(density)
    }

    fn bounds(&self) -> EosBounds {
        self.bounds
    }

    fn constants(&self) -> Option<&PhysicalConstants> {
        Some(&self.constants)
    }
}
