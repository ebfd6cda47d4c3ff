//! Radial profile of one stellar model in reporting units.

use serde::{Deserialize, Serialize};
use tov_core::PhysicalConstants;
use tov_core::units::{Length, Mass, grams, km};

/// Unit of the reported pressure column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    /// Barye (dyn/cm²), the integration unit.
    #[default]
    Cgs,
    /// Pascal.
    Si,
}

impl PressureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Cgs => "Ba",
            Self::Si => "Pa",
        }
    }
}

/// Surface values of one model, the point a mass-radius curve is made of.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceValues {
    /// Central energy density [g/cm³]
    pub central_density: f64,
    /// Surface radius [km]
    pub radius_km: f64,
    /// Gravitational mass [M☉]
    pub mass_solar: f64,
}

/// Radius [km], pressure and enclosed mass [M☉] from the first step to the surface.
///
/// All three sequences share one length; the last entry is the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct StellarTrajectory {
    radius_km: Vec<f64>,
    pressure: Vec<f64>,
    mass_solar: Vec<f64>,
    pressure_unit: PressureUnit,
    central_density: f64,
    step_cm: f64,
    constants: PhysicalConstants,
}

impl StellarTrajectory {
    /// Convert CGS sequences (cm, Ba, g) into reporting units.
    pub(crate) fn from_cgs(
        radius_cm: Vec<f64>,
        pressure_ba: Vec<f64>,
        mass_g: Vec<f64>,
        pressure_unit: PressureUnit,
        central_density: f64,
        step_cm: f64,
        constants: PhysicalConstants,
    ) -> Self {
        debug_assert_eq!(radius_cm.len(), pressure_ba.len());
        debug_assert_eq!(radius_cm.len(), mass_g.len());

        let radius_km = radius_cm.into_iter().map(|r| r * constants.cm_to_km).collect();
        let mass_solar = mass_g
            .into_iter()
            .map(|m| constants.grams_to_solar(m))
            .collect();
        let pressure = match pressure_unit {
            PressureUnit::Cgs => pressure_ba,
            PressureUnit::Si => pressure_ba
                .into_iter()
                .map(|p| p * constants.ba_to_pa)
                .collect(),
        };

        Self {
            radius_km,
            pressure,
            mass_solar,
            pressure_unit,
            central_density,
            step_cm,
            constants,
        }
    }

    pub fn radius_km(&self) -> &[f64] {
        &self.radius_km
    }

    /// Pressure in [`pressure_unit`](Self::pressure_unit).
    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    pub fn mass_solar(&self) -> &[f64] {
        &self.mass_solar
    }

    pub fn pressure_unit(&self) -> PressureUnit {
        self.pressure_unit
    }

    /// [g/cm³]
    pub fn central_density(&self) -> f64 {
        self.central_density
    }

    /// [cm]
    pub fn step_cm(&self) -> f64 {
        self.step_cm
    }

    pub fn len(&self) -> usize {
        self.radius_km.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radius_km.is_empty()
    }

    pub fn central_pressure(&self) -> f64 {
        self.pressure[0]
    }

    pub fn surface_radius_km(&self) -> f64 {
        self.radius_km[self.len() - 1]
    }

    pub fn total_mass_solar(&self) -> f64 {
        self.mass_solar[self.len() - 1]
    }

    pub fn surface_pressure(&self) -> f64 {
        self.pressure[self.len() - 1]
    }

    pub fn surface(&self) -> SurfaceValues {
        SurfaceValues {
            central_density: self.central_density,
            radius_km: self.surface_radius_km(),
            mass_solar: self.total_mass_solar(),
        }
    }

    pub fn surface_radius(&self) -> Length {
        km(self.surface_radius_km())
    }

    pub fn total_mass(&self) -> Mass {
        grams(self.total_mass_solar() * self.constants.m_sun)
    }

    /// Iterate `(radius_km, pressure, mass_solar)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.radius_km
            .iter()
            .zip(&self.pressure)
            .zip(&self.mass_solar)
            .map(|((&r, &p), &m)| (r, p, m))
    }
}
