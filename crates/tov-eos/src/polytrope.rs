//! Analytic polytropic EOS, `P = K ρ^Γ`.

use crate::error::{EosError, EosResult};
use crate::model::{Eos, EosBounds};
use tov_core::ensure_positive;

/// Reduced Planck constant [erg s].
pub const HBAR_CGS: f64 = 1.054_571_817e-27;
/// Neutron mass [g].
pub const NEUTRON_MASS_G: f64 = 1.674_927_498e-24;

/// Polytrope restricted to a positive density envelope.
///
/// The inverse `ρ = (P/K)^(1/Γ)` involves a fractional power, so it is only
/// evaluated on pressures inside the envelope, which are strictly positive by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolytropicEos {
    k: f64,
    gamma: f64,
    bounds: EosBounds,
}

impl PolytropicEos {
    pub fn new(k: f64, gamma: f64, min_density: f64, max_density: f64) -> EosResult<Self> {
        let k = ensure_positive(k, "polytropic constant")?;
        let gamma = ensure_positive(gamma, "adiabatic index")?;
        let min_density = ensure_positive(min_density, "minimum density")?;
        let max_density = ensure_positive(max_density, "maximum density")?;
        if max_density <= min_density {
            return Err(EosError::construction("polytrope density envelope is empty"));
        }

        Ok(Self {
            k,
            gamma,
            bounds: EosBounds {
                min_density,
                max_density,
                min_pressure: k * min_density.powf(gamma),
                max_pressure: k * max_density.powf(gamma),
            },
        })
    }

    /// Non-relativistic degenerate neutron gas, Γ = 5/3,
    /// `K = (3π²)^(2/3) ħ² / (5 m_n^(8/3))`.
    pub fn neutron_gas(min_density: f64, max_density: f64) -> EosResult<Self> {
        let k = (3.0 * std::f64::consts::PI.powi(2)).powf(2.0 / 3.0) * HBAR_CGS.powi(2)
            / (5.0 * NEUTRON_MASS_G.powf(8.0 / 3.0));
        Self::new(k, 5.0 / 3.0, min_density, max_density)
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Polytropic index n with Γ = 1 + 1/n.
    pub fn index(&self) -> f64 {
        1.0 / (self.gamma - 1.0)
    }
}

impl Eos for PolytropicEos {
    fn density_at(&self, pressure: f64) -> f64 {
        debug_assert!(pressure > 0.0, "polytrope inverse needs positive pressure");
        (pressure / self.k).powf(1.0 / self.gamma)
    }

    fn pressure_at(&self, density: f64) -> f64 {
        self.k * density.powf(self.gamma)
    }

    fn bounds(&self) -> EosBounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_recovers_density() {
        let eos = PolytropicEos::new(2.0, 2.0, 1.0, 10.0).unwrap();
        let p = eos.pressure_at(3.0);
        assert!((p - 18.0).abs() < 1e-12);
        assert!((eos.density_at(p) - 3.0).abs() < 1e-12);
        assert!((eos.index() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn neutron_gas_constant() {
        let eos = PolytropicEos::neutron_gas(1e6, 1e16).unwrap();
        // ~5.38e9 in CGS
        assert!((eos.k() / 5.38e9 - 1.0).abs() < 1e-2);
        assert!((eos.gamma() - 5.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn negative_pressure_is_rejected_before_power() {
        let eos = PolytropicEos::new(1.0, 1.5, 1.0, 4.0).unwrap();
        let err = eos.try_density_at(-0.5).unwrap_err();
        assert!(matches!(err, EosError::OutOfRange { quantity: "pressure", .. }));
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(PolytropicEos::new(0.0, 1.5, 1.0, 2.0).is_err());
        assert!(PolytropicEos::new(1.0, -1.0, 1.0, 2.0).is_err());
        assert!(PolytropicEos::new(1.0, 1.5, 0.0, 2.0).is_err());
        assert!(PolytropicEos::new(1.0, 1.5, 2.0, 1.0).is_err());
    }
}
