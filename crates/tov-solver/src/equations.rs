//! Tolman–Oppenheimer–Volkoff equations in CGS.

use crate::error::SolverResult;
use crate::model::StructureModel;
use std::f64::consts::PI;
use tov_core::PhysicalConstants;
use tov_eos::Eos;

/// Interior state at one radius: pressure [Ba] and enclosed mass [g].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StellarState {
    pub pressure: f64,
    pub mass: f64,
}

impl StellarState {
    pub const ZERO: Self = Self {
        pressure: 0.0,
        mass: 0.0,
    };

    pub fn is_finite(&self) -> bool {
        self.pressure.is_finite() && self.mass.is_finite()
    }
}

/// Hydrostatic equilibrium of a static spherical star on top of an EOS.
#[derive(Debug)]
pub struct TovEquations<'a, E: Eos + ?Sized> {
    eos: &'a E,
    constants: PhysicalConstants,
}

impl<'a, E: Eos + ?Sized> TovEquations<'a, E> {
    pub fn new(eos: &'a E, constants: PhysicalConstants) -> Self {
        Self { eos, constants }
    }

    pub fn eos(&self) -> &'a E {
        self.eos
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }
}

impl<E: Eos + ?Sized> StructureModel for TovEquations<'_, E> {
    type State = StellarState;

    /// Zero derivatives outside the EOS pressure envelope, so trial states that
    /// overshoot the surface inside an RK stage stay finite.
    fn rhs(&self, r: f64, x: &StellarState) -> SolverResult<StellarState> {
        let p = x.pressure;
        let m = x.mass;
        if !self.eos.contains_pressure(p) {
            return Ok(StellarState::ZERO);
        }

        let rho = self.eos.density_at(p);
        let g = self.constants.g;
        let c2 = self.constants.c2();

        let numerator = -g * (rho + p / c2) * (m + 4.0 * PI * r.powi(3) * p / c2);
        let denominator = r * (r - 2.0 * g * m / c2);

        Ok(StellarState {
            pressure: numerator / denominator,
            mass: 4.0 * PI * rho * r * r,
        })
    }

    fn add(&self, a: &StellarState, b: &StellarState) -> StellarState {
        StellarState {
            pressure: a.pressure + b.pressure,
            mass: a.mass + b.mass,
        }
    }

    fn scale(&self, a: &StellarState, scale: f64) -> StellarState {
        StellarState {
            pressure: a.pressure * scale,
            mass: a.mass * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tov_eos::{EosUnits, EquationOfState};

    fn toy() -> EquationOfState {
        EquationOfState::new(
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            &[1.0, 4.0, 9.0, 16.0, 25.0],
            EosUnits::Cgs,
            &PhysicalConstants::cgs(),
        )
        .unwrap()
    }

    #[test]
    fn zero_derivative_outside_envelope() {
        let eos = toy();
        let tov = TovEquations::new(&eos, PhysicalConstants::cgs());
        let below = StellarState {
            pressure: 0.5,
            mass: 1.0,
        };
        let above = StellarState {
            pressure: 30.0,
            mass: 1.0,
        };
        assert_eq!(tov.rhs(1.0, &below).unwrap(), StellarState::ZERO);
        assert_eq!(tov.rhs(1.0, &above).unwrap(), StellarState::ZERO);
    }

    #[test]
    fn newtonian_limit_inside_envelope() {
        let eos = toy();
        let k = PhysicalConstants::cgs();
        let tov = TovEquations::new(&eos, k);
        let r = 10.0;
        let m = 100.0;
        let d = tov
            .rhs(
                r,
                &StellarState {
                    pressure: 9.0,
                    mass: m,
                },
            )
            .unwrap();
        // Tiny toy star: relativistic corrections are negligible
        let newtonian = -k.g * 3.0 * m / (r * r);
        assert!((d.pressure / newtonian - 1.0).abs() < 1e-9);
        assert!((d.mass - 4.0 * PI * 3.0 * r * r).abs() < 1e-9);
    }

    #[test]
    fn pressure_gradient_is_negative() {
        let eos = toy();
        let tov = TovEquations::new(&eos, PhysicalConstants::cgs());
        let d = tov
            .rhs(
                0.5,
                &StellarState {
                    pressure: 12.0,
                    mass: 2.0,
                },
            )
            .unwrap();
        assert!(d.pressure < 0.0);
        assert!(d.mass > 0.0);
    }
}
