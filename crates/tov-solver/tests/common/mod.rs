//! Shared EOS fixtures.

#![allow(dead_code)]

use tov_core::PhysicalConstants;
use tov_eos::{EosUnits, EquationOfState};

/// P = ρ² in CGS on five knots.
pub fn toy_eos() -> EquationOfState {
    EquationOfState::new(
        &[1.0, 2.0, 3.0, 4.0, 5.0],
        &[1.0, 4.0, 9.0, 16.0, 25.0],
        EosUnits::Cgs,
        &PhysicalConstants::cgs(),
    )
    .unwrap()
}

/// Stiff Γ = 2 nuclear table, P = 3e-4 ε² (MeV/fm³), ε from 1 to ~2000 MeV/fm³.
pub fn stiff_nuclear_eos() -> EquationOfState {
    let n = 40;
    let eps: Vec<f64> = (0..n)
        .map(|i| 10f64.powf(3.3 * i as f64 / (n - 1) as f64))
        .collect();
    let pre: Vec<f64> = eps.iter().map(|e| 3e-4 * e * e).collect();
    EquationOfState::new(&eps, &pre, EosUnits::MevPerFm3, &PhysicalConstants::cgs()).unwrap()
}
