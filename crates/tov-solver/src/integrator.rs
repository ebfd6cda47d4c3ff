//! Fixed-step radial integrators.

use crate::error::SolverResult;
use crate::model::StructureModel;

/// Trait for radial integrators.
pub trait Integrator {
    /// Advance state by one radial step `dr` starting at radius `r`.
    fn step<M: StructureModel>(
        &self,
        model: &M,
        r: f64,
        x: &M::State,
        dr: f64,
    ) -> SolverResult<M::State>;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn step<M: StructureModel>(
        &self,
        model: &M,
        r: f64,
        x: &M::State,
        dr: f64,
    ) -> SolverResult<M::State> {
        let k1 = model.rhs(r, x)?;

        let x2 = model.add(x, &model.scale(&k1, 0.5 * dr));
        let k2 = model.rhs(r + 0.5 * dr, &x2)?;

        let x3 = model.add(x, &model.scale(&k2, 0.5 * dr));
        let k3 = model.rhs(r + 0.5 * dr, &x3)?;

        let x4 = model.add(x, &model.scale(&k3, dr));
        let k4 = model.rhs(r + dr, &x4)?;

        // Combine: x_new = x + (dr/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = model.add(
            &model.add(&k1, &model.scale(&k2, 2.0)),
            &model.add(&model.scale(&k3, 2.0), &k4),
        );

        Ok(model.add(x, &model.scale(&k_sum, dr / 6.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// dy/dr = y, exact solution e^r.
    struct Exponential;

    impl StructureModel for Exponential {
        type State = f64;

        fn rhs(&self, _r: f64, x: &f64) -> SolverResult<f64> {
            Ok(*x)
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    /// dy/dr = 3 r², exact solution r³ (RK4 integrates cubics exactly).
    struct Cubic;

    impl StructureModel for Cubic {
        type State = f64;

        fn rhs(&self, r: f64, _x: &f64) -> SolverResult<f64> {
            Ok(3.0 * r * r)
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    #[test]
    fn rk4_exponential_growth() {
        let dr = 0.01;
        let mut y = 1.0;
        let mut r = 0.0;
        for _ in 0..100 {
            y = Rk4.step(&Exponential, r, &y, dr).unwrap();
            r += dr;
        }
        assert!((y - 1.0_f64.exp()).abs() < 1e-9);
    }

    #[test]
    fn rk4_exact_for_polynomial_in_r() {
        let y = Rk4.step(&Cubic, 1.0, &1.0, 0.5).unwrap();
        assert!((y - 1.5_f64.powi(3)).abs() < 1e-12);
    }
}
