//! Single-star integration from the centre to the surface.

use crate::equations::{StellarState, TovEquations};
use crate::error::{SolverError, SolverResult};
use crate::integrator::{Integrator, Rk4};
use crate::trajectory::{PressureUnit, StellarTrajectory};
use std::f64::consts::PI;
use tov_core::PhysicalConstants;
use tov_eos::Eos;

/// Options for single-star runs.
#[derive(Clone, Debug)]
pub struct SolveOptions {
    /// Fixed radial step [cm]
    pub dr: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Unit of the reported pressure column
    pub pressure_unit: PressureUnit,
    pub constants: PhysicalConstants,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            dr: 100.0,
            max_steps: 1_000_000,
            pressure_unit: PressureUnit::default(),
            constants: PhysicalConstants::cgs(),
        }
    }
}

impl SolveOptions {
    pub fn with_step(dr: f64) -> Self {
        Self {
            dr,
            ..Self::default()
        }
    }

    fn validate(&self) -> SolverResult<()> {
        if !(self.dr.is_finite() && self.dr > 0.0) {
            return Err(SolverError::InvalidArg {
                what: "dr must be positive and finite",
            });
        }
        if self.max_steps == 0 {
            return Err(SolverError::InvalidArg {
                what: "max_steps must be positive",
            });
        }
        Ok(())
    }
}

/// Lifecycle of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    /// Central conditions being derived; never observed outside `StarIntegration::new`.
    Initializing,
    Integrating,
    /// Pressure reached the EOS minimum; the last recorded point is the surface.
    Terminated,
}

/// One star being integrated outward in fixed radial steps.
///
/// Records CGS radius/pressure/mass from `r = dr`; converted to reporting units
/// by [`finish`](Self::finish).
#[derive(Debug)]
pub struct StarIntegration<'a, E: Eos + ?Sized> {
    equations: TovEquations<'a, E>,
    opts: SolveOptions,
    central_density: f64,
    min_pressure: f64,
    phase: RunPhase,
    steps: usize,
    radius: Vec<f64>,
    pressure: Vec<f64>,
    mass: Vec<f64>,
}

impl<'a, E: Eos + ?Sized> StarIntegration<'a, E> {
    /// Validate inputs and derive the central conditions.
    ///
    /// The first point sits at `r = dr` with the mass of a uniform sphere of the
    /// central density, which keeps `1/r` in the pressure gradient finite.
    pub fn new(eos: &'a E, central_density: f64, opts: &SolveOptions) -> SolverResult<Self> {
        opts.validate()?;
        if eos.constants().is_some_and(|k| *k != opts.constants) {
            return Err(SolverError::InvalidArg {
                what: "EOS was converted with different physical constants",
            });
        }
        eos.check_density_in_range(central_density)?;

        let dr = opts.dr;
        let central_pressure = eos.pressure_at(central_density);
        let rho = eos.density_at(central_pressure);
        let central_mass = 4.0 / 3.0 * PI * rho * dr.powi(3);
        let min_pressure = eos.bounds().min_pressure;

        tracing::debug!(
            central_density,
            central_pressure,
            dr,
            "starting structure integration"
        );

        // A star at the minimum density has no interior to integrate
        let phase = if central_pressure > min_pressure {
            RunPhase::Integrating
        } else {
            RunPhase::Terminated
        };

        Ok(Self {
            equations: TovEquations::new(eos, opts.constants),
            opts: opts.clone(),
            central_density,
            min_pressure,
            phase,
            steps: 0,
            radius: vec![dr],
            pressure: vec![central_pressure],
            mass: vec![central_mass],
        })
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Latest `(radius [cm], state)`.
    pub fn current(&self) -> (f64, StellarState) {
        let i = self.radius.len() - 1;
        (
            self.radius[i],
            StellarState {
                pressure: self.pressure[i],
                mass: self.mass[i],
            },
        )
    }

    /// Take one RK4 step. No-op once terminated.
    pub fn advance(&mut self) -> SolverResult<RunPhase> {
        if self.phase == RunPhase::Terminated {
            return Ok(self.phase);
        }
        if self.steps >= self.opts.max_steps {
            let (_, state) = self.current();
            tracing::warn!(
                steps = self.steps,
                pressure = state.pressure,
                "step limit reached before surface"
            );
            return Err(SolverError::Divergence {
                steps: self.steps,
                pressure: state.pressure,
            });
        }

        let dr = self.opts.dr;
        let (r, state) = self.current();
        let next = Rk4.step(&self.equations, r, &state, dr)?;
        self.steps += 1;

        if !next.is_finite() {
            return Err(SolverError::Divergence {
                steps: self.steps,
                pressure: next.pressure,
            });
        }

        self.radius.push(dr * (self.steps + 1) as f64);
        self.pressure.push(next.pressure);
        self.mass.push(next.mass);

        if next.pressure <= self.min_pressure {
            self.phase = RunPhase::Terminated;
        }
        Ok(self.phase)
    }

    /// Advance until the surface is reached.
    pub fn run_to_surface(&mut self) -> SolverResult<()> {
        while self.advance()? != RunPhase::Terminated {}
        Ok(())
    }

    /// Run to the surface (if needed) and convert to reporting units.
    pub fn finish(mut self) -> SolverResult<StellarTrajectory> {
        self.run_to_surface()?;

        let (r, state) = self.current();
        tracing::debug!(
            steps = self.steps,
            radius_cm = r,
            mass_g = state.mass,
            "reached stellar surface"
        );

        Ok(StellarTrajectory::from_cgs(
            self.radius,
            self.pressure,
            self.mass,
            self.opts.pressure_unit,
            self.central_density,
            self.opts.dr,
            self.opts.constants,
        ))
    }
}

/// Integrate one star with central energy density `central_density` [g/cm³].
///
/// Fails with [`SolverError::OutOfRange`] before any step when the density lies
/// outside the EOS envelope.
pub fn solve_star<E: Eos + ?Sized>(
    eos: &E,
    central_density: f64,
    opts: &SolveOptions,
) -> SolverResult<StellarTrajectory> {
    StarIntegration::new(eos, central_density, opts)?.finish()
}

/// Same as [`solve_star`] with the central energy density given in MeV/fm³.
pub fn solve_star_mev<E: Eos + ?Sized>(
    eos: &E,
    central_density_mev_fm3: f64,
    opts: &SolveOptions,
) -> SolverResult<StellarTrajectory> {
    let rho = opts.constants.density_from_mev_fm3(central_density_mev_fm3);
    solve_star(eos, rho, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tov_eos::{EosBounds, EosUnits, EquationOfState};

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
    fn solve_options_defaults() {
        let opts = SolveOptions::default();
        assert_eq!(opts.dr, 100.0);
        assert_eq!(opts.max_steps, 1_000_000);
        assert_eq!(opts.pressure_unit, PressureUnit::Cgs);
    }

    #[test]
    fn rejects_bad_step() {
        let eos = toy();
        for dr in [0.0, -1.0, f64::NAN] {
            let err = StarIntegration::new(&eos, 3.0, &SolveOptions::with_step(dr)).unwrap_err();
            assert!(matches!(err, SolverError::InvalidArg { .. }));
        }
        let opts = SolveOptions {
            max_steps: 0,
            ..SolveOptions::with_step(1.0)
        };
        assert!(StarIntegration::new(&eos, 3.0, &opts).is_err());
    }

    #[test]
    fn central_conditions() {
        let eos = toy();
        let run = StarIntegration::new(&eos, 3.0, &SolveOptions::with_step(0.01)).unwrap();
        assert_eq!(run.phase(), RunPhase::Integrating);
        let (r, state) = run.current();
        assert_eq!(r, 0.01);
        assert_eq!(state.pressure, 9.0);
        let expected_mass = 4.0 / 3.0 * PI * 3.0 * 0.01_f64.powi(3);
        assert!((state.mass - expected_mass).abs() < 1e-18);
    }

    #[test]
    fn minimum_density_star_is_already_at_surface() {
        let eos = toy();
        let mut run = StarIntegration::new(&eos, 1.0, &SolveOptions::with_step(0.01)).unwrap();
        assert_eq!(run.phase(), RunPhase::Terminated);
        assert_eq!(run.advance().unwrap(), RunPhase::Terminated);
        let t = run.finish().unwrap();
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn step_limit_raises_divergence() {
        let eos = toy();
        let opts = SolveOptions {
            max_steps: 10,
            ..SolveOptions::with_step(0.01)
        };
        let err = solve_star(&eos, 3.0, &opts).unwrap_err();
        match err {
            SolverError::Divergence { steps, .. } => assert_eq!(steps, 10),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn advance_is_noop_after_termination() {
        let eos = toy();
        let mut run = StarIntegration::new(&eos, 1.5, &SolveOptions::with_step(1.0)).unwrap();
        run.run_to_surface().unwrap();
        let steps = run.steps();
        assert_eq!(run.advance().unwrap(), RunPhase::Terminated);
        assert_eq!(run.steps(), steps);
    }

    /// Inverse lookup that breaks down below the central pressure of a ρ = 3 star.
    struct BrokenInverse;

    impl Eos for BrokenInverse {
        fn density_at(&self, pressure: f64) -> f64 {
            if pressure >= 9.0 {
                pressure.sqrt()
            } else {
                f64::NAN
            }
        }

        fn pressure_at(&self, density: f64) -> f64 {
            density * density
        }

        fn bounds(&self) -> EosBounds {
            EosBounds {
                min_density: 1.0,
                max_density: 5.0,
                min_pressure: 1.0,
                max_pressure: 25.0,
            }
        }
    }

    #[test]
    fn non_finite_state_raises_divergence_on_first_step() {
        let mut run =
            StarIntegration::new(&BrokenInverse, 3.0, &SolveOptions::with_step(0.01)).unwrap();
        let err = run.advance().unwrap_err();
        match err {
            SolverError::Divergence { steps, pressure } => {
                assert_eq!(steps, 1);
                assert!(pressure.is_nan());
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(run.current().0, 0.01);

        let err = solve_star(&BrokenInverse, 3.0, &SolveOptions::with_step(0.01)).unwrap_err();
        assert!(matches!(err, SolverError::Divergence { steps: 1, .. }));
    }

    #[test]
    fn mismatched_constants_are_rejected() {
        let eos = toy();
        let opts = SolveOptions {
            constants: PhysicalConstants {
                g: 6.674e-8,
                ..PhysicalConstants::cgs()
            },
            ..SolveOptions::with_step(0.01)
        };
        let err = solve_star(&eos, 3.0, &opts).unwrap_err();
        assert!(matches!(err, SolverError::InvalidArg { .. }));
        assert!(solve_star(&eos, 3.0, &SolveOptions::with_step(1.0)).is_ok());
    }
}
