//! Mass-radius sweeps over central density.
//!
//! Every central density is an independent run against the same read-only EOS,
//! so the runs are spread over the rayon pool and collected back in input order.

use crate::error::{SolverError, SolverResult};
use crate::star::{SolveOptions, solve_star};
use crate::trajectory::SurfaceValues;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tov_eos::Eos;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    #[default]
    Logarithmic,
}

/// Range of central densities to sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub start: f64,
    pub end: f64,
    /// Number of points to generate
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> SolverResult<Self> {
        if num_points < 2 {
            return Err(SolverError::InvalidArg {
                what: "sweep must have at least 2 points",
            });
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(SolverError::InvalidArg {
                what: "sweep bounds must be finite",
            });
        }
        if (start - end).abs() < 1e-12 * start.abs().max(end.abs()).max(1.0) {
            return Err(SolverError::InvalidArg {
                what: "sweep start and end must differ",
            });
        }
        if sweep_type == SweepType::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(SolverError::InvalidArg {
                what: "logarithmic sweep needs positive bounds",
            });
        }

        Ok(Self {
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => linspace(self.start, self.end, self.num_points),
            SweepType::Logarithmic => {
                logspace(self.start.log10(), self.end.log10(), self.num_points)
                    .into_iter()
                    .enumerate()
                    // Ensure exact endpoints
                    .map(|(i, v)| match i {
                        0 => self.start,
                        i if i == self.num_points - 1 => self.end,
                        _ => v,
                    })
                    .collect()
            }
        }
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logarithmic => write!(f, "logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sweep from {:.5e} to {:.5e} ({} points, {})",
            self.start, self.end, self.num_points, self.sweep_type
        )
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (end - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * delta).collect();
            points[n - 1] = end;
            points
        }
    }
}

/// `n` values `10^e` with `e` evenly spaced from `start_exp` to `end_exp`.
pub fn logspace(start_exp: f64, end_exp: f64, n: usize) -> Vec<f64> {
    linspace(start_exp, end_exp, n)
        .into_iter()
        .map(|e| 10f64.powf(e))
        .collect()
}

/// Outcome of one central density.
#[derive(Debug)]
pub struct SweepPoint {
    /// [g/cm³]
    pub central_density: f64,
    pub outcome: SolverResult<SurfaceValues>,
}

/// Result of a mass-radius sweep, one point per requested density, in order.
#[derive(Debug)]
pub struct SweepResult {
    pub points: Vec<SweepPoint>,
    /// Number of successful runs
    pub num_successful: usize,
    /// Number of failed runs
    pub num_failed: usize,
}

impl SweepResult {
    /// Surface values of the successful runs, in sweep order.
    pub fn curve(&self) -> MassRadiusCurve {
        self.points
            .iter()
            .filter_map(|p| p.outcome.as_ref().ok())
            .copied()
            .collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = (f64, &SolverError)> + '_ {
        self.points
            .iter()
            .filter_map(|p| p.outcome.as_ref().err().map(|e| (p.central_density, e)))
    }
}

/// Mass-radius relation of one EOS family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MassRadiusCurve {
    /// [g/cm³]; NaN when unknown (curves read back from text tables)
    #[serde(with = "nan_as_null")]
    pub central_density: Vec<f64>,
    /// [M☉]
    pub mass_solar: Vec<f64>,
    /// [km]
    pub radius_km: Vec<f64>,
}

impl MassRadiusCurve {
    pub fn push(&mut self, s: SurfaceValues) {
        self.central_density.push(s.central_density);
        self.mass_solar.push(s.mass_solar);
        self.radius_km.push(s.radius_km);
    }

    pub fn len(&self) -> usize {
        self.mass_solar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass_solar.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SurfaceValues> + '_ {
        self.central_density
            .iter()
            .zip(&self.mass_solar)
            .zip(&self.radius_km)
            .map(|((&central_density, &mass_solar), &radius_km)| SurfaceValues {
                central_density,
                radius_km,
                mass_solar,
            })
    }

    /// The heaviest model on the curve.
    pub fn max_mass(&self) -> Option<SurfaceValues> {
        self.iter().max_by(|a, b| a.mass_solar.total_cmp(&b.mass_solar))
    }
}

impl FromIterator<SurfaceValues> for MassRadiusCurve {
    fn from_iter<I: IntoIterator<Item = SurfaceValues>>(iter: I) -> Self {
        let mut curve = Self::default();
        for s in iter {
            curve.push(s);
        }
        curve
    }
}

/// JSON has no NaN; unknown entries are stored as `null`.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], s: S) -> Result<S::Ok, S::Error> {
        let opt: Vec<Option<f64>> = values
            .iter()
            .map(|&v| if v.is_nan() { None } else { Some(v) })
            .collect();
        opt.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f64>, D::Error> {
        let opt = Vec::<Option<f64>>::deserialize(d)?;
        Ok(opt.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }
}

/// Integrate one star per central density [g/cm³].
///
/// Failed runs are recorded in the result rather than aborting the sweep.
pub fn run_mass_radius_sweep<E: Eos + Sync + ?Sized>(
    eos: &E,
    central_densities: &[f64],
    opts: &SolveOptions,
) -> SweepResult {
    let points: Vec<SweepPoint> = central_densities
        .par_iter()
        .map(|&central_density| SweepPoint {
            central_density,
            outcome: solve_star(eos, central_density, opts).map(|t| t.surface()),
        })
        .collect();

    let num_successful = points.iter().filter(|p| p.outcome.is_ok()).count();
    let num_failed = points.len() - num_successful;

    for p in &points {
        if let Err(e) = &p.outcome {
            tracing::warn!(central_density = p.central_density, error = %e, "sweep point failed");
        }
    }
    tracing::info!(
        requested = points.len(),
        num_successful,
        num_failed,
        "mass-radius sweep finished"
    );

    SweepResult {
        points,
        num_successful,
        num_failed,
    }
}

/// Run a sweep from its definition.
pub fn execute_sweep<E: Eos + Sync + ?Sized>(
    eos: &E,
    sweep_def: &SweepDefinition,
    opts: &SolveOptions,
) -> SweepResult {
    run_mass_radius_sweep(eos, &sweep_def.generate_points(), opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_sweep_generation() {
        let sweep = SweepDefinition::new(300.0, 400.0, 5, SweepType::Linear).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 300.0).abs() < 1e-9);
        assert!((points[2] - 350.0).abs() < 1e-9);
        assert_eq!(points[4], 400.0);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = SweepDefinition::new(1e5, 1e6, 3, SweepType::Logarithmic).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points, vec![1e5, points[1], 1e6]);
        let expected_mid = (1e5_f64 * 1e6_f64).sqrt();
        assert!((points[1] - expected_mid).abs() / expected_mid < 1e-9);
    }

    #[test]
    fn logspace_matches_powers_of_ten() {
        let v = logspace(2.0, 4.0, 3);
        assert!((v[0] - 100.0).abs() < 1e-9);
        assert!((v[1] - 1000.0).abs() < 1e-9);
        assert!((v[2] - 10000.0).abs() < 1e-6);
    }

    #[test]
    fn reject_invalid_point_count() {
        assert!(SweepDefinition::new(300.0, 400.0, 1, SweepType::Linear).is_err());
    }

    #[test]
    fn reject_identical_bounds() {
        assert!(SweepDefinition::new(300.0, 300.0, 5, SweepType::Linear).is_err());
    }

    #[test]
    fn reject_non_positive_log_bounds() {
        assert!(SweepDefinition::new(0.0, 10.0, 5, SweepType::Logarithmic).is_err());
        assert!(SweepDefinition::new(0.0, 10.0, 5, SweepType::Linear).is_ok());
    }

    #[test]
    fn curve_collects_and_finds_max() {
        let curve: MassRadiusCurve = [
            SurfaceValues {
                central_density: 1.0,
                radius_km: 14.0,
                mass_solar: 1.2,
            },
            SurfaceValues {
                central_density: 2.0,
                radius_km: 12.0,
                mass_solar: 2.1,
            },
            SurfaceValues {
                central_density: 3.0,
                radius_km: 10.0,
                mass_solar: 1.9,
            },
        ]
        .into_iter()
        .collect();
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.max_mass().unwrap().central_density, 2.0);
        assert_eq!(curve.iter().nth(2).unwrap().radius_km, 10.0);
    }
}
