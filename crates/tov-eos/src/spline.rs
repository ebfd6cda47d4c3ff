//! Not-a-knot cubic spline.
//!
//! The second derivatives at the knots come from one dense LU solve; evaluation
//! uses the standard second-derivative form on the bracketing interval. Knots are
//! normalised onto `[0, 1]` so tables spanning many decades (CGS pressures reach
//! 1e36 Ba) stay well conditioned.

use crate::error::{EosError, EosResult};
use nalgebra::{DMatrix, DVector};
use tov_core::is_strictly_increasing;

/// Minimum knot count; with fewer points the not-a-knot conditions are degenerate.
pub const MIN_KNOTS: usize = 4;

/// Cubic interpolant through `(x_i, y_i)` with continuous third derivative at the
/// second and second-to-last knots.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x_min: f64,
    x_max: f64,
    /// Knot abscissae mapped onto [0, 1]
    u: Vec<f64>,
    y: Vec<f64>,
    /// Second derivatives w.r.t. the normalised abscissa
    m: Vec<f64>,
}

impl CubicSpline {
    pub fn not_a_knot(x: &[f64], y: &[f64]) -> EosResult<Self> {
        let n = x.len();
        if n != y.len() {
            return Err(EosError::construction(format!(
                "spline abscissae and ordinates differ in length ({} vs {})",
                n,
                y.len()
            )));
        }
        if n < MIN_KNOTS {
            return Err(EosError::construction(format!(
                "cubic spline needs at least {MIN_KNOTS} knots, got {n}"
            )));
        }
        if !is_strictly_increasing(x) {
            return Err(EosError::construction(
                "spline abscissae must be strictly increasing",
            ));
        }

        let x_min = x[0];
        let x_max = x[n - 1];
        let span = x_max - x_min;
        let u: Vec<f64> = x.iter().map(|&xi| (xi - x_min) / span).collect();
        let h: Vec<f64> = u.windows(2).map(|w| w[1] - w[0]).collect();

        let mut a = DMatrix::<f64>::zeros(n, n);
        let mut rhs = DVector::<f64>::zeros(n);

        // Third derivative continuous across u[1]
        a[(0, 0)] = h[1];
        a[(0, 1)] = -(h[0] + h[1]);
        a[(0, 2)] = h[0];

        for i in 1..n - 1 {
            a[(i, i - 1)] = h[i - 1];
            a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
            a[(i, i + 1)] = h[i];
            let slope_right = (y[i + 1] - y[i]) / h[i];
            let slope_left = (y[i] - y[i - 1]) / h[i - 1];
            rhs[i] = 6.0 * (slope_right - slope_left);
        }

        // Third derivative continuous across u[n-2]
        a[(n - 1, n - 3)] = h[n - 2];
        a[(n - 1, n - 2)] = -(h[n - 3] + h[n - 2]);
        a[(n - 1, n - 1)] = h[n - 3];

        let m = a
            .lu()
            .solve(&rhs)
            .ok_or_else(|| EosError::construction("singular spline system"))?;

        if m.iter().any(|v| !v.is_finite()) {
            return Err(EosError::construction("spline coefficients are not finite"));
        }

        Ok(Self {
            x_min,
            x_max,
            u,
            y: y.to_vec(),
            m: m.iter().copied().collect(),
        })
    }

    /// Interpolated value at `x`.
    ///
    /// Only meaningful on [`domain`](Self::domain); outside it the end polynomial is
    /// extrapolated.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.u.len();
        let t = (x - self.x_min) / (self.x_max - self.x_min);

        let hi = match self.u.partition_point(|&v| v < t) {
            i if i >= n => n - 1,
            0 => 1,
            i => i,
        };
        let lo = hi - 1;

        let diff = self.u[hi] - self.u[lo];
        let a = (self.u[hi] - t) / diff;
        let b = (t - self.u[lo]) / diff;

        a * self.y[lo]
            + b * self.y[hi]
            + (diff * diff / 6.0)
                * ((a * a - 1.0) * a * self.m[lo] + (b * b - 1.0) * b * self.m[hi])
    }

    /// Closed interval `[x_min, x_max]` covered by the knots.
    pub fn domain(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }
}
