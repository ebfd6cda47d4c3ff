//! StructureModel trait for radially integrated systems.

use crate::error::SolverResult;

/// A system of first-order ODEs in the radial coordinate.
///
/// A StructureModel must implement:
/// - State type (Clone, for recording)
/// - RHS computation: dx/dr = f(r, x)
/// - Vector arithmetic for integration: add states, scale by scalar
///
/// Models are evaluated through `&self`; a run never mutates the model, so one model
/// (and the EOS behind it) can back any number of runs.
pub trait StructureModel {
    type State: Clone;

    /// Compute the state derivative dx/dr = f(r, x).
    fn rhs(&self, r: f64, x: &Self::State) -> SolverResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;
}
