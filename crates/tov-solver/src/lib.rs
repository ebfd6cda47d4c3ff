//! Stellar-structure integration for tovstar.
//!
//! Provides:
//! - Tolman–Oppenheimer–Volkoff equations over any `Eos`
//! - Fixed-step RK4 integrator behind the `Integrator` trait
//! - Single-star runs (`StarIntegration`, `solve_star`) ending at the surface
//! - Parallel mass-radius sweeps over central density

pub mod equations;
pub mod error;
pub mod integrator;
pub mod model;
pub mod star;
pub mod sweep;
pub mod trajectory;

// Re-exports for public API
pub use equations::{StellarState, TovEquations};
pub use error::{SolverError, SolverResult};
pub use integrator::{Integrator, Rk4};
pub use model::StructureModel;
pub use star::{RunPhase, SolveOptions, StarIntegration, solve_star, solve_star_mev};
pub use sweep::{
    MassRadiusCurve, SweepDefinition, SweepPoint, SweepResult, SweepType, execute_sweep,
    linspace, logspace, run_mass_radius_sweep,
};
pub use trajectory::{PressureUnit, StellarTrajectory, SurfaceValues};
