//! tov-eos: equations of state for stellar-structure integration.
//!
//! Provides:
//! - `Eos` trait: density/pressure lookups plus validity envelope
//! - Tabulated EOS (`EquationOfState`) with not-a-knot cubic interpolants
//! - Analytic polytrope (`PolytropicEos`)
//! - Loader for whitespace-delimited nuclear EOS tables
//!
//! All quantities past the constructors are CGS: energy density in g/cm³
//! (energy density divided by c²) and pressure in Ba.
//!
//! # Example
//!
//! ```
//! use tov_core::PhysicalConstants;
//! use tov_eos::{Eos, EosUnits, EquationOfState};
//!
//! let eos = EquationOfState::new(
//!     &[1.0, 2.0, 3.0, 4.0, 5.0],
//!     &[1.0, 4.0, 9.0, 16.0, 25.0],
//!     EosUnits::Cgs,
//!     &PhysicalConstants::cgs(),
//! )
//! .unwrap();
//! assert_eq!(eos.pressure_at(3.0), 9.0);
//! assert!(eos.check_density_in_range(6.0).is_err());
//! ```

pub mod error;
pub mod loader;
pub mod model;
pub mod polytrope;
pub mod spline;
pub mod tabulated;

// Re-exports for ergonomics
pub use error::{EosError, EosResult};
pub use loader::{EosTable, parse_eos_table, read_eos_table};
pub use model::{Eos, EosBounds};
pub use polytrope::PolytropicEos;
pub use spline::CubicSpline;
pub use tabulated::{EosUnits, EquationOfState};
