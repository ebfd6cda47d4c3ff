//! tov-core: stable foundation for tovstar.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - constants (physical constants and unit-conversion factors)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::PhysicalConstants;
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
