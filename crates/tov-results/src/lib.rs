//! tov-results: archival formats for stellar models and mass-radius curves.

pub mod store;
pub mod table;

pub use store::{load_curve_json, save_curve_json};
pub use table::{read_mass_radius_table, write_mass_radius_table, write_profile_table};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Table line {line}: {message}")]
    Parse { line: usize, message: String },
}
