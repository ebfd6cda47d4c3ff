//! JSON storage of mass-radius curves.

use crate::ResultsResult;
use std::fs;
use std::path::Path;
use tov_solver::MassRadiusCurve;

pub fn save_curve_json(path: &Path, curve: &MassRadiusCurve) -> ResultsResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(curve)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_curve_json(path: &Path) -> ResultsResult<MassRadiusCurve> {
    let content = fs::read_to_string(path)?;
    let curve = serde_json::from_str(&content)?;
    Ok(curve)
}
