//! Whitespace-delimited EOS tables.
//!
//! Columns: energy density, pressure, and optionally number density, all in
//! nuclear units (MeV/fm³, MeV/fm³, 1/fm³). Blank lines and `#` comments are
//! skipped.

use crate::error::{EosError, EosResult};
use std::fs;
use std::path::Path;

/// Raw columns of an EOS table, ordered by increasing energy density.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EosTable {
    pub energy_density: Vec<f64>,
    pub pressure: Vec<f64>,
    /// Present only when every row carries a third column
    pub number_density: Option<Vec<f64>>,
}

impl EosTable {
    pub fn len(&self) -> usize {
        self.energy_density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy_density.is_empty()
    }
}

pub fn parse_eos_table(text: &str) -> EosResult<EosTable> {
    let mut table = EosTable::default();
    let mut number_density = Vec::new();
    let mut all_have_third = true;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let values = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>().map_err(|e| EosError::Parse {
                    line: idx + 1,
                    message: format!("'{tok}': {e}"),
                })
            })
            .collect::<EosResult<Vec<f64>>>()?;

        if values.len() < 2 {
            return Err(EosError::Parse {
                line: idx + 1,
                message: format!("expected at least 2 columns, found {}", values.len()),
            });
        }

        table.energy_density.push(values[0]);
        table.pressure.push(values[1]);
        match values.get(2) {
            Some(&n) => number_density.push(n),
            None => all_have_third = false,
        }
    }

    if all_have_third && !number_density.is_empty() {
        table.number_density = Some(number_density);
    }

    // Some tables list the crust last
    let n = table.len();
    if n > 1 && table.energy_density[0] > table.energy_density[n - 1] {
        table.energy_density.reverse();
        table.pressure.reverse();
        if let Some(nd) = table.number_density.as_mut() {
            nd.reverse();
        }
    }

    Ok(table)
}

pub fn read_eos_table(path: &Path) -> EosResult<EosTable> {
    let text = fs::read_to_string(path).map_err(|source| EosError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_eos_table(&text)?;
    tracing::info!(path = %path.display(), rows = table.len(), "loaded EOS table");
    Ok(table)
}
