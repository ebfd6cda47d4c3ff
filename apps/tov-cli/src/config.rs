//! YAML run configuration for mass-radius sweeps.
//!
//! ```yaml
//! eos: eos/sly.dat
//! dr: 100.0
//! sweep:
//!   from: 112.2      # MeV/fm³
//!   to: 1584.9
//!   points: 100
//!   spacing: logarithmic
//! output: mass_radius.dat
//! ```

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tov_solver::SweepType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// EOS table; the positional CLI argument wins when both are given
    #[serde(default)]
    pub eos: Option<PathBuf>,
    /// Radial step [cm]
    #[serde(default = "default_dr")]
    pub dr: f64,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    #[serde(default)]
    pub sweep: DensityRange,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub json: Option<PathBuf>,
}

/// Central energy densities in MeV/fm³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DensityRange {
    pub from: f64,
    pub to: f64,
    pub points: usize,
    #[serde(default)]
    pub spacing: SweepType,
}

fn default_dr() -> f64 {
    100.0
}

fn default_max_steps() -> usize {
    1_000_000
}

impl Default for DensityRange {
    fn default() -> Self {
        // 10^2.05 .. 10^3.2 MeV/fm³
        Self {
            from: 10f64.powf(2.05),
            to: 10f64.powf(3.2),
            points: 100,
            spacing: SweepType::Logarithmic,
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            eos: None,
            dr: default_dr(),
            max_steps: default_max_steps(),
            sweep: DensityRange::default(),
            output: None,
            json: None,
        }
    }
}

impl SweepConfig {
    pub fn from_yaml(text: &str, path: &Path) -> AppResult<Self> {
        serde_yaml::from_str(text).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text, path)
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct SweepOverrides {
    pub eos: Option<PathBuf>,
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub points: Option<usize>,
    pub log: bool,
    pub linear: bool,
    pub dr: Option<f64>,
    pub output: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

impl SweepOverrides {
    pub fn apply(self, mut cfg: SweepConfig) -> SweepConfig {
        if self.eos.is_some() {
            cfg.eos = self.eos;
        }
        if let Some(from) = self.from {
            cfg.sweep.from = from;
        }
        if let Some(to) = self.to {
            cfg.sweep.to = to;
        }
        if let Some(points) = self.points {
            cfg.sweep.points = points;
        }
        if self.log {
            cfg.sweep.spacing = SweepType::Logarithmic;
        } else if self.linear {
            cfg.sweep.spacing = SweepType::Linear;
        }
        if let Some(dr) = self.dr {
            cfg.dr = dr;
        }
        if self.output.is_some() {
            cfg.output = self.output;
        }
        if self.json.is_some() {
            cfg.json = self.json;
        }
        cfg
    }
}
