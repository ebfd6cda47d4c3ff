//! Plain-text tables: tab-separated columns under a `#` header line.

use crate::{ResultsError, ResultsResult};
use std::io::{BufRead, Write};
use tov_solver::{MassRadiusCurve, StellarTrajectory, SurfaceValues};

pub const MASS_RADIUS_HEADER: &str = "# Mass [M/Msun] \t Radius [km]";

/// One `mass \t radius` row per model, in curve order.
pub fn write_mass_radius_table<W: Write>(
    mut writer: W,
    curve: &MassRadiusCurve,
) -> ResultsResult<()> {
    writeln!(writer, "{MASS_RADIUS_HEADER}")?;
    for s in curve.iter() {
        writeln!(writer, "{} \t {}", s.mass_solar, s.radius_km)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read back a table written by [`write_mass_radius_table`].
///
/// The file carries no central densities, so those come back as NaN.
pub fn read_mass_radius_table<R: BufRead>(reader: R) -> ResultsResult<MassRadiusCurve> {
    let mut curve = MassRadiusCurve::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut cols = trimmed.split_whitespace().map(|tok| {
            tok.parse::<f64>().map_err(|e| ResultsError::Parse {
                line: idx + 1,
                message: format!("'{tok}': {e}"),
            })
        });
        let (Some(mass), Some(radius)) = (cols.next(), cols.next()) else {
            return Err(ResultsError::Parse {
                line: idx + 1,
                message: "expected mass and radius columns".to_string(),
            });
        };

        curve.push(SurfaceValues {
            central_density: f64::NAN,
            radius_km: radius?,
            mass_solar: mass?,
        });
    }

    Ok(curve)
}

/// Radius, pressure and enclosed mass of one model.
pub fn write_profile_table<W: Write>(
    mut writer: W,
    trajectory: &StellarTrajectory,
) -> ResultsResult<()> {
    writeln!(
        writer,
        "# Radius [km] \t Pressure [{}] \t Mass [M/Msun]",
        trajectory.pressure_unit().symbol()
    )?;
    for (r, p, m) in trajectory.rows() {
        writeln!(writer, "{r} \t {p} \t {m}")?;
    }
    writer.flush()?;
    Ok(())
}
