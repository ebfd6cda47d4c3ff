mod config;
mod error;

use clap::{Parser, Subcommand};
use config::{SweepConfig, SweepOverrides};
use error::{AppError, AppResult};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tov_core::PhysicalConstants;
use tov_eos::{Eos, EquationOfState, read_eos_table};
use tov_results::{save_curve_json, write_mass_radius_table, write_profile_table};
use tov_solver::{PressureUnit, SolveOptions, SweepDefinition, execute_sweep, solve_star_mev};

#[derive(Parser)]
#[command(name = "tov-cli")]
#[command(about = "TOV CLI - Neutron star structure from tabulated equations of state", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the validity envelope of an EOS table
    Eos {
        /// Path to the EOS table (MeV/fm³ columns)
        table: PathBuf,
    },
    /// Integrate a single star
    Solve {
        /// Path to the EOS table (MeV/fm³ columns)
        table: PathBuf,
        /// Central energy density in MeV/fm³
        #[arg(long)]
        density: f64,
        /// Radial step in cm
        #[arg(long, default_value_t = 100.0)]
        dr: f64,
        /// Report pressure in Pa instead of Ba
        #[arg(long)]
        si: bool,
        /// Write the radial profile to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute a mass-radius curve over a range of central densities
    Sweep {
        /// Path to the EOS table; falls back to `eos` in the config file
        table: Option<PathBuf>,
        /// YAML run configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// First central energy density in MeV/fm³
        #[arg(long)]
        from: Option<f64>,
        /// Last central energy density in MeV/fm³
        #[arg(long)]
        to: Option<f64>,
        /// Number of central densities
        #[arg(long)]
        points: Option<usize>,
        /// Space the densities logarithmically
        #[arg(long, conflicts_with = "linear")]
        log: bool,
        /// Space the densities uniformly
        #[arg(long)]
        linear: bool,
        /// Radial step in cm
        #[arg(long)]
        dr: Option<f64>,
        /// Mass-radius table output (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also save the curve as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing; RUST_LOG selects the level
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eos { table } => cmd_eos(&table),
        Commands::Solve {
            table,
            density,
            dr,
            si,
            output,
        } => cmd_solve(&table, density, dr, si, output.as_deref()),
        Commands::Sweep {
            table,
            config,
            from,
            to,
            points,
            log,
            linear,
            dr,
            output,
            json,
        } => {
            let cfg = match &config {
                Some(path) => SweepConfig::load(path)?,
                None => SweepConfig::default(),
            };
            let cfg = SweepOverrides {
                eos: table,
                from,
                to,
                points,
                log,
                linear,
                dr,
                output,
                json,
            }
            .apply(cfg);
            cmd_sweep(&cfg)
        }
    }
}

fn load_eos(path: &Path, constants: &PhysicalConstants) -> AppResult<EquationOfState> {
    let table = read_eos_table(path)?;
    Ok(EquationOfState::from_table(&table, constants)?)
}

fn cmd_eos(table_path: &Path) -> AppResult<()> {
    let constants = PhysicalConstants::cgs();
    let eos = load_eos(table_path, &constants)?;
    let b = eos.bounds();
    let (dp, drho) = eos.interpolation_residuals();

    println!("EOS table: {}", table_path.display());
    println!("  samples: {}", eos.len());
    println!(
        "  energy density: {:.6e} .. {:.6e} MeV/fm³ ({:.6e} .. {:.6e} g/cm³)",
        constants.density_to_mev_fm3(b.min_density),
        constants.density_to_mev_fm3(b.max_density),
        b.min_density,
        b.max_density
    );
    println!(
        "  pressure:       {:.6e} .. {:.6e} MeV/fm³ ({:.6e} .. {:.6e} Ba)",
        constants.pressure_to_mev_fm3(b.min_pressure),
        constants.pressure_to_mev_fm3(b.max_pressure),
        b.min_pressure,
        b.max_pressure
    );
    println!("  interpolation residuals: {dp:.3e} Ba, {drho:.3e} g/cm³");
    Ok(())
}

fn cmd_solve(
    table_path: &Path,
    density_mev: f64,
    dr: f64,
    si: bool,
    output: Option<&Path>,
) -> AppResult<()> {
    let constants = PhysicalConstants::cgs();
    let eos = load_eos(table_path, &constants)?;
    let opts = SolveOptions {
        dr,
        pressure_unit: if si { PressureUnit::Si } else { PressureUnit::Cgs },
        constants,
        ..SolveOptions::default()
    };

    let started = Instant::now();
    let star = solve_star_mev(&eos, density_mev, &opts)?;

    println!("✓ Reached surface after {} steps", star.len() - 1);
    println!("  central density: {density_mev} MeV/fm³");
    println!(
        "  central pressure: {:.6e} {}",
        star.central_pressure(),
        star.pressure_unit().symbol()
    );
    println!("  radius: {:.4} km", star.surface_radius_km());
    println!("  mass:   {:.4} M☉", star.total_mass_solar());
    println!("  elapsed: {:.2?}", started.elapsed());

    if let Some(path) = output {
        write_profile_table(BufWriter::new(File::create(path)?), &star)?;
        println!("✓ Profile written to {}", path.display());
    }
    Ok(())
}

fn cmd_sweep(cfg: &SweepConfig) -> AppResult<()> {
    let Some(table_path) = cfg.eos.as_deref() else {
        return Err(AppError::InvalidInput(
            "no EOS table given on the command line or in the config".to_string(),
        ));
    };
    let constants = PhysicalConstants::cgs();
    let eos = load_eos(table_path, &constants)?;

    let range = &cfg.sweep;
    let sweep = SweepDefinition::new(
        constants.density_from_mev_fm3(range.from),
        constants.density_from_mev_fm3(range.to),
        range.points,
        range.spacing,
    )?;
    let opts = SolveOptions {
        dr: cfg.dr,
        max_steps: cfg.max_steps,
        constants,
        ..SolveOptions::default()
    };

    eprintln!("Running {sweep}");
    let started = Instant::now();
    let result = execute_sweep(&eos, &sweep, &opts);
    let curve = result.curve();

    for (rho, err) in result.failures() {
        eprintln!(
            "  ✗ {:.4e} MeV/fm³: {err}",
            constants.density_to_mev_fm3(rho)
        );
    }
    eprintln!(
        "✓ {} of {} models in {:.2?}",
        result.num_successful,
        result.points.len(),
        started.elapsed()
    );
    if let Some(max) = curve.max_mass() {
        eprintln!(
            "  maximum mass: {:.4} M☉ at {:.4} km",
            max.mass_solar, max.radius_km
        );
    }

    match &cfg.output {
        Some(path) => {
            write_mass_radius_table(BufWriter::new(File::create(path)?), &curve)?;
            eprintln!("✓ Table written to {}", path.display());
        }
        None => write_mass_radius_table(std::io::stdout().lock(), &curve)?,
    }
    if let Some(path) = &cfg.json {
        save_curve_json(path, &curve)?;
        eprintln!("✓ Curve saved to {}", path.display());
    }
    Ok(())
}
