use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::core::{Inputs, SimulationReport, run_scenarios};
use crate::render;

#[derive(Parser, Debug)]
#[command(
    name = "nava",
    about = "Subsystem aging simulator: baseline vs Nava Set decay under benign and hostile conditions"
)]
pub struct Cli {
    #[arg(
        long,
        default_value_t = 500,
        help = "Number of simulated years, including year zero at full health"
    )]
    max_years: u32,
    #[arg(
        long,
        default_value_t = 0.25,
        help = "Average health level below which the subject counts as dead"
    )]
    death_threshold: f64,
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = vec![0.01, 0.007, 0.006, 0.005, 0.008, 0.007],
        help = "Per-subsystem fractional health loss per year, comma separated"
    )]
    base_decay: Vec<f64>,
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = vec![0.2, 0.3, 0.3, 0.4, 0.25, 0.3],
        help = "Per-subsystem decay multipliers for the Nava Set subject, comma separated"
    )]
    nava_modifier: Vec<f64>,
    #[arg(
        long,
        default_value_t = 0.002,
        help = "Mean of the yearly hostile-world stress added to decay"
    )]
    stress_mean: f64,
    #[arg(
        long,
        default_value_t = 0.0015,
        help = "Standard deviation of the yearly hostile-world stress"
    )]
    stress_vol: f64,
    #[arg(
        long,
        default_value_t = 0.5,
        help = "Fraction of the hostile stress felt by the Nava Set subject"
    )]
    nava_stress_share: f64,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "figures", help = "Directory for rendered charts")]
    out_dir: PathBuf,
    #[arg(long, help = "Skip chart rendering")]
    no_charts: bool,
    #[arg(long, help = "Write the full report as JSON to this path")]
    summary_json: Option<PathBuf>,
}

fn build_inputs(cli: &Cli) -> Result<Inputs, String> {
    if cli.max_years == 0 {
        return Err("--max-years must be >= 1".to_string());
    }

    if cli.base_decay.is_empty() {
        return Err("--base-decay must list at least one subsystem rate".to_string());
    }

    if cli.nava_modifier.len() != cli.base_decay.len() {
        return Err(format!(
            "--nava-modifier must have the same number of entries as --base-decay ({} vs {})",
            cli.nava_modifier.len(),
            cli.base_decay.len()
        ));
    }

    if cli.base_decay.iter().any(|r| !r.is_finite() || *r < 0.0) {
        return Err("--base-decay entries must be finite and >= 0".to_string());
    }

    if cli.nava_modifier.iter().any(|m| !m.is_finite() || *m <= 0.0) {
        return Err("--nava-modifier entries must be finite and > 0".to_string());
    }

    if !cli.death_threshold.is_finite() || cli.death_threshold < 0.0 {
        return Err("--death-threshold must be finite and >= 0".to_string());
    }

    if !cli.stress_mean.is_finite() {
        return Err("--stress-mean must be finite".to_string());
    }

    if !cli.stress_vol.is_finite() || cli.stress_vol < 0.0 {
        return Err("--stress-vol must be finite and >= 0".to_string());
    }

    if !cli.nava_stress_share.is_finite() || cli.nava_stress_share < 0.0 {
        return Err("--nava-stress-share must be finite and >= 0".to_string());
    }

    Ok(Inputs {
        max_years: cli.max_years,
        death_threshold: cli.death_threshold,
        base_decay: cli.base_decay.clone(),
        nava_modifier: cli.nava_modifier.clone(),
        stress_mean: cli.stress_mean,
        stress_vol: cli.stress_vol,
        nava_stress_share: cli.nava_stress_share,
        seed: cli.seed,
    })
}

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let inputs = build_inputs(&cli)?;
    let report = run_scenarios(&inputs)?;

    if !cli.no_charts {
        fs::create_dir_all(&cli.out_dir)?;
        render::render_environment_charts(&cli.out_dir, &report)?;
        println!("Saved charts to {}", cli.out_dir.display());
    }

    if let Some(path) = &cli.summary_json {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, summary_json(&report)?)?;
        println!("Wrote report to {}", path.display());
    }

    for line in summary_lines(&report) {
        println!("{line}");
    }

    Ok(())
}

fn summary_json(report: &SimulationReport) -> Result<String, serde_json::Error> {
    Ok(format!("{}\n", serde_json::to_string_pretty(report)?))
}

fn summary_lines(report: &SimulationReport) -> Vec<String> {
    report
        .scenarios
        .iter()
        .map(|scenario| format!("{} lifespan: {} years", scenario.label, scenario.lifespan))
        .collect()
}
