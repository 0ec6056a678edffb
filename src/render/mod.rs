use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::core::{ScenarioReport, SimulationReport};

pub const BENIGN_CHART_FILE: &str = "baseline_vs_nava.png";
pub const HOSTILE_CHART_FILE: &str = "hostile_environment.png";

pub fn render_environment_charts(
    out_dir: &Path,
    report: &SimulationReport,
) -> Result<(), Box<dyn Error>> {
    let benign: Vec<&ScenarioReport> = report.scenarios.iter().filter(|s| !s.hostile).collect();
    let hostile: Vec<&ScenarioReport> = report.scenarios.iter().filter(|s| s.hostile).collect();

    render_health_chart(
        &out_dir.join(BENIGN_CHART_FILE),
        "System Health: Baseline vs Nava Set",
        &benign,
        report.death_threshold,
    )?;
    render_health_chart(
        &out_dir.join(HOSTILE_CHART_FILE),
        "System Health Under Environmental Stress",
        &hostile,
        report.death_threshold,
    )?;
    Ok(())
}

fn render_health_chart(
    out_path: &Path,
    title: &str,
    scenarios: &[&ScenarioReport],
    death_threshold: f64,
) -> Result<(), Box<dyn Error>> {
    let horizon = scenarios
        .iter()
        .map(|s| s.avg_health.len())
        .max()
        .unwrap_or(0);
    if horizon == 0 {
        return Ok(());
    }

    let root = BitMapBackend::new(out_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..horizon as f64, 0.0f64..1.05f64)?;

    chart
        .configure_mesh()
        .x_desc("Age (Years)")
        .y_desc("Average System Health")
        .draw()?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, death_threshold), (horizon as f64, death_threshold)],
            RED.mix(0.6),
        )))?
        .label(format!("Death Threshold ({death_threshold:.2})"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.mix(0.6)));

    for (i, scenario) in scenarios.iter().enumerate() {
        let color = Palette99::pick(i).mix(0.9);
        let points = scenario
            .avg_health
            .iter()
            .enumerate()
            .map(|(year, &h)| (year as f64, h))
            .collect::<Vec<(f64, f64)>>();
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(format!("{} ({} yrs)", scenario.label, scenario.lifespan))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
