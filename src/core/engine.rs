use std::f64::consts::PI;

use super::types::{
    Inputs, InvalidConfiguration, ScenarioOutcome, ScenarioReport, SimulationReport, SubjectKind,
};

const SCENARIO_ORDER: [(SubjectKind, bool); 4] = [
    (SubjectKind::Baseline, false),
    (SubjectKind::NavaSet, false),
    (SubjectKind::Baseline, true),
    (SubjectKind::NavaSet, true),
];

pub fn run_scenarios(inputs: &Inputs) -> Result<SimulationReport, InvalidConfiguration> {
    validate_inputs(inputs)?;

    let mut scenarios = Vec::with_capacity(SCENARIO_ORDER.len());
    for (kind, hostile) in SCENARIO_ORDER {
        let mut rng = Rng::new(derive_seed(inputs.seed, kind, hostile));
        let outcome = simulate(inputs, kind, hostile, &mut rng)?;
        scenarios.push(ScenarioReport {
            kind,
            hostile,
            label: scenario_label(kind, hostile),
            lifespan: outcome.lifespan,
            avg_health: outcome.avg_health,
        });
    }

    Ok(SimulationReport {
        max_years: inputs.max_years,
        death_threshold: inputs.death_threshold,
        seed: inputs.seed,
        scenarios,
    })
}

pub fn simulate(
    inputs: &Inputs,
    kind: SubjectKind,
    hostile: bool,
    rng: &mut Rng,
) -> Result<ScenarioOutcome, InvalidConfiguration> {
    validate_inputs(inputs)?;

    let health = simulate_health(inputs, kind, hostile, rng);
    let avg_health = average_trajectory(&health);
    let lifespan = lifespan_from_average(&avg_health, inputs.death_threshold);
    Ok(ScenarioOutcome {
        avg_health,
        lifespan,
    })
}

pub fn validate_inputs(inputs: &Inputs) -> Result<(), InvalidConfiguration> {
    if inputs.max_years == 0 {
        return Err(InvalidConfiguration::new("max_years must be >= 1"));
    }
    if inputs.base_decay.is_empty() {
        return Err(InvalidConfiguration::new(
            "base_decay must have at least one subsystem entry",
        ));
    }
    if inputs.nava_modifier.len() != inputs.base_decay.len() {
        return Err(InvalidConfiguration::new(format!(
            "nava_modifier has {} entries but base_decay has {}",
            inputs.nava_modifier.len(),
            inputs.base_decay.len()
        )));
    }
    if inputs.base_decay.iter().any(|r| !r.is_finite() || *r < 0.0) {
        return Err(InvalidConfiguration::new(
            "base_decay entries must be finite and >= 0",
        ));
    }
    if inputs.nava_modifier.iter().any(|m| !m.is_finite() || *m <= 0.0) {
        return Err(InvalidConfiguration::new(
            "nava_modifier entries must be finite and > 0",
        ));
    }
    if !inputs.death_threshold.is_finite() || inputs.death_threshold < 0.0 {
        return Err(InvalidConfiguration::new(
            "death_threshold must be finite and >= 0",
        ));
    }
    if !inputs.stress_mean.is_finite() {
        return Err(InvalidConfiguration::new("stress_mean must be finite"));
    }
    if !inputs.stress_vol.is_finite() || inputs.stress_vol < 0.0 {
        return Err(InvalidConfiguration::new(
            "stress_vol must be finite and >= 0",
        ));
    }
    if !inputs.nava_stress_share.is_finite() || inputs.nava_stress_share < 0.0 {
        return Err(InvalidConfiguration::new(
            "nava_stress_share must be finite and >= 0",
        ));
    }
    Ok(())
}

fn scenario_label(kind: SubjectKind, hostile: bool) -> String {
    if hostile {
        format!("{} in hostile world", kind.label())
    } else {
        kind.label().to_string()
    }
}

fn simulate_health(
    inputs: &Inputs,
    kind: SubjectKind,
    hostile: bool,
    rng: &mut Rng,
) -> Vec<Vec<f64>> {
    let channels = inputs.base_decay.len();
    let years = inputs.max_years as usize;

    let modifier: Vec<f64> = match kind {
        SubjectKind::Baseline => vec![1.0; channels],
        SubjectKind::NavaSet => inputs.nava_modifier.clone(),
    };
    let stress_share = match kind {
        SubjectKind::Baseline => 1.0,
        SubjectKind::NavaSet => inputs.nava_stress_share,
    };

    let mut health = Vec::with_capacity(years);
    health.push(vec![1.0; channels]);

    for year in 1..years {
        let mut snapshot = vec![0.0; channels];
        for channel in 0..channels {
            let mut decay = inputs.base_decay[channel] * modifier[channel];
            if hostile {
                decay += stress_share * sample_stress(inputs, rng);
            }
            snapshot[channel] = (health[year - 1][channel] - decay).clamp(0.0, 1.0);
        }
        health.push(snapshot);
    }

    health
}

fn average_trajectory(health: &[Vec<f64>]) -> Vec<f64> {
    health
        .iter()
        .map(|snapshot| snapshot.iter().sum::<f64>() / snapshot.len() as f64)
        .collect()
}

// Index 0 is full health by construction; a crossing there only happens when
// the threshold exceeds 1.0, hence the floor of one year.
fn lifespan_from_average(avg_health: &[f64], death_threshold: f64) -> u32 {
    match avg_health.iter().position(|&h| h < death_threshold) {
        Some(year) => year.max(1) as u32,
        None => avg_health.len() as u32,
    }
}

fn sample_stress(inputs: &Inputs, rng: &mut Rng) -> f64 {
    inputs.stress_mean + inputs.stress_vol * rng.standard_normal()
}

fn derive_seed(base_seed: u64, kind: SubjectKind, hostile: bool) -> u64 {
    let kind_tag = match kind {
        SubjectKind::Baseline => 0u64,
        SubjectKind::NavaSet => 1u64,
    };
    let tag = kind_tag | ((hostile as u64) << 1);
    splitmix64(base_seed ^ (tag << 32))
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

pub struct Rng {
    state: u64,
    cached_normal: Option<f64>,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 {
            0xA5A5_A5A5_A5A5_A5A5
        } else {
            seed
        };
        Self {
            state,
            cached_normal: None,
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    fn next_f64(&mut self) -> f64 {
        const DENOM: f64 = (1_u64 << 53) as f64;
        let v = self.next_u64() >> 11;
        ((v as f64) + 0.5) / DENOM
    }

    fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.cached_normal.take() {
            return z;
        }

        let u1 = self.next_f64().max(1e-12);
        let u2 = self.next_f64();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        let z0 = r * theta.cos();
        let z1 = r * theta.sin();
        self.cached_normal = Some(z1);
        z0
    }
}
