use std::fmt;

use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubjectKind {
    Baseline,
    NavaSet,
}

impl SubjectKind {
    pub fn label(self) -> &'static str {
        match self {
            SubjectKind::Baseline => "Baseline",
            SubjectKind::NavaSet => "Nava Set",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Inputs {
    pub max_years: u32,
    pub death_threshold: f64,
    pub base_decay: Vec<f64>,
    pub nava_modifier: Vec<f64>,
    pub stress_mean: f64,
    pub stress_vol: f64,
    pub nava_stress_share: f64,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub avg_health: Vec<f64>,
    pub lifespan: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    pub kind: SubjectKind,
    pub hostile: bool,
    pub label: String,
    pub lifespan: u32,
    pub avg_health: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub max_years: u32,
    pub death_threshold: f64,
    pub seed: u64,
    pub scenarios: Vec<ScenarioReport>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidConfiguration {
    message: String,
}

impl InvalidConfiguration {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl std::error::Error for InvalidConfiguration {}
