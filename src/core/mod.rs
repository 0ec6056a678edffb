mod engine;
mod types;

pub use engine::{Rng, run_scenarios, simulate, validate_inputs};
pub use types::{
    Inputs, InvalidConfiguration, ScenarioOutcome, ScenarioReport, SimulationReport, SubjectKind,
};
