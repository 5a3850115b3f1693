// Copyright contributors to the Three-Qubit Code project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The 3-qubit bit-flip code run against a fixed set of error scenarios.
//!
//! A logical qubit α|0⟩ + β|1⟩ is spread over `q`, `d0`, `d1` as
//! α|000⟩ + β|111⟩. Two ancillas pick up the parities `q ⊕ d0` and `q ⊕ d1`,
//! and the measured pair names the qubit a single bit flip hit. Gates are
//! assumed perfect; errors only happen between encoding and the checks.

use std::{
    collections::BTreeSet,
    fmt::{Display, Formatter},
};

use bitflip_common::{Syndrome, parity_check::pauli_syndrome};
use bitflip_sim::{
    Circuit, CircuitError, Counts, DEFAULT_SHOTS, QasmSimulator, SimulationError, StateVector,
    StatevectorSimulator,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub mod decoder;
pub mod encoder;
pub mod report;
pub mod scenario;

use decoder::{DecodeError, Diagnosis};
use encoder::{BuildOptions, CodeLayout, LogicalInput};
pub use scenario::ErrorScenario;

/// Settings shared by every scenario of a run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub shots: usize,
    pub seed: Option<u64>,
    pub input: LogicalInput,
    /// Measure every qubit even for scenarios that only need the ancillas.
    pub measure_all: bool,
    /// Apply the decoded correction inside the circuit.
    pub correct: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            shots: DEFAULT_SHOTS,
            seed: None,
            input: LogicalInput::default(),
            measure_all: false,
            correct: false,
        }
    }
}

impl RunConfig {
    pub fn build_options(&self, scenario: ErrorScenario) -> BuildOptions {
        BuildOptions {
            input: self.input,
            measure_all: self.measure_all || scenario.measures_all_by_default(),
            correct: self.correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    Circuit(CircuitError),
    Simulation(SimulationError),
    Decode(DecodeError),
}

impl Display for ScenarioError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Circuit(err) => write!(f, "failed to build circuit: {err}"),
            Self::Simulation(err) => write!(f, "simulation failed: {err}"),
            Self::Decode(err) => write!(f, "failed to decode syndrome: {err}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<CircuitError> for ScenarioError {
    fn from(err: CircuitError) -> Self {
        Self::Circuit(err)
    }
}

impl From<SimulationError> for ScenarioError {
    fn from(err: SimulationError) -> Self {
        Self::Simulation(err)
    }
}

impl From<DecodeError> for ScenarioError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

/// Everything learned from simulating one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub scenario: ErrorScenario,
    pub title: String,
    pub config: RunConfig,
    pub measure_all: bool,
    pub layout: CodeLayout,
    /// Histogram as sampled, highest classical bit first.
    pub counts: Counts,
    pub syndrome: Syndrome,
    pub diagnosis: Diagnosis,
    /// Shots decoding to logical 0 and 1 by majority vote, when data was measured.
    pub logical_readout: Option<[usize; 2]>,
    pub annotation: String,
    #[serde(skip)]
    pub circuit: Circuit,
    #[serde(skip)]
    pub statevector: StateVector,
}

pub fn run_scenario(
    scenario: ErrorScenario,
    config: &RunConfig,
) -> Result<ScenarioReport, ScenarioError> {
    info!("Running scenario: {}", scenario);
    let options = config.build_options(scenario);
    let (circuit, layout) = encoder::build_circuit(scenario, &options)?;

    let statevector = StatevectorSimulator.run(&circuit)?;
    let result = QasmSimulator::new(config.shots, config.seed).run(&circuit)?;
    let counts = result.counts;
    debug!("Counts for {:?}: {}", scenario, counts);

    let observed: BTreeSet<Syndrome> = decoder::observed_syndromes(&counts, &layout)?;
    if observed.len() > 1 {
        warn!(
            "Scenario {:?} produced several syndromes {}; using the most frequent",
            scenario,
            observed
                .iter()
                .map(Syndrome::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    let syndrome = decoder::syndrome_from_counts(&counts, &layout)?;

    let injected = scenario.paulis();
    if let Ok(expected) = pauli_syndrome(&injected) {
        if expected != syndrome {
            warn!(
                "Simulated syndrome {} differs from parity-check syndrome {}",
                syndrome, expected
            );
        }
    }

    let diagnosis = decoder::diagnose(&injected, syndrome);
    debug!("Diagnosis for {:?}: {:?}", scenario, diagnosis);
    let logical_readout = decoder::logical_readout(&counts, &layout)?;

    Ok(ScenarioReport {
        scenario,
        title: scenario.to_string(),
        config: *config,
        measure_all: options.measure_all,
        layout,
        counts,
        syndrome,
        annotation: report::annotation(scenario, &diagnosis),
        diagnosis,
        logical_readout,
        circuit,
        statevector,
    })
}
