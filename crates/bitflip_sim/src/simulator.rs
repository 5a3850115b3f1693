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

use std::fmt::{Display, Formatter};

use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    circuit::{Circuit, CircuitError, Gate},
    counts::Counts,
    statevector::StateVector,
};

/// Number of shots used when none is given.
pub const DEFAULT_SHOTS: usize = 1024;

/// Classical outcomes are packed into a `u64`, one bit per classical bit.
pub const MAX_CLBITS: usize = u64::BITS as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    ZeroShots,
    TooManyClbits { found: usize },
    NonTerminalMeasurement { qubit: usize, gate: Gate },
    Circuit(CircuitError),
}

impl Display for SimulationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroShots => write!(f, "at least one shot is required"),
            Self::TooManyClbits { found } => write!(
                f,
                "circuit has {found} classical bits; at most {MAX_CLBITS} can be sampled"
            ),
            Self::NonTerminalMeasurement { qubit, gate } => write!(
                f,
                "qubit {qubit} is measured before '{gate}'; only terminal measurements are supported"
            ),
            Self::Circuit(err) => write!(f, "invalid circuit: {err}"),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<CircuitError> for SimulationError {
    fn from(err: CircuitError) -> Self {
        Self::Circuit(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub shots: usize,
    pub seed: Option<u64>,
    pub counts: Counts,
}

/// Evolve the state through every unitary gate of the circuit.
///
/// Fails if a gate acts on a qubit after that qubit was measured.
fn evolve(circuit: &Circuit) -> Result<StateVector, SimulationError> {
    let mut state = StateVector::zeros(circuit.num_qubits());
    let mut measured = vec![false; circuit.num_qubits()];
    for gate in circuit.ops() {
        match *gate {
            Gate::Measure { qubit, .. } => measured[qubit] = true,
            Gate::Barrier => {}
            _ => {
                if let Some(qubit) = gate.qubits().into_iter().find(|&q| measured[q]) {
                    return Err(SimulationError::NonTerminalMeasurement { qubit, gate: *gate });
                }
                state.apply(gate);
            }
        }
    }
    Ok(state)
}

/// Samples measurement outcomes of a circuit over many shots.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QasmSimulator {
    pub shots: usize,
    pub seed: Option<u64>,
}

impl Default for QasmSimulator {
    fn default() -> Self {
        Self {
            shots: DEFAULT_SHOTS,
            seed: None,
        }
    }
}

impl QasmSimulator {
    pub fn new(shots: usize, seed: Option<u64>) -> Self {
        Self { shots, seed }
    }

    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult, SimulationError> {
        if self.shots == 0 {
            return Err(SimulationError::ZeroShots);
        }
        if circuit.num_clbits() > MAX_CLBITS {
            return Err(SimulationError::TooManyClbits {
                found: circuit.num_clbits(),
            });
        }
        let state = evolve(circuit)?;
        let measurements = circuit.measurements();

        let mut cumulative = Vec::with_capacity(state.amplitudes().len());
        let mut total = 0.0;
        for p in state.probabilities() {
            total += p;
            cumulative.push(total);
        }
        trace!("Cumulative distribution: {:?}", cumulative);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let last = cumulative.len() - 1;
        let outcomes = (0..self.shots).map(|_| {
            let r = rng.random::<f64>() * total;
            let index = cumulative.partition_point(|&c| c <= r).min(last);
            clbit_outcome(index, &measurements)
        });
        let counts = Counts::from_outcomes(circuit.num_clbits(), outcomes);
        debug!("Sampled {} shots: {}", self.shots, counts);

        Ok(SimulationResult {
            shots: self.shots,
            seed: self.seed,
            counts,
        })
    }
}

/// Classical register value when the qubits collapse to basis state `index`.
fn clbit_outcome(index: usize, measurements: &[(usize, usize)]) -> u64 {
    measurements
        .iter()
        .fold(0u64, |acc, &(qubit, clbit)| {
            if (index >> qubit) & 1 == 1 {
                acc | (1 << clbit)
            } else {
                acc & !(1 << clbit)
            }
        })
}

/// Returns the state right before measurement.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StatevectorSimulator;

impl StatevectorSimulator {
    pub fn run(&self, circuit: &Circuit) -> Result<StateVector, SimulationError> {
        evolve(circuit)
    }
}
