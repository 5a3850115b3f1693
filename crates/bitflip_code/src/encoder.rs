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

use bitflip_common::CODE_QUBITS;
use bitflip_sim::{Circuit, CircuitError, Gate};
use clap::ValueEnum;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::scenario::ErrorScenario;

/// State of the data qubit before encoding.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize, ValueEnum)]
pub enum LogicalInput {
    /// |0⟩
    #[default]
    Zero,
    /// |1⟩
    One,
    /// (|0⟩ + |1⟩)/√2
    Plus,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildOptions {
    pub input: LogicalInput,
    /// Measure every qubit instead of only the ancillas.
    pub measure_all: bool,
    /// Apply the syndrome's correction coherently before measuring.
    pub correct: bool,
}

/// Where the pieces of the code live in a built circuit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CodeLayout {
    /// `q`, `d0`, `d1`
    pub data: [usize; CODE_QUBITS],
    /// `a0`, `a1`
    pub ancillas: [usize; 2],
    /// Classical bits holding `a0` and `a1`.
    pub syndrome_clbits: [usize; 2],
    /// Classical bits holding the data qubits, when they are measured.
    pub data_clbits: Option<[usize; CODE_QUBITS]>,
}

/// Build the circuit for one scenario: encode, inject the error, extract
/// the two parities and measure.
pub fn build_circuit(
    scenario: ErrorScenario,
    options: &BuildOptions,
) -> Result<(Circuit, CodeLayout), CircuitError> {
    let mut qc = Circuit::new();
    let q = qc.add_qreg("q", 1);
    let d = qc.add_qreg("d", 2);
    let a = qc.add_qreg("a", 2);
    let c = (!options.measure_all).then(|| qc.add_creg("c", 2));

    let data = [q.get(0), d.get(0), d.get(1)];
    let ancillas = [a.get(0), a.get(1)];

    match options.input {
        LogicalInput::Zero => {}
        LogicalInput::One => {
            qc.x(data[0])?;
        }
        LogicalInput::Plus => {
            qc.h(data[0])?;
        }
    }

    // Redundancy
    qc.cx(data[0], data[1])?;
    qc.cx(data[1], data[2])?;
    qc.barrier();

    for (qubit, pauli) in data.into_iter().zip(scenario.paulis()) {
        qc.append(Gate::pauli(pauli, qubit))?;
    }
    qc.barrier();

    // Parity checks
    qc.cx(data[0], ancillas[0])?;
    qc.cx(data[1], ancillas[0])?;
    qc.cx(data[0], ancillas[1])?;
    qc.cx(data[2], ancillas[1])?;
    qc.barrier();

    if options.correct {
        append_correction(&mut qc, data, ancillas)?;
        qc.barrier();
    }

    let layout = match c {
        Some(c) => {
            qc.measure(ancillas[0], c.get(0))?;
            qc.measure(ancillas[1], c.get(1))?;
            CodeLayout {
                data,
                ancillas,
                syndrome_clbits: [c.get(0), c.get(1)],
                data_clbits: None,
            }
        }
        None => {
            qc.measure_all()?;
            // measure_all writes qubit i into classical bit i.
            CodeLayout {
                data,
                ancillas,
                syndrome_clbits: ancillas,
                data_clbits: Some(data),
            }
        }
    };
    trace!("Built {:?} with {} operations", scenario, qc.ops().len());
    Ok((qc, layout))
}

/// Flip the qubit the ancillas point at, leaving the ancillas unchanged.
///
/// `11` flips `q`, `10` flips `d0` and `01` flips `d1`.
fn append_correction(
    qc: &mut Circuit,
    data: [usize; CODE_QUBITS],
    ancillas: [usize; 2],
) -> Result<(), CircuitError> {
    let [a0, a1] = ancillas;
    qc.ccx(a0, a1, data[0])?;

    qc.x(a1)?;
    qc.ccx(a0, a1, data[1])?;
    qc.x(a1)?;

    qc.x(a0)?;
    qc.ccx(a0, a1, data[2])?;
    qc.x(a0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use bitflip_sim::StatevectorSimulator;

    use super::*;

    #[test]
    fn ancilla_only_layout() {
        let (qc, layout) = build_circuit(ErrorScenario::XError1, &BuildOptions::default()).unwrap();
        assert_eq!(qc.num_qubits(), 5);
        assert_eq!(qc.num_clbits(), 2);
        assert_eq!(layout.syndrome_clbits, [0, 1]);
        assert_eq!(layout.data_clbits, None);
        assert_eq!(qc.measurements(), vec![(3, 0), (4, 1)]);
    }

    #[test]
    fn measure_all_layout() {
        let options = BuildOptions {
            measure_all: true,
            ..Default::default()
        };
        let (qc, layout) = build_circuit(ErrorScenario::ZError1, &options).unwrap();
        assert_eq!(qc.num_clbits(), 5);
        assert_eq!(qc.cregs()[0].name, "meas");
        assert_eq!(layout.syndrome_clbits, [3, 4]);
        assert_eq!(layout.data_clbits, Some([0, 1, 2]));
    }

    #[test]
    fn encoding_spreads_the_input() {
        let options = BuildOptions {
            input: LogicalInput::Plus,
            ..Default::default()
        };
        let (qc, _) = build_circuit(ErrorScenario::NoError, &options).unwrap();
        let state = StatevectorSimulator.run(&qc).unwrap();
        let p = state.probabilities();
        // |q d0 d1 a0 a1⟩ = |00000⟩ and |11100⟩
        assert!((p[0b00000] - 0.5).abs() < 1e-12);
        assert!((p[0b00111] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn correction_leaves_ancillas() {
        let options = BuildOptions {
            input: LogicalInput::One,
            correct: true,
            ..Default::default()
        };
        let (qc, _) = build_circuit(ErrorScenario::XError2, &options).unwrap();
        let state = StatevectorSimulator.run(&qc).unwrap();
        // data restored to 111, ancillas still read a0=1, a1=0
        let index = 0b01111;
        assert!((state.probabilities()[index] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn every_slot_gets_a_gate() {
        let (qc, _) = build_circuit(ErrorScenario::NoError, &BuildOptions::default()).unwrap();
        let identities = qc.ops().iter().filter(|g| matches!(g, Gate::I(_))).count();
        assert_eq!(identities, 3);
    }
}
