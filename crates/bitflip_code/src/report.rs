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

use std::io;

use bitflip_common::{CODE_QUBITS, Pauli, Syndrome, parity_check::pauli_syndrome};
use serde::{Deserialize, Serialize};

use crate::{
    decoder::{Correction, Diagnosis, diagnose},
    scenario::ErrorScenario,
};

/// Markdown note explaining a decoded syndrome.
pub fn annotation(scenario: ErrorScenario, diagnosis: &Diagnosis) -> String {
    let state = format!(
        "Ancilla qubits are in the state $|{}\\rangle$.",
        diagnosis.syndrome
    );
    let injected = scenario.paulis();
    let had_bit_flip = injected.iter().any(Pauli::has_x);

    let body = match diagnosis.correction {
        Correction::None if scenario == ErrorScenario::NoError => {
            "No error detected, so no correction is needed.".to_string()
        }
        Correction::None if diagnosis.logical_x => {
            "No error detected even though every qubit was flipped: the encoded \
             state suffered an undetectable logical bit flip."
                .to_string()
        }
        Correction::None => {
            "No error detected even though a phase-flip error is present.".to_string()
        }
        Correction::FlipQubit(qubit) if diagnosis.logical_x => format!(
            "A bit-flip error is reported on qubit {qubit}. This is a misdiagnosis: \
             applying $\\sigma_x$ to qubit {qubit} completes a logical bit flip and the code fails."
        ),
        Correction::FlipQubit(qubit) if diagnosis.logical_z && had_bit_flip => format!(
            "Only the bit-flip part of the error on qubit {qubit} is detected. \
             $\\sigma_x$ on qubit {qubit} removes it but the phase flip remains."
        ),
        Correction::FlipQubit(qubit) => format!(
            "Bit-flip error detected on qubit {qubit}; a $\\sigma_x$ operation on qubit \
             {qubit} corrects it."
        ),
    };
    format!("{state} {body}")
}

/// Ket of the data qubits followed by the ancillas for one logical branch.
fn branch(logical: bool, x_part: &[bool; CODE_QUBITS], syndrome: Syndrome) -> String {
    let data: String = x_part
        .iter()
        .map(|&x| if x ^ logical { '1' } else { '0' })
        .collect();
    format!("|{data}⟩|{syndrome}⟩")
}

/// The encoded state after the error and syndrome extraction, e.g.
/// `α|100⟩|11⟩ + β|011⟩|11⟩`.
///
/// Phase flips show up as a relative minus sign; global phases are dropped.
pub fn final_state(error: &[Pauli; CODE_QUBITS]) -> String {
    let x_part = error.map(|p| p.has_x());
    let odd_z = error.iter().filter(|p| p.has_z()).count() % 2 == 1;
    let syndrome = pauli_syndrome(error).expect("An error on the code qubits has a syndrome");
    let sign = if odd_z { "−" } else { "+" };
    format!(
        "α{} {sign} β{}",
        branch(false, &x_part, syndrome),
        branch(true, &x_part, syndrome)
    )
}

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub error: String,
    pub final_state: String,
    pub ancilla: String,
    pub correction: String,
    pub accurate: bool,
}

impl SummaryRow {
    pub fn new(scenario: ErrorScenario) -> Self {
        let error = scenario.paulis();
        let syndrome = pauli_syndrome(&error).expect("An error on the code qubits has a syndrome");
        let diagnosis = diagnose(&error, syndrome);
        Self {
            error: scenario.label(),
            final_state: final_state(&error),
            ancilla: syndrome.to_string(),
            correction: diagnosis.correction.to_string(),
            accurate: diagnosis.accurate(),
        }
    }
}

pub fn summary_rows() -> Vec<SummaryRow> {
    ErrorScenario::ALL.into_iter().map(SummaryRow::new).collect()
}

pub fn summary_markdown(rows: &[SummaryRow]) -> String {
    let mut out = String::from(
        "| Error | Final data ⊗ ancilla state | Ancilla | Correction | Accurate |\n\
         |---|---|---|---|---|\n",
    );
    // Kets contain pipes, which would split table cells.
    let escape = |cell: &str| cell.replace('|', "\\|");
    for row in rows {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            row.error,
            escape(&row.final_state),
            escape(&format!("|{}⟩", row.ancilla)),
            row.correction,
            if row.accurate { "☑" } else { "☒" }
        ));
    }
    out
}

pub fn write_summary_csv<W: io::Write>(rows: &[SummaryRow], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
