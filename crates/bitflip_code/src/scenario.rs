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

use std::fmt::Display;

use bitflip_common::{CODE_QUBITS, Pauli};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A fixed error injected between encoding and syndrome extraction.
///
/// Qubits are numbered 1 to 3: the data qubit `q` followed by the redundancy
/// qubits `d0` and `d1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ErrorScenario {
    #[value(name = "none")]
    NoError,
    #[value(name = "x1")]
    XError1,
    #[value(name = "x2")]
    XError2,
    #[value(name = "x3")]
    XError3,
    #[value(name = "x12")]
    XError12,
    #[value(name = "x13")]
    XError13,
    #[value(name = "x23")]
    XError23,
    #[value(name = "x123")]
    XError123,
    #[value(name = "z1")]
    ZError1,
    #[value(name = "z2")]
    ZError2,
    #[value(name = "z3")]
    ZError3,
    #[value(name = "y1")]
    YError1,
    #[value(name = "y2")]
    YError2,
    #[value(name = "y3")]
    YError3,
}

use ErrorScenario::*;

impl ErrorScenario {
    pub const ALL: [ErrorScenario; 14] = [
        NoError, XError1, XError2, XError3, XError12, XError13, XError23, XError123, ZError1,
        ZError2, ZError3, YError1, YError2, YError3,
    ];

    /// The Pauli applied to each of `q`, `d0`, `d1`.
    pub fn paulis(&self) -> [Pauli; CODE_QUBITS] {
        use Pauli::{I, X, Y, Z};
        match self {
            NoError => [I, I, I],
            XError1 => [X, I, I],
            XError2 => [I, X, I],
            XError3 => [I, I, X],
            XError12 => [X, X, I],
            XError13 => [X, I, X],
            XError23 => [I, X, X],
            XError123 => [X, X, X],
            ZError1 => [Z, I, I],
            ZError2 => [I, Z, I],
            ZError3 => [I, I, Z],
            YError1 => [Y, I, I],
            YError2 => [I, Y, I],
            YError3 => [I, I, Y],
        }
    }

    /// 1-based indices of the qubits hit by the error.
    pub fn affected_qubits(&self) -> Vec<usize> {
        self.paulis()
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != Pauli::I)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Phase and combined errors are shown on every qubit so that the data
    /// qubits are visible in the histogram; bit-flips only need the ancillas.
    pub fn measures_all_by_default(&self) -> bool {
        self.paulis().iter().any(|p| p.has_z())
    }

    /// Short label for tables, e.g. `σx on qubit 1 & 2`.
    pub fn label(&self) -> String {
        let qubits = self.affected_qubits();
        let Some(first) = qubits.first() else {
            return "No error".to_string();
        };
        let symbol = match self.paulis()[first - 1] {
            Pauli::X => "σx",
            Pauli::Y => "σy",
            Pauli::Z => "σz",
            Pauli::I => unreachable!("Affected qubits carry a non-identity Pauli"),
        };
        let joined = qubits
            .iter()
            .map(|q| q.to_string())
            .collect::<Vec<_>>()
            .join(" & ");
        format!("{symbol} on qubit {joined}")
    }
}

impl Display for ErrorScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let qubits = self.affected_qubits();
        let plural = if qubits.len() > 1 { "s" } else { "" };
        let joined = qubits
            .iter()
            .map(|q| q.to_string())
            .collect::<Vec<_>>()
            .join(" and ");
        match self.paulis().iter().find(|p| **p != Pauli::I) {
            None => write!(f, "No errors"),
            Some(Pauli::X) => write!(f, "Bit-flip error on qubit{plural} {joined}"),
            Some(Pauli::Z) => write!(f, "Phase-flip error on qubit{plural} {joined}"),
            Some(_) => write!(f, "Y error on qubit{plural} {joined}"),
        }
    }
}
