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

use bitflip_common::Pauli;
use serde::{Deserialize, Serialize};

/// A named, contiguous block of qubits inside a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantumRegister {
    pub name: String,
    start: usize,
    size: usize,
}

/// A named, contiguous block of classical bits inside a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicalRegister {
    pub name: String,
    start: usize,
    size: usize,
}

macro_rules! register_impl {
    ($reg:ty) => {
        impl $reg {
            pub fn len(&self) -> usize {
                self.size
            }

            pub fn is_empty(&self) -> bool {
                self.size == 0
            }

            /// Global index of the `i`th bit of this register.
            pub fn get(&self, i: usize) -> usize {
                assert!(i < self.size, "{} has no index {}", self.name, i);
                self.start + i
            }

            pub fn indices(&self) -> std::ops::Range<usize> {
                self.start..self.start + self.size
            }
        }
    };
}

register_impl!(QuantumRegister);
register_impl!(ClassicalRegister);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gate {
    I(usize),
    X(usize),
    Y(usize),
    Z(usize),
    H(usize),
    Cx { control: usize, target: usize },
    Ccx { controls: [usize; 2], target: usize },
    Barrier,
    Measure { qubit: usize, clbit: usize },
}

impl Gate {
    /// The single-qubit gate acting as the given Pauli.
    pub fn pauli(p: Pauli, qubit: usize) -> Self {
        match p {
            Pauli::I => Self::I(qubit),
            Pauli::X => Self::X(qubit),
            Pauli::Y => Self::Y(qubit),
            Pauli::Z => Self::Z(qubit),
        }
    }

    /// Qubits this gate touches. Barriers span every qubit and report none.
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Self::I(q) | Self::X(q) | Self::Y(q) | Self::Z(q) | Self::H(q) => vec![q],
            Self::Cx { control, target } => vec![control, target],
            Self::Ccx { controls, target } => vec![controls[0], controls[1], target],
            Self::Barrier => vec![],
            Self::Measure { qubit, .. } => vec![qubit],
        }
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::I(q) => write!(f, "id q{q}"),
            Self::X(q) => write!(f, "x q{q}"),
            Self::Y(q) => write!(f, "y q{q}"),
            Self::Z(q) => write!(f, "z q{q}"),
            Self::H(q) => write!(f, "h q{q}"),
            Self::Cx { control, target } => write!(f, "cx q{control},q{target}"),
            Self::Ccx { controls, target } => {
                write!(f, "ccx q{},q{},q{target}", controls[0], controls[1])
            }
            Self::Barrier => write!(f, "barrier"),
            Self::Measure { qubit, clbit } => write!(f, "measure q{qubit} -> c{clbit}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    QubitOutOfRange { qubit: usize, num_qubits: usize },
    ClbitOutOfRange { clbit: usize, num_clbits: usize },
    RepeatedQubit { qubit: usize },
}

impl Display for CircuitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QubitOutOfRange { qubit, num_qubits } => {
                write!(f, "qubit {qubit} out of range for {num_qubits} qubits")
            }
            Self::ClbitOutOfRange { clbit, num_clbits } => {
                write!(f, "classical bit {clbit} out of range for {num_clbits} bits")
            }
            Self::RepeatedQubit { qubit } => {
                write!(f, "gate uses qubit {qubit} more than once")
            }
        }
    }
}

impl std::error::Error for CircuitError {}

/// An ordered list of gates over named registers.
///
/// Qubits are numbered in the order their registers were added, and so are
/// classical bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    qregs: Vec<QuantumRegister>,
    cregs: Vec<ClassicalRegister>,
    ops: Vec<Gate>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_qreg(&mut self, name: &str, size: usize) -> QuantumRegister {
        let reg = QuantumRegister {
            name: name.to_string(),
            start: self.num_qubits(),
            size,
        };
        self.qregs.push(reg.clone());
        reg
    }

    pub fn add_creg(&mut self, name: &str, size: usize) -> ClassicalRegister {
        let reg = ClassicalRegister {
            name: name.to_string(),
            start: self.num_clbits(),
            size,
        };
        self.cregs.push(reg.clone());
        reg
    }

    pub fn num_qubits(&self) -> usize {
        self.qregs.iter().map(|r| r.size).sum()
    }

    pub fn num_clbits(&self) -> usize {
        self.cregs.iter().map(|r| r.size).sum()
    }

    pub fn qregs(&self) -> &[QuantumRegister] {
        &self.qregs
    }

    pub fn cregs(&self) -> &[ClassicalRegister] {
        &self.cregs
    }

    pub fn ops(&self) -> &[Gate] {
        &self.ops
    }

    /// Label of a qubit such as `d_1`.
    pub fn qubit_label(&self, qubit: usize) -> String {
        self.qregs
            .iter()
            .find(|r| r.indices().contains(&qubit))
            .map(|r| format!("{}_{}", r.name, qubit - r.start))
            .unwrap_or_else(|| format!("q{qubit}"))
    }

    /// Label of a classical bit such as `c_0`.
    pub fn clbit_label(&self, clbit: usize) -> String {
        self.cregs
            .iter()
            .find(|r| r.indices().contains(&clbit))
            .map(|r| format!("{}_{}", r.name, clbit - r.start))
            .unwrap_or_else(|| format!("c{clbit}"))
    }

    /// Append a gate after checking its operands.
    pub fn append(&mut self, gate: Gate) -> Result<&mut Self, CircuitError> {
        let qubits = gate.qubits();
        let num_qubits = self.num_qubits();
        for (i, &qubit) in qubits.iter().enumerate() {
            if qubit >= num_qubits {
                return Err(CircuitError::QubitOutOfRange { qubit, num_qubits });
            }
            if qubits[..i].contains(&qubit) {
                return Err(CircuitError::RepeatedQubit { qubit });
            }
        }
        if let Gate::Measure { clbit, .. } = gate {
            let num_clbits = self.num_clbits();
            if clbit >= num_clbits {
                return Err(CircuitError::ClbitOutOfRange { clbit, num_clbits });
            }
        }
        self.ops.push(gate);
        Ok(self)
    }

    pub fn i(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.append(Gate::I(qubit))
    }

    pub fn x(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.append(Gate::X(qubit))
    }

    pub fn y(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.append(Gate::Y(qubit))
    }

    pub fn z(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.append(Gate::Z(qubit))
    }

    pub fn h(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.append(Gate::H(qubit))
    }

    pub fn cx(&mut self, control: usize, target: usize) -> Result<&mut Self, CircuitError> {
        self.append(Gate::Cx { control, target })
    }

    pub fn ccx(
        &mut self,
        control1: usize,
        control2: usize,
        target: usize,
    ) -> Result<&mut Self, CircuitError> {
        self.append(Gate::Ccx {
            controls: [control1, control2],
            target,
        })
    }

    pub fn barrier(&mut self) -> &mut Self {
        self.ops.push(Gate::Barrier);
        self
    }

    pub fn measure(&mut self, qubit: usize, clbit: usize) -> Result<&mut Self, CircuitError> {
        self.append(Gate::Measure { qubit, clbit })
    }

    /// Measure every qubit into a fresh `meas` register, qubit `i` into bit `i`
    /// of that register.
    pub fn measure_all(&mut self) -> Result<&mut Self, CircuitError> {
        let meas = self.add_creg("meas", self.num_qubits());
        self.barrier();
        for qubit in 0..self.num_qubits() {
            self.measure(qubit, meas.get(qubit))?;
        }
        Ok(self)
    }

    /// (qubit, clbit) pairs of every measurement, in circuit order.
    pub fn measurements(&self) -> Vec<(usize, usize)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Gate::Measure { qubit, clbit } => Some((qubit, clbit)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_are_numbered_in_order() {
        let mut qc = Circuit::new();
        let q = qc.add_qreg("q", 1);
        let d = qc.add_qreg("d", 2);
        let c = qc.add_creg("c", 2);
        assert_eq!(q.get(0), 0);
        assert_eq!(d.get(0), 1);
        assert_eq!(d.get(1), 2);
        assert_eq!(c.get(1), 1);
        assert_eq!(qc.num_qubits(), 3);
        assert_eq!(qc.num_clbits(), 2);
        assert_eq!(qc.qubit_label(2), "d_1");
        assert_eq!(qc.clbit_label(0), "c_0");
    }

    #[test]
    #[should_panic]
    fn register_index_is_bounded() {
        let mut qc = Circuit::new();
        let d = qc.add_qreg("d", 2);
        d.get(2);
    }

    #[test]
    fn append_rejects_bad_operands() {
        let mut qc = Circuit::new();
        qc.add_qreg("q", 2);
        qc.add_creg("c", 1);
        assert_eq!(
            qc.x(2).unwrap_err(),
            CircuitError::QubitOutOfRange {
                qubit: 2,
                num_qubits: 2
            }
        );
        assert_eq!(
            qc.cx(1, 1).unwrap_err(),
            CircuitError::RepeatedQubit { qubit: 1 }
        );
        assert_eq!(
            qc.measure(0, 1).unwrap_err(),
            CircuitError::ClbitOutOfRange {
                clbit: 1,
                num_clbits: 1
            }
        );
        assert!(qc.ops().is_empty());
    }

    #[test]
    fn measure_all_adds_register() {
        let mut qc = Circuit::new();
        qc.add_qreg("q", 3);
        qc.measure_all().unwrap();
        assert_eq!(qc.num_clbits(), 3);
        assert_eq!(qc.cregs()[0].name, "meas");
        assert_eq!(qc.measurements(), vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(qc.ops()[0], Gate::Barrier);
    }

    #[test]
    fn pauli_gates() {
        assert_eq!(Gate::pauli(Pauli::Y, 4), Gate::Y(4));
        assert_eq!(Gate::pauli(Pauli::I, 0), Gate::I(0));
        assert_eq!(Gate::Cx { control: 0, target: 3 }.to_string(), "cx q0,q3");
    }
}
