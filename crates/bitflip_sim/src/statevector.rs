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

use std::{
    f64::consts::FRAC_1_SQRT_2,
    fmt::{Display, Formatter},
};

use log::trace;
use num_complex::Complex64;

use crate::circuit::Gate;

/// Amplitudes below this magnitude are treated as zero when printing.
const PRINT_TOLERANCE: f64 = 1e-10;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// Dense state of `n` qubits.
///
/// Basis index bit `i` holds the value of qubit `i`, so qubit 0 is the least
/// significant bit of the index.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// The all-zero state |0...0⟩.
    pub fn zeros(num_qubits: usize) -> Self {
        let mut amplitudes = vec![ZERO; 1 << num_qubits];
        amplitudes[0] = ONE;
        Self {
            num_qubits,
            amplitudes,
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    /// Probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Apply a unitary gate. Barriers and measurements leave the state alone.
    pub fn apply(&mut self, gate: &Gate) {
        trace!("Applying {}", gate);
        match *gate {
            Gate::I(_) | Gate::Barrier | Gate::Measure { .. } => {}
            Gate::X(q) => self.x(q),
            Gate::Y(q) => self.y(q),
            Gate::Z(q) => self.z(q),
            Gate::H(q) => self.h(q),
            Gate::Cx { control, target } => self.controlled_x(1 << control, target),
            Gate::Ccx { controls, target } => {
                self.controlled_x((1 << controls[0]) | (1 << controls[1]), target)
            }
        }
    }

    fn bit(&self, qubit: usize) -> usize {
        assert!(qubit < self.num_qubits, "qubit {qubit} out of range");
        1 << qubit
    }

    /// Visit every (|..0..⟩, |..1..⟩) index pair for `qubit` once.
    fn pairs(&self, qubit: usize) -> impl Iterator<Item = (usize, usize)> + use<> {
        let bit = self.bit(qubit);
        (0..self.amplitudes.len())
            .filter(move |i| i & bit == 0)
            .map(move |i| (i, i | bit))
    }

    fn x(&mut self, qubit: usize) {
        for (i0, i1) in self.pairs(qubit) {
            self.amplitudes.swap(i0, i1);
        }
    }

    // Y|0⟩ = i|1⟩, Y|1⟩ = -i|0⟩
    fn y(&mut self, qubit: usize) {
        for (i0, i1) in self.pairs(qubit) {
            let a0 = self.amplitudes[i0];
            let a1 = self.amplitudes[i1];
            self.amplitudes[i0] = -I * a1;
            self.amplitudes[i1] = I * a0;
        }
    }

    fn z(&mut self, qubit: usize) {
        let bit = self.bit(qubit);
        for (i, a) in self.amplitudes.iter_mut().enumerate() {
            if i & bit != 0 {
                *a = -*a;
            }
        }
    }

    fn h(&mut self, qubit: usize) {
        for (i0, i1) in self.pairs(qubit) {
            let a0 = self.amplitudes[i0];
            let a1 = self.amplitudes[i1];
            self.amplitudes[i0] = (a0 + a1) * FRAC_1_SQRT_2;
            self.amplitudes[i1] = (a0 - a1) * FRAC_1_SQRT_2;
        }
    }

    /// Flip `target` on every basis state where all bits of `control_mask` are set.
    fn controlled_x(&mut self, control_mask: usize, target: usize) {
        for (i0, i1) in self.pairs(target) {
            if i0 & control_mask == control_mask {
                self.amplitudes.swap(i0, i1);
            }
        }
    }

    /// Ket label of a basis index, qubit 0 leftmost.
    pub fn ket_label(&self, index: usize) -> String {
        (0..self.num_qubits)
            .map(|q| if (index >> q) & 1 == 1 { '1' } else { '0' })
            .collect()
    }
}

/// Dirac notation with qubit 0 leftmost, skipping zero amplitudes.
impl Display for StateVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let terms: Vec<String> = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(_, a)| a.norm() > PRINT_TOLERANCE)
            .map(|(i, a)| format!("({:.4}{:+.4}i)|{}⟩", a.re, a.im, self.ket_label(i)))
            .collect();
        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn assert_amp(state: &StateVector, index: usize, expected: Complex64) {
        let a = state.amplitude(index);
        assert!(
            (a - expected).norm() < EPS,
            "amplitude {index}: {a} != {expected}"
        );
    }

    #[test]
    fn x_flips_the_right_qubit() {
        let mut s = StateVector::zeros(3);
        s.apply(&Gate::X(1));
        assert_amp(&s, 0b010, ONE);
        assert_eq!(s.ket_label(0b010), "010");
    }

    #[test]
    fn y_and_z_phases() {
        let mut s = StateVector::zeros(1);
        s.apply(&Gate::Y(0));
        assert_amp(&s, 1, I);
        s.apply(&Gate::Y(0));
        assert_amp(&s, 0, ONE);

        s.apply(&Gate::X(0));
        s.apply(&Gate::Z(0));
        assert_amp(&s, 1, -ONE);
    }

    #[test]
    fn hadamard_then_cx_is_bell_state() {
        let mut s = StateVector::zeros(2);
        s.apply(&Gate::H(0));
        s.apply(&Gate::Cx {
            control: 0,
            target: 1,
        });
        let p = s.probabilities();
        assert!((p[0b00] - 0.5).abs() < EPS);
        assert!((p[0b11] - 0.5).abs() < EPS);
        assert!(p[0b01].abs() < EPS);
        assert!((s.norm_sqr() - 1.0).abs() < EPS);
    }

    #[test]
    fn toffoli_needs_both_controls() {
        let ccx = Gate::Ccx {
            controls: [0, 1],
            target: 2,
        };
        let mut s = StateVector::zeros(3);
        s.apply(&Gate::X(0));
        s.apply(&ccx);
        assert_amp(&s, 0b001, ONE);
        s.apply(&Gate::X(1));
        s.apply(&ccx);
        assert_amp(&s, 0b111, ONE);
    }

    #[test]
    fn display_skips_zero_terms() {
        let mut s = StateVector::zeros(2);
        s.apply(&Gate::X(0));
        assert_eq!(s.to_string(), "(1.0000+0.0000i)|10⟩");
    }
}
