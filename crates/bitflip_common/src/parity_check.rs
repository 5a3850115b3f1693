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

use nalgebra::{SMatrix, Vector3, matrix};

use crate::{CODE_QUBITS, Pauli, Syndrome};

/// Parity checks over GF(2), one row per ancilla, one column per code qubit.
pub type CheckMatrix = SMatrix<u8, 2, CODE_QUBITS>;

/// Row 0 compares `q` with `d0`, row 1 compares `q` with `d1`.
pub const BIT_FLIP_CHECKS: CheckMatrix = matrix![
    1, 1, 0; //
    1, 0, 1; //
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyndromeError {
    DimensionMismatch { expected: usize, found: usize },
    NonBinaryInput { index: usize, value: u8 },
    NonBinaryCheck { row: usize, col: usize, value: u8 },
}

impl Display for SyndromeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "error vector length mismatch: expected {expected}, found {found}"
            ),
            Self::NonBinaryInput { index, value } => {
                write!(
                    f,
                    "error vector contains non-binary entry at {index}: {value}"
                )
            }
            Self::NonBinaryCheck { row, col, value } => {
                write!(
                    f,
                    "check matrix contains non-binary entry at ({row}, {col}): {value}"
                )
            }
        }
    }
}

impl std::error::Error for SyndromeError {}

/// Compute syndrome s = H * e^T over GF(2).
pub fn syndrome(h: &CheckMatrix, error: &[u8]) -> Result<Syndrome, SyndromeError> {
    if error.len() != h.ncols() {
        return Err(SyndromeError::DimensionMismatch {
            expected: h.ncols(),
            found: error.len(),
        });
    }
    for row in 0..h.nrows() {
        for col in 0..h.ncols() {
            let value = h[(row, col)];
            if value > 1 {
                return Err(SyndromeError::NonBinaryCheck { row, col, value });
            }
        }
    }
    for (index, value) in error.iter().copied().enumerate() {
        if value > 1 {
            return Err(SyndromeError::NonBinaryInput { index, value });
        }
    }

    let e = Vector3::from_column_slice(error);
    let s = (h * e).map(|v| v % 2);
    Ok(Syndrome::new(s[0] == 1, s[1] == 1))
}

/// The bit-flip part of a Pauli error, as a binary vector.
pub fn x_error(paulis: &[Pauli]) -> Vec<u8> {
    paulis.iter().map(|p| u8::from(p.has_x())).collect()
}

/// Syndrome a Pauli error leaves on the bit-flip checks.
///
/// Phase flips commute with the Z-type checks, so only the X part counts.
pub fn pauli_syndrome(paulis: &[Pauli]) -> Result<Syndrome, SyndromeError> {
    syndrome(&BIT_FLIP_CHECKS, &x_error(paulis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_flips_have_distinct_nonzero_columns() {
        let columns: Vec<_> = (0..CODE_QUBITS)
            .map(|i| {
                let mut e = [0u8; CODE_QUBITS];
                e[i] = 1;
                syndrome(&BIT_FLIP_CHECKS, &e).expect("valid binary vector")
            })
            .collect();
        assert!(columns.iter().all(|s| !s.is_trivial()));
        assert_ne!(columns[0], columns[1]);
        assert_ne!(columns[0], columns[2]);
        assert_ne!(columns[1], columns[2]);
    }

    #[test]
    fn syndrome_matches_manual_parity() {
        let s = syndrome(&BIT_FLIP_CHECKS, &[1, 1, 0]).expect("valid binary vector");
        assert_eq!(s, Syndrome::new(false, true));
        let s = syndrome(&BIT_FLIP_CHECKS, &[1, 1, 1]).expect("valid binary vector");
        assert!(s.is_trivial());
    }

    #[test]
    fn syndrome_rejects_non_binary_input() {
        let err = syndrome(&BIT_FLIP_CHECKS, &[1, 2, 0]).expect_err("must reject non-binary entries");
        assert_eq!(err, SyndromeError::NonBinaryInput { index: 1, value: 2 });
    }

    #[test]
    fn syndrome_rejects_non_binary_checks() {
        let mut h = BIT_FLIP_CHECKS;
        h[(1, 2)] = 200;
        let err = syndrome(&h, &[1, 1, 1]).expect_err("must reject non-binary checks");
        assert_eq!(
            err,
            SyndromeError::NonBinaryCheck {
                row: 1,
                col: 2,
                value: 200
            }
        );
    }

    #[test]
    fn syndrome_rejects_wrong_length() {
        let err = syndrome(&BIT_FLIP_CHECKS, &[1, 0]).expect_err("must reject wrong length");
        assert_eq!(
            err,
            SyndromeError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn phase_flips_are_invisible() {
        let s = pauli_syndrome(&[Pauli::Z, Pauli::Z, Pauli::Z]).expect("three qubits");
        assert!(s.is_trivial());
        let y = pauli_syndrome(&[Pauli::I, Pauli::Y, Pauli::I]).expect("three qubits");
        let x = pauli_syndrome(&[Pauli::I, Pauli::X, Pauli::I]).expect("three qubits");
        assert_eq!(x, y);
    }
}
