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
    fmt::Display,
    ops::{Mul, MulAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

pub mod parity_check;

/// Number of physical qubits carrying the encoded logical qubit.
pub const CODE_QUBITS: usize = 3;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
pub enum Pauli {
    #[default]
    I,
    X,
    Z,
    Y,
}

impl Pauli {
    /// Build a Pauli from its symplectic (x, z) components.
    pub fn from_bits(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => Self::I,
            (true, false) => Self::X,
            (false, true) => Self::Z,
            (true, true) => Self::Y,
        }
    }

    /// Whether this Pauli flips the computational-basis value.
    pub fn has_x(&self) -> bool {
        matches!(self, Self::X | Self::Y)
    }

    /// Whether this Pauli flips the relative phase.
    pub fn has_z(&self) -> bool {
        matches!(self, Self::Z | Self::Y)
    }
}

/// Product of two Paulis up to a global phase.
impl Mul for Pauli {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.has_x() ^ rhs.has_x(), self.has_z() ^ rhs.has_z())
    }
}

impl MulAssign for Pauli {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Display for Pauli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Two-bit syndrome read from the ancillas.
///
/// Bit 0 is the `q ⊕ d0` check and bit 1 the `q ⊕ d1` check. It displays as
/// `"a0a1"`, so `"10"` means only the first check fired.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize,
)]
pub struct Syndrome {
    pub a0: bool,
    pub a1: bool,
}

impl Syndrome {
    pub const TRIVIAL: Syndrome = Syndrome {
        a0: false,
        a1: false,
    };

    pub fn new(a0: bool, a1: bool) -> Self {
        Self { a0, a1 }
    }

    pub fn is_trivial(&self) -> bool {
        *self == Self::TRIVIAL
    }
}

impl Display for Syndrome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", u8::from(self.a0), u8::from(self.a1))
    }
}

impl FromStr for Syndrome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                c => Err(format!("Cannot read {} as a syndrome bit", c)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        match bits[..] {
            [a0, a1] => Ok(Self { a0, a1 }),
            _ => Err(format!("A syndrome has two bits, got '{}'", s)),
        }
    }
}
