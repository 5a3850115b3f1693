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
    collections::BTreeSet,
    fmt::{Display, Formatter},
};

use bitflip_common::{CODE_QUBITS, Pauli, Syndrome};
use bitflip_sim::Counts;
use serde::{Deserialize, Serialize};

use crate::encoder::CodeLayout;

/// What the lookup decoder does for a syndrome.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Correction {
    None,
    /// Apply σx to the given qubit, numbered 1 to 3.
    FlipQubit(usize),
}

impl Correction {
    /// The correction as a Pauli per code qubit. Qubits outside 1 to 3 are
    /// not part of the code and get nothing.
    pub fn paulis(&self) -> [Pauli; CODE_QUBITS] {
        let mut out = [Pauli::I; CODE_QUBITS];
        if let Self::FlipQubit(qubit) = *self {
            if let Some(p) = out.get_mut(qubit.wrapping_sub(1)) {
                *p = Pauli::X;
            }
        }
        out
    }
}

impl Display for Correction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::FlipQubit(qubit) => write!(f, "σx on qubit {qubit}"),
        }
    }
}

/// Lookup table: the single bit-flip consistent with each syndrome.
pub fn decode(syndrome: Syndrome) -> Correction {
    match (syndrome.a0, syndrome.a1) {
        (false, false) => Correction::None,
        (true, true) => Correction::FlipQubit(1),
        (true, false) => Correction::FlipQubit(2),
        (false, true) => Correction::FlipQubit(3),
    }
}

/// Outcome of decoding a known error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub syndrome: Syndrome,
    pub correction: Correction,
    /// Error left after the correction, up to a global phase.
    pub residual: [Pauli; CODE_QUBITS],
    /// The residual flips the encoded bit: α|0⟩_L + β|1⟩_L → α|1⟩_L + β|0⟩_L.
    pub logical_x: bool,
    /// The residual flips the encoded phase: α|0⟩_L + β|1⟩_L → α|0⟩_L − β|1⟩_L.
    pub logical_z: bool,
}

impl Diagnosis {
    /// The correction returned the encoded state unchanged.
    pub fn accurate(&self) -> bool {
        !self.logical_x && !self.logical_z
    }
}

pub fn diagnose(error: &[Pauli; CODE_QUBITS], syndrome: Syndrome) -> Diagnosis {
    let correction = decode(syndrome);
    let mut residual = *error;
    for (r, c) in residual.iter_mut().zip(correction.paulis()) {
        *r *= c;
    }
    // A correction always lands back in the code space, so the X part is
    // either trivial or the logical XXX.
    let logical_x = residual.iter().all(|p| p.has_x());
    let logical_z = residual.iter().filter(|p| p.has_z()).count() % 2 == 1;
    Diagnosis {
        syndrome,
        correction,
        residual,
        logical_x,
        logical_z,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    EmptyCounts,
    MalformedKey { key: String, clbit: usize },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCounts => write!(f, "no measurement outcomes to decode"),
            Self::MalformedKey { key, clbit } => {
                write!(f, "outcome '{key}' has no classical bit {clbit}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

fn read_syndrome(key: &str, layout: &CodeLayout) -> Result<Syndrome, DecodeError> {
    let bit = |clbit| {
        Counts::clbit(key, clbit).ok_or_else(|| DecodeError::MalformedKey {
            key: key.to_string(),
            clbit,
        })
    };
    let [c0, c1] = layout.syndrome_clbits;
    Ok(Syndrome::new(bit(c0)?, bit(c1)?))
}

/// Syndrome of the most frequent outcome.
pub fn syndrome_from_counts(counts: &Counts, layout: &CodeLayout) -> Result<Syndrome, DecodeError> {
    let (key, _) = counts.most_frequent().ok_or(DecodeError::EmptyCounts)?;
    read_syndrome(key, layout)
}

/// Every syndrome that occurred in the histogram.
pub fn observed_syndromes(
    counts: &Counts,
    layout: &CodeLayout,
) -> Result<BTreeSet<Syndrome>, DecodeError> {
    counts
        .iter()
        .map(|(key, _)| read_syndrome(key, layout))
        .collect()
}

/// Majority vote over the measured data qubits.
///
/// Returns how many shots decoded to logical 0 and to logical 1, or `None`
/// when the data qubits were not measured.
pub fn logical_readout(
    counts: &Counts,
    layout: &CodeLayout,
) -> Result<Option<[usize; 2]>, DecodeError> {
    let Some(data_clbits) = layout.data_clbits else {
        return Ok(None);
    };
    let mut tally = [0usize; 2];
    for (key, count) in counts.iter() {
        let mut ones = 0;
        for clbit in data_clbits {
            let bit = Counts::clbit(key, clbit).ok_or_else(|| DecodeError::MalformedKey {
                key: key.to_string(),
                clbit,
            })?;
            ones += usize::from(bit);
        }
        tally[usize::from(ones * 2 > CODE_QUBITS)] += count;
    }
    Ok(Some(tally))
}
