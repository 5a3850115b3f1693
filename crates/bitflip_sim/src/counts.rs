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
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

/// Histogram of measured bit-strings.
///
/// Keys are written with the highest classical bit first, so bit 0 is the
/// last character. Every key has the same length, the number of classical
/// bits of the circuit that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts(BTreeMap<String, usize>);

impl Counts {
    /// Tally outcomes given as integers whose bit `i` is classical bit `i`.
    pub fn from_outcomes(num_clbits: usize, outcomes: impl IntoIterator<Item = u64>) -> Self {
        let mut counts = BTreeMap::new();
        for outcome in outcomes {
            let key: String = (0..num_clbits)
                .rev()
                .map(|bit| match outcome.checked_shr(bit as u32) {
                    Some(v) if v & 1 == 1 => '1',
                    _ => '0',
                })
                .collect();
            *counts.entry(key).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn get(&self, key: &str) -> usize {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shots(&self) -> usize {
        self.0.values().sum()
    }

    /// Same histogram with every key reversed, so classical bit 0 comes first.
    pub fn bit_reversed(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(k, v)| (k.chars().rev().collect(), *v))
                .collect(),
        )
    }

    /// The most frequent key. Ties go to the lexicographically smallest key.
    pub fn most_frequent(&self) -> Option<(&str, usize)> {
        self.iter()
            .fold(None, |best: Option<(&str, usize)>, (k, v)| match best {
                Some((_, bv)) if bv >= v => best,
                _ => Some((k, v)),
            })
    }

    /// Value of classical bit `clbit` in a key of this histogram.
    pub fn clbit(key: &str, clbit: usize) -> Option<bool> {
        let len = key.len();
        if clbit >= len {
            return None;
        }
        match key.as_bytes()[len - 1 - clbit] {
            b'1' => Some(true),
            b'0' => Some(false),
            _ => None,
        }
    }
}

/// Printed like a Python dict, e.g. `{'01': 512, '10': 512}`.
impl Display for Counts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self.iter().map(|(k, v)| format!("'{k}': {v}")).collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}
