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

//! A small statevector simulator: circuits over named registers, exact
//! evolution of the state, and shot sampling into a counts histogram.

pub mod circuit;
pub mod counts;
mod draw;
pub mod simulator;
pub mod statevector;

pub use circuit::{Circuit, CircuitError, ClassicalRegister, Gate, QuantumRegister};
pub use counts::Counts;
pub use simulator::{
    DEFAULT_SHOTS, MAX_CLBITS, QasmSimulator, SimulationError, SimulationResult,
    StatevectorSimulator,
};
pub use statevector::StateVector;
