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

//! End-to-end runs of every scenario through the simulator.
//!
//! The physics of the code fixes the syndrome of each scenario regardless of
//! the encoded state, so every histogram must carry exactly one syndrome.

use std::sync::LazyLock;

use bitflip_code::{
    ErrorScenario, RunConfig, ScenarioReport,
    decoder::{self, Correction},
    encoder::LogicalInput,
    run_scenario,
};
use bitflip_common::parity_check::pauli_syndrome;

// ---------------------------------------------------------------------------
// Shared fixture
// ---------------------------------------------------------------------------

const SHOTS: usize = 1024;

static DEFAULT_REPORTS: LazyLock<Vec<ScenarioReport>> = LazyLock::new(|| {
    let config = RunConfig {
        shots: SHOTS,
        seed: Some(2024),
        ..Default::default()
    };
    ErrorScenario::ALL
        .iter()
        .map(|&s| run_scenario(s, &config).expect("Scenario should run"))
        .collect()
});

fn expected(scenario: ErrorScenario) -> (&'static str, Correction, bool) {
    use ErrorScenario::*;
    match scenario {
        NoError => ("00", Correction::None, true),
        XError1 => ("11", Correction::FlipQubit(1), true),
        XError2 => ("10", Correction::FlipQubit(2), true),
        XError3 => ("01", Correction::FlipQubit(3), true),
        XError12 => ("01", Correction::FlipQubit(3), false),
        XError13 => ("10", Correction::FlipQubit(2), false),
        XError23 => ("11", Correction::FlipQubit(1), false),
        XError123 => ("00", Correction::None, false),
        ZError1 | ZError2 | ZError3 => ("00", Correction::None, false),
        YError1 => ("11", Correction::FlipQubit(1), false),
        YError2 => ("10", Correction::FlipQubit(2), false),
        YError3 => ("01", Correction::FlipQubit(3), false),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn syndromes_match_the_table() {
    for report in DEFAULT_REPORTS.iter() {
        let (syndrome, correction, accurate) = expected(report.scenario);
        assert_eq!(report.syndrome.to_string(), syndrome, "{:?}", report.scenario);
        assert_eq!(report.diagnosis.correction, correction, "{:?}", report.scenario);
        assert_eq!(report.diagnosis.accurate(), accurate, "{:?}", report.scenario);
    }
}

#[test]
fn histograms_are_well_formed() {
    for report in DEFAULT_REPORTS.iter() {
        let width = if report.measure_all { 5 } else { 2 };
        assert_eq!(report.counts.shots(), SHOTS);
        assert!(report.counts.iter().all(|(k, _)| k.len() == width));
        let syndromes = decoder::observed_syndromes(&report.counts, &report.layout).unwrap();
        assert_eq!(syndromes.len(), 1, "{:?}", report.scenario);
    }
}

#[test]
fn zero_input_is_deterministic() {
    for report in DEFAULT_REPORTS.iter() {
        // |0⟩ input: every measured bit is deterministic.
        assert_eq!(report.counts.len(), 1, "{:?}", report.scenario);
    }
}

#[test]
fn reversed_key_reads_ancillas_in_order() {
    let report = DEFAULT_REPORTS
        .iter()
        .find(|r| r.scenario == ErrorScenario::XError2)
        .unwrap();
    assert_eq!(report.counts.get("01"), SHOTS);
    assert_eq!(report.counts.bit_reversed().get("10"), SHOTS);

    let report = DEFAULT_REPORTS
        .iter()
        .find(|r| r.scenario == ErrorScenario::YError2)
        .unwrap();
    // q d0 d1 a0 a1 after reversal
    assert_eq!(report.counts.bit_reversed().get("01010"), SHOTS);
}

#[test]
fn simulation_agrees_with_parity_checks_for_every_input() {
    for input in [LogicalInput::Zero, LogicalInput::One, LogicalInput::Plus] {
        let config = RunConfig {
            shots: 256,
            seed: Some(11),
            input,
            measure_all: true,
            ..Default::default()
        };
        for scenario in ErrorScenario::ALL {
            let report = run_scenario(scenario, &config).unwrap();
            let classical = pauli_syndrome(&scenario.paulis()).unwrap();
            assert_eq!(report.syndrome, classical, "{scenario:?} {input:?}");
            let syndromes = decoder::observed_syndromes(&report.counts, &report.layout).unwrap();
            assert_eq!(syndromes.len(), 1, "{scenario:?} {input:?}");
        }
    }
}

#[test]
fn plus_input_spreads_data_outcomes() {
    let config = RunConfig {
        shots: 2000,
        seed: Some(5),
        input: LogicalInput::Plus,
        ..Default::default()
    };
    let report = run_scenario(ErrorScenario::ZError1, &config).unwrap();
    let [zero, one] = report.logical_readout.unwrap();
    assert_eq!(zero + one, 2000);
    assert!(zero > 800 && one > 800, "{zero} {one}");
}

#[test]
fn coherent_correction_restores_or_flips() {
    for input in [LogicalInput::Zero, LogicalInput::One] {
        let config = RunConfig {
            shots: 128,
            seed: Some(99),
            input,
            measure_all: true,
            correct: true,
        };
        let logical = usize::from(input == LogicalInput::One);
        for scenario in ErrorScenario::ALL {
            let report = run_scenario(scenario, &config).unwrap();
            let readout = report.logical_readout.unwrap();
            let decoded = if report.diagnosis.logical_x {
                1 - logical
            } else {
                logical
            };
            assert_eq!(readout[decoded], 128, "{scenario:?} {input:?}");

            // After correction the data qubits are an exact codeword.
            let data: Vec<_> = report
                .counts
                .bit_reversed()
                .iter()
                .map(|(k, _)| k[..3].to_string())
                .collect();
            let codeword = if decoded == 1 { "111" } else { "000" };
            assert_eq!(data, vec![codeword], "{scenario:?} {input:?}");
        }
    }
}

#[test]
fn seeded_runs_repeat() {
    let config = RunConfig {
        shots: 512,
        seed: Some(7),
        input: LogicalInput::Plus,
        ..Default::default()
    };
    let a = run_scenario(ErrorScenario::YError3, &config).unwrap();
    let b = run_scenario(ErrorScenario::YError3, &config).unwrap();
    assert_eq!(a.counts, b.counts);
}

#[test]
fn drawing_labels_every_wire() {
    let report = &DEFAULT_REPORTS[0];
    let drawing = report.circuit.draw();
    for label in ["q_0", "d_0", "d_1", "a_0", "a_1", "c_0", "c_1"] {
        assert!(drawing.contains(&format!("{label}: ")), "{label}\n{drawing}");
    }
}
