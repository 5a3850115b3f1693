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
    error::Error,
    io::{self, Write},
};

use bitflip_code::{
    ErrorScenario, RunConfig, ScenarioReport, encoder::LogicalInput, report, run_scenario,
};
use bitflip_sim::DEFAULT_SHOTS;
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate error scenarios and explain their syndromes
    Run {
        /// Scenarios to run; all of them when omitted
        scenarios: Vec<ErrorScenario>,
        #[arg(short, long, default_value_t = DEFAULT_SHOTS)]
        shots: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long, value_enum, default_value_t = LogicalInput::Zero)]
        input: LogicalInput,
        /// Measure the data qubits too, for every scenario
        #[arg(long)]
        measure_all: bool,
        /// Apply the decoded correction inside the circuit
        #[arg(long)]
        correct: bool,
        /// Print the circuit diagram
        #[arg(long)]
        draw: bool,
        /// Print the state right before measurement
        #[arg(long)]
        statevector: bool,
        #[arg(short, long, value_enum, default_value_t = RunFormat::Text)]
        format: RunFormat,
    },
    /// Print the table of expected syndromes and corrections
    Summary {
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Markdown)]
        format: SummaryFormat,
    },
    /// List the scenario names accepted by `run`
    List,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum RunFormat {
    Text,
    /// One JSON object per scenario per line
    Json,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum SummaryFormat {
    Markdown,
    Csv,
}

fn print_text(
    out: &mut impl Write,
    report: &ScenarioReport,
    draw: bool,
    statevector: bool,
) -> io::Result<()> {
    writeln!(out, "### {}", report.title)?;
    writeln!(out)?;
    if draw {
        writeln!(out, "{}", report.circuit.draw())?;
        writeln!(out)?;
    }
    if statevector {
        writeln!(out, "{}", report.statevector)?;
        writeln!(out)?;
    }
    writeln!(out, "{}", report.counts)?;
    if let Some([zero, one]) = report.logical_readout {
        writeln!(out, "Majority vote: logical 0 x{zero}, logical 1 x{one}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", report.annotation)?;
    writeln!(out)
}

fn main() -> Result<(), Box<dyn Error>> {
    // By default log INFO.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Run {
            scenarios,
            shots,
            seed,
            input,
            measure_all,
            correct,
            draw,
            statevector,
            format,
        } => {
            let config = RunConfig {
                shots,
                seed,
                input,
                measure_all,
                correct,
            };
            debug!("Run configuration: {:?}", config);
            let scenarios = if scenarios.is_empty() {
                ErrorScenario::ALL.to_vec()
            } else {
                scenarios
            };
            for scenario in scenarios {
                let report = run_scenario(scenario, &config)?;
                match format {
                    RunFormat::Text => print_text(&mut stdout, &report, draw, statevector)?,
                    RunFormat::Json => {
                        let line = serde_json::to_string(&report)?;
                        writeln!(stdout, "{}", line)?;
                    }
                }
            }
            info!("Done.");
        }
        Commands::Summary { format } => {
            let rows = report::summary_rows();
            match format {
                SummaryFormat::Markdown => write!(stdout, "{}", report::summary_markdown(&rows))?,
                SummaryFormat::Csv => report::write_summary_csv(&rows, &mut stdout)?,
            }
        }
        Commands::List => {
            for scenario in ErrorScenario::ALL {
                let name = scenario
                    .to_possible_value()
                    .map(|v| v.get_name().to_string())
                    .unwrap_or_default();
                writeln!(stdout, "{name:<6} {scenario}")?;
            }
        }
    }

    Ok(())
}
