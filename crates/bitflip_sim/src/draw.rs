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

//! Plain-text circuit diagrams.
//!
//! Every operation gets its own column. Qubit wires are drawn with `-`,
//! classical wires with `=`. Measurements drop a `|` from the qubit down to
//! a `v` on the classical bit they write.

use crate::circuit::{Circuit, Gate};

const QWIRE: &str = "-----";
const CWIRE: &str = "=====";

impl Circuit {
    pub fn draw(&self) -> String {
        let num_qubits = self.num_qubits();
        let rows = num_qubits + self.num_clbits();

        let labels: Vec<String> = (0..num_qubits)
            .map(|q| self.qubit_label(q))
            .chain((0..self.num_clbits()).map(|c| self.clbit_label(c)))
            .collect();
        let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut lines: Vec<String> = labels
            .iter()
            .map(|l| format!("{l:>width$}: "))
            .collect();

        for gate in self.ops() {
            let column = column(gate, num_qubits, rows);
            for (line, cell) in lines.iter_mut().zip(column) {
                line.push_str(cell);
            }
        }
        for (row, line) in lines.iter_mut().enumerate() {
            line.push_str(if row < num_qubits { QWIRE } else { CWIRE });
        }
        lines.join("\n")
    }
}

fn single(gate: &Gate) -> &'static str {
    match gate {
        Gate::I(_) => "-[I]-",
        Gate::X(_) => "-[X]-",
        Gate::Y(_) => "-[Y]-",
        Gate::Z(_) => "-[Z]-",
        Gate::H(_) => "-[H]-",
        _ => unreachable!("Not a single-qubit gate: {}", gate),
    }
}

/// Cells of one column, one per wire.
fn column(gate: &Gate, num_qubits: usize, rows: usize) -> Vec<&'static str> {
    let mut cells: Vec<&'static str> = (0..rows)
        .map(|row| if row < num_qubits { QWIRE } else { CWIRE })
        .collect();

    // Draw a vertical line on the rows strictly between `from` and `to`.
    let connect = |cells: &mut Vec<&'static str>, from: usize, to: usize| {
        for (row, cell) in cells.iter_mut().enumerate().take(to).skip(from + 1) {
            *cell = if row < num_qubits { "--|--" } else { "==|==" };
        }
    };

    match *gate {
        Gate::I(q) | Gate::X(q) | Gate::Y(q) | Gate::Z(q) | Gate::H(q) => {
            cells[q] = single(gate);
        }
        Gate::Cx { control, target } => {
            connect(&mut cells, control.min(target), control.max(target));
            cells[control] = "--*--";
            cells[target] = "-(+)-";
        }
        Gate::Ccx { controls, target } => {
            let lo = controls[0].min(controls[1]).min(target);
            let hi = controls[0].max(controls[1]).max(target);
            connect(&mut cells, lo, hi);
            cells[controls[0]] = "--*--";
            cells[controls[1]] = "--*--";
            cells[target] = "-(+)-";
        }
        Gate::Barrier => {
            for cell in cells.iter_mut().take(num_qubits) {
                *cell = "--░--";
            }
        }
        Gate::Measure { qubit, clbit } => {
            let row = num_qubits + clbit;
            connect(&mut cells, qubit, row);
            cells[qubit] = "-[M]-";
            cells[row] = "==v==";
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_one_line_per_wire() {
        let mut qc = Circuit::new();
        let q = qc.add_qreg("q", 1);
        let d = qc.add_qreg("d", 1);
        let c = qc.add_creg("c", 1);
        qc.cx(q.get(0), d.get(0)).unwrap();
        qc.measure(d.get(0), c.get(0)).unwrap();

        let drawing = qc.draw();
        let lines: Vec<_> = drawing.lines().collect();
        assert_eq!(
            lines,
            vec![
                "q_0: --*------------",
                "d_0: -(+)--[M]------",
                "c_0: =======v=======",
            ]
        );
    }

    #[test]
    fn vertical_line_crosses_middle_wires() {
        let mut qc = Circuit::new();
        qc.add_qreg("q", 3);
        qc.cx(0, 2).unwrap();
        qc.barrier();
        let drawing = qc.draw();
        let lines: Vec<_> = drawing.lines().collect();
        assert_eq!(lines[0], "q_0: --*----░-------");
        assert_eq!(lines[1], "q_1: --|----░-------");
        assert_eq!(lines[2], "q_2: -(+)---░-------");
    }
}
