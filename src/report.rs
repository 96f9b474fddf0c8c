// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Display rows, one per starting integer, and a plain-text table renderer.

use crate::collatz::AffineTransform;
use crate::error::Result;
use crate::memo::CompactSequence;
use crate::solver::{format_pairs, LatticeSolution};

/// Column headers, in row order.
pub const HEADERS: [&str; 8] = [
    "n",
    "binary",
    "sequence",
    "restricted",
    "transform",
    "x equation",
    "y equation",
    "samples",
];

/// Everything shown for one starting integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub start: u64,
    /// Parity digits, one per step.
    pub binary: String,
    /// Sequence compacted against every cached suffix.
    pub compact: String,
    /// Sequence compacted only against cached values below `start`.
    pub restricted: String,
    /// `"{a}x + {b}"`
    pub transform: String,
    pub x_equation: String,
    pub y_equation: String,
    pub samples: String,
    /// Whether the solver found a lattice.
    pub solved: bool,
}

impl TableRow {
    /// Assemble a row. A solver error is shown in place of the equations.
    pub fn new(
        start: u64,
        binary: String,
        compact: &CompactSequence,
        restricted: &CompactSequence,
        transform: &AffineTransform,
        solution: &Result<LatticeSolution>,
        samples: Vec<(num_bigint::BigInt, num_bigint::BigInt)>,
    ) -> Self {
        let (x_equation, y_equation, samples, solved) = match solution {
            Ok(solution) => {
                let equations = solution.equations();
                (equations.x_of_y, equations.y_of_k, format_pairs(&samples), true)
            }
            Err(e) => (e.to_string(), String::new(), String::new(), false),
        };
        Self {
            start,
            binary,
            compact: compact.to_string(),
            restricted: restricted.to_string(),
            transform: transform.to_string(),
            x_equation,
            y_equation,
            samples,
            solved,
        }
    }

    /// Cells in [`HEADERS`] order.
    pub fn cells(&self) -> [String; 8] {
        [
            self.start.to_string(),
            self.binary.clone(),
            self.compact.clone(),
            self.restricted.clone(),
            self.transform.clone(),
            self.x_equation.clone(),
            self.y_equation.clone(),
            self.samples.clone(),
        ]
    }
}

/// Render rows as a left-aligned text table with a header rule.
pub fn render_table(rows: &[TableRow]) -> String {
    let cells: Vec<[String; 8]> = rows.iter().map(TableRow::cells).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &cells {
        write_line(&mut out, row, &widths);
    }
    out
}

fn write_line(out: &mut String, cells: &[String; 8], widths: &[usize; 8]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
