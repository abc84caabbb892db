//! Terminal rendering of a [`BoothTrace`].

use booth_vm::{BoothTrace, Operation, StepRecord};
use itertools::Itertools;
use yansi::Paint;

const HEADERS: [&str; 4] = ["Iteration", "Step", "Multiplicand", "Product"];

/// `multiplicand x multiplier = product`, all in binary.
pub fn render_preview(trace: &BoothTrace) -> String {
    format!(
        "Binary: {} x {} = {}",
        trace.multiplicand_bits, trace.multiplier_bits, trace.result_bits
    )
}

/// The full table: header, one row per step and the result row.
pub fn render_table(trace: &BoothTrace) -> String {
    let rows = trace.steps.iter().map(row_cells).collect::<Vec<_>>();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.plain_len);
        }
    }

    let header = HEADERS
        .iter()
        .zip(widths)
        .map(|(title, width)| format!("{title:<width$}").bold().to_string())
        .join("  ");
    let rule = widths.iter().map(|width| "-".repeat(*width)).join("  ");

    let mut lines = vec![header, rule.clone()];
    lines.extend(rows.iter().map(|row| {
        row.iter()
            .zip(widths)
            .map(|(cell, width)| cell.padded(width))
            .join("  ")
            .trim_end()
            .to_string()
    }));
    lines.push(rule.clone());

    let result = format!("RESULT: {}", trace.result_bits);
    lines.push(format!(
        "{}{}",
        " ".repeat(rule.len().saturating_sub(result.len())),
        result.bold()
    ));
    lines.join("\n")
}

/// Preview, table and decimal product.
pub fn render_trace(trace: &BoothTrace) -> String {
    let decimal = trace.multiplicand * trace.multiplier;
    format!(
        "{}\n\n{}\n\nDecimal: {}",
        render_preview(trace),
        render_table(trace),
        decimal
    )
}

/// A cell whose visible width is known independently of its colour codes.
struct Cell {
    text: String,
    plain_len: usize,
}

impl Cell {
    fn plain(text: String) -> Self {
        let plain_len = text.chars().count();
        Self { text, plain_len }
    }

    fn styled(text: String, plain_len: usize) -> Self {
        Self { text, plain_len }
    }

    fn padded(&self, width: usize) -> String {
        format!(
            "{}{}",
            self.text,
            " ".repeat(width.saturating_sub(self.plain_len))
        )
    }
}

fn row_cells(step: &StepRecord) -> [Cell; 4] {
    let iteration = if step.continuation {
        String::new()
    } else {
        step.iteration.to_string()
    };

    let name = step.operation.to_string();
    let operation = match step.operation {
        Operation::Add => Cell::styled(name.green().to_string(), name.len()),
        Operation::Sub => Cell::styled(name.red().to_string(), name.len()),
        Operation::Init | Operation::Asr => Cell::plain(name),
    };

    [
        Cell::plain(iteration),
        operation,
        Cell::plain(step.multiplicand_bits.to_string()),
        product_cell(step),
    ]
}

/// `accumulator multiplier`, with the trailing pair marked when it drives the next add or
/// subtract.
fn product_cell(step: &StepRecord) -> Cell {
    let multiplier = step.multiplier_bits();
    let leading = &multiplier[..multiplier.len() - 1];
    let trailing = step.trailing_bits();
    let plain_len = step.accumulator_bits().len() + 1 + leading.len() + trailing.len();

    let trailing = match step.next_operation() {
        Some(_) => trailing.black().on_yellow().to_string(),
        None => trailing.to_string(),
    };
    Cell::styled(
        format!("{} {}{}", step.accumulator_bits(), leading, trailing),
        plain_len,
    )
}
