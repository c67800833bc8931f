//! Plain-text rendering of a breakdown result
//!
//! One block per measurement type: populations as columns, treatment groups
//! as rows, preceded by a row of population-level eligible counts.

use itertools::Itertools;

use crate::config::AnalysisConfig;
use crate::error::{OutcomeError, Result};

use super::BreakdownResult;

const ROW_HEADER: &str = "Treatment";
const ELIGIBLE_ROW: &str = "Eligible patients";

/// Render the breakdown as aligned text tables
///
/// Fails with `TableShape` when a treatment row does not have one cell per
/// population header.
pub fn render_table(result: &BreakdownResult, config: &AnalysisConfig) -> Result<String> {
    let headers: Vec<&str> = result
        .populations
        .iter()
        .map(|population| population.name.as_str())
        .collect();
    let mut output = String::new();

    for (type_index, measurement_type) in result.measurement_types.iter().enumerate() {
        let mut rows: Vec<Vec<String>> = Vec::with_capacity(result.treatment_analyses.len() + 1);
        rows.push(
            std::iter::once(ELIGIBLE_ROW.to_string())
                .chain(result.populations.iter().map(|population| {
                    population
                        .eligible_counts
                        .get(type_index)
                        .map_or_else(String::new, ToString::to_string)
                }))
                .collect(),
        );

        for analysis in &result.treatment_analyses {
            if analysis.cells.len() != headers.len() {
                return Err(OutcomeError::TableShape {
                    expected: headers.len(),
                    actual: analysis.cells.len(),
                });
            }
            let mut row = Vec::with_capacity(headers.len() + 1);
            row.push(analysis.treatment.label().to_string());
            for cell in &analysis.cells {
                let measurement = cell.measurements.get(type_index).ok_or_else(|| {
                    OutcomeError::TableShape {
                        expected: result.measurement_types.len(),
                        actual: cell.measurements.len(),
                    }
                })?;
                row.push(measurement_type.render_cell(measurement, config));
            }
            rows.push(row);
        }

        let header_row: Vec<String> = std::iter::once(ROW_HEADER)
            .chain(headers.iter().copied())
            .map(str::to_string)
            .collect();
        let widths = column_widths(&header_row, &rows);

        output.push_str(&format!("{measurement_type}\n"));
        output.push_str(&format_row(&header_row, &widths));
        output.push('\n');
        for row in &rows {
            output.push_str(&format_row(row, &widths));
            output.push('\n');
        }
        output.push('\n');
    }

    Ok(output)
}

fn column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    (0..header.len())
        .map(|column| {
            std::iter::once(header)
                .chain(rows.iter().map(Vec::as_slice))
                .filter_map(|row| row.get(column))
                .map(|text| text.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    row.iter()
        .zip(widths)
        .map(|(text, width)| {
            let padding = width.saturating_sub(text.chars().count());
            format!("{text}{}", " ".repeat(padding))
        })
        .join("  ")
        .trim_end()
        .to_string()
}
