// Text rendering of 3x3 matrices

use std::fmt::Display;

use anyhow::Error;
use nalgebra::{Matrix3, Scalar};

use crate::interfaces::OutputFormat;

/// Render every entry, row by row
pub fn entries<T: Scalar + Display>(matrix: &Matrix3<T>) -> Vec<Vec<String>> {
    matrix
        .row_iter()
        .map(|row| row.iter().map(|entry| entry.to_string()).collect())
        .collect()
}

/// Single line: `Matrix([[a, b, c], [d, e, f], [g, h, i]])`
pub fn format_inline<T: Scalar + Display>(matrix: &Matrix3<T>) -> String {
    let rows: Vec<String> = entries(matrix)
        .iter()
        .map(|row| format!("[{}]", row.join(", ")))
        .collect();
    format!("Matrix([{}])", rows.join(", "))
}

/// One line per row with columns padded to a common width
pub fn format_grid<T: Scalar + Display>(matrix: &Matrix3<T>) -> String {
    let cells = entries(matrix);
    let widths: Vec<usize> = (0..3)
        .map(|col| {
            cells
                .iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    cells
        .iter()
        .map(|row| {
            let padded: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(col, (cell, width))| {
                    // Separator stays attached to its cell so the padding lands after it
                    if col + 1 == row.len() {
                        format!("{:<width$}", cell, width = *width)
                    } else {
                        format!("{:<width$}", format!("{},", cell), width = *width + 1)
                    }
                })
                .collect();
            format!("[{}]", padded.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON array of rows, each entry rendered as a string
pub fn format_json<T: Scalar + Display>(matrix: &Matrix3<T>) -> Result<String, Error> {
    Ok(serde_json::to_string(&entries(matrix))?)
}

/// Render in the requested layout
pub fn format_matrix<T: Scalar + Display>(
    matrix: &Matrix3<T>,
    format: OutputFormat,
) -> Result<String, Error> {
    match format {
        OutputFormat::Inline => Ok(format_inline(matrix)),
        OutputFormat::Grid => Ok(format_grid(matrix)),
        OutputFormat::Json => format_json(matrix),
    }
}
