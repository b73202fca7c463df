// Composer: builds the rotation and translation matrices and reports both products

use std::collections::HashMap;
use std::io::Write;

use anyhow::{bail, Context, Error};
use log::debug;
use nalgebra::{Matrix3, Scalar};
use serde::Serialize;

use super::homogeneous2d::{
    build_rotation, build_translation, evaluate_matrix, multiply, SymbolicMatrix3,
};
use super::matrix_format::{entries, format_matrix};
use crate::interfaces::{CompositionOrder, OutputFormat};
use crate::symbolic::{symbols, Symbol};

/// Rotation by `theta` and translation by `(px, py)`, built once and never mutated
#[derive(Debug, Clone)]
pub struct TransformComposer {
    theta: Symbol,
    px: Symbol,
    py: Symbol,
    rotation: SymbolicMatrix3,
    translation: SymbolicMatrix3,
}

#[derive(Debug, Serialize)]
struct ProductReport<'a> {
    product: &'a str,
    order: CompositionOrder,
    evaluated: bool,
    rows: Vec<Vec<String>>,
}

impl TransformComposer {
    pub fn new(theta: Symbol, px: Symbol, py: Symbol) -> Self {
        let rotation = build_rotation(&theta);
        let translation = build_translation(&px, &py);
        debug!("Built rotation by {} and translation by ({}, {})", theta, px, py);

        Self {
            theta,
            px,
            py,
            rotation,
            translation,
        }
    }

    /// Create from three names: angle, x offset, y offset
    pub fn from_names(names: &str) -> Result<Self, Error> {
        let symbols =
            symbols(names).with_context(|| format!("Cannot create symbols from '{}'.", names))?;
        match <[Symbol; 3]>::try_from(symbols) {
            Ok([theta, px, py]) => Ok(Self::new(theta, px, py)),
            Err(symbols) => bail!(
                "Expected exactly 3 symbol names (angle, x offset, y offset), got {}.",
                symbols.len()
            ),
        }
    }

    pub fn theta(&self) -> &Symbol {
        &self.theta
    }

    pub fn px(&self) -> &Symbol {
        &self.px
    }

    pub fn py(&self) -> &Symbol {
        &self.py
    }

    pub fn rotation(&self) -> &SymbolicMatrix3 {
        &self.rotation
    }

    pub fn translation(&self) -> &SymbolicMatrix3 {
        &self.translation
    }

    /// Multiply the two matrices in the given order
    pub fn compose(&self, order: CompositionOrder) -> SymbolicMatrix3 {
        debug!("Composing {}", order.label());
        match order {
            CompositionOrder::RotationThenTranslation => multiply(&self.rotation, &self.translation),
            CompositionOrder::TranslationThenRotation => multiply(&self.translation, &self.rotation),
        }
    }

    /// Write `rotation * translation`, then `translation * rotation`
    pub fn write_report<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<(), Error> {
        for order in CompositionOrder::ALL {
            let product = self.compose(order);
            write_block(out, &product, order, format, false)?;
        }
        Ok(())
    }

    /// Write both products evaluated at the given symbol values
    ///
    /// Nothing is written unless both products evaluate.
    pub fn write_evaluated_report<W: Write>(
        &self,
        out: &mut W,
        bindings: &HashMap<Symbol, f64>,
        format: OutputFormat,
    ) -> Result<(), Error> {
        let products = self.evaluate_all(bindings)?;
        write_evaluated_blocks(out, &products, format)
    }

    /// Write the symbolic report, followed by the evaluated one when bindings are given
    ///
    /// Evaluation happens before anything is written, so a missing binding
    /// leaves `out` untouched.
    pub fn write_reports<W: Write>(
        &self,
        out: &mut W,
        format: OutputFormat,
        bindings: Option<&HashMap<Symbol, f64>>,
    ) -> Result<(), Error> {
        let evaluated = bindings
            .map(|bindings| self.evaluate_all(bindings))
            .transpose()?;

        self.write_report(out, format)?;
        if let Some(products) = evaluated {
            write_evaluated_blocks(out, &products, format)?;
        }
        Ok(())
    }

    fn evaluate_all(
        &self,
        bindings: &HashMap<Symbol, f64>,
    ) -> Result<Vec<(CompositionOrder, Matrix3<f64>)>, Error> {
        CompositionOrder::ALL
            .into_iter()
            .map(|order| {
                evaluate_matrix(&self.compose(order), bindings)
                    .with_context(|| format!("Cannot evaluate {}.", order.label()))
                    .map(|product| (order, product))
            })
            .collect()
    }
}

fn write_evaluated_blocks<W: Write>(
    out: &mut W,
    products: &[(CompositionOrder, Matrix3<f64>)],
    format: OutputFormat,
) -> Result<(), Error> {
    for (order, product) in products {
        write_block(out, product, *order, format, true)?;
    }
    Ok(())
}

fn write_block<W: Write, T: Scalar + std::fmt::Display>(
    out: &mut W,
    matrix: &Matrix3<T>,
    order: CompositionOrder,
    format: OutputFormat,
    evaluated: bool,
) -> Result<(), Error> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(&ProductReport {
            product: order.label(),
            order,
            evaluated,
            rows: entries(matrix),
        })?,
        OutputFormat::Grid => {
            let suffix = if evaluated { " (evaluated)" } else { "" };
            format!("{}{} =\n{}", order.label(), suffix, format_matrix(matrix, format)?)
        }
        OutputFormat::Inline => format_matrix(matrix, format)?,
    };
    writeln!(out, "{}", text).context("Failed to write matrix to output.")?;
    Ok(())
}
