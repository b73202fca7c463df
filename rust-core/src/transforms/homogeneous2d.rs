// 2D homogeneous transformation matrices over symbolic expressions
// This module provides construction, multiplication and inspection of 3x3 homogeneous matrices

use std::collections::HashMap;

use anyhow::{Context, Error};
use nalgebra::Matrix3;
use num_traits::{One, Zero};

use crate::symbolic::{simplify, Expr, Symbol};

/// 3x3 matrix of symbolic expressions
pub type SymbolicMatrix3 = Matrix3<Expr>;

/// Create a rotation about the origin in homogeneous coordinates
///
/// ```text
/// [cos θ, -sin θ, 0]
/// [sin θ,  cos θ, 0]
/// [0,      0,     1]
/// ```
///
/// # Arguments
/// * `theta` - Rotation angle (counterclockwise), usually a free symbol
pub fn build_rotation(theta: impl Into<Expr>) -> SymbolicMatrix3 {
    let theta = theta.into();
    let cos = Expr::cos(theta.clone());
    let sin = Expr::sin(theta);

    Matrix3::new(
        cos.clone(),
        -sin.clone(),
        Expr::zero(),
        sin,
        cos,
        Expr::zero(),
        Expr::zero(),
        Expr::zero(),
        Expr::one(),
    )
}

/// Create a translation in homogeneous coordinates
///
/// ```text
/// [1, 0, px]
/// [0, 1, py]
/// [0, 0, 1 ]
/// ```
///
/// # Arguments
/// * `px` - Offset along x
/// * `py` - Offset along y
pub fn build_translation(px: impl Into<Expr>, py: impl Into<Expr>) -> SymbolicMatrix3 {
    Matrix3::new(
        Expr::one(),
        Expr::zero(),
        px.into(),
        Expr::zero(),
        Expr::one(),
        py.into(),
        Expr::zero(),
        Expr::zero(),
        Expr::one(),
    )
}

/// Matrix product `a * b`
///
/// Entries are canonicalised but neither expanded nor simplified.
pub fn multiply(a: &SymbolicMatrix3, b: &SymbolicMatrix3) -> SymbolicMatrix3 {
    a * b
}

pub fn identity() -> SymbolicMatrix3 {
    Matrix3::identity()
}

/// Determinant of the upper-left 2x2 block (the linear part of the transform)
pub fn determinant_2x2(matrix: &SymbolicMatrix3) -> Expr {
    minor(matrix, 2, 2)
}

/// Determinant by cofactor expansion along the first row
pub fn determinant(matrix: &SymbolicMatrix3) -> Expr {
    Expr::sum(
        (0..3)
            .map(|col| {
                let sign = if col % 2 == 0 { 1 } else { -1 };
                Expr::product(vec![
                    Expr::integer(sign),
                    matrix[(0, col)].clone(),
                    minor(matrix, 0, col),
                ])
            })
            .collect(),
    )
}

// Determinant of the 2x2 matrix left after removing `row` and `col`
fn minor(matrix: &SymbolicMatrix3, row: usize, col: usize) -> Expr {
    let rows: Vec<usize> = (0..3).filter(|r| *r != row).collect();
    let cols: Vec<usize> = (0..3).filter(|c| *c != col).collect();

    let a = matrix[(rows[0], cols[0])].clone();
    let b = matrix[(rows[0], cols[1])].clone();
    let c = matrix[(rows[1], cols[0])].clone();
    let d = matrix[(rows[1], cols[1])].clone();
    a * d - b * c
}

/// Substitute `value` for `symbol` in every entry
pub fn substitute(matrix: &SymbolicMatrix3, symbol: &Symbol, value: &Expr) -> SymbolicMatrix3 {
    matrix.map(|entry| entry.subs(symbol, value))
}

pub fn simplify_matrix(matrix: &SymbolicMatrix3) -> SymbolicMatrix3 {
    matrix.map(|entry| simplify(&entry))
}

/// Evaluate every entry numerically
///
/// # Errors
/// Fails if an entry depends on a symbol missing from `bindings`
pub fn evaluate_matrix(
    matrix: &SymbolicMatrix3,
    bindings: &HashMap<Symbol, f64>,
) -> Result<Matrix3<f64>, Error> {
    let mut evaluated = Matrix3::zeros();
    for row in 0..3 {
        for col in 0..3 {
            let value = matrix[(row, col)]
                .evaluate(bindings)
                .with_context(|| format!("Cannot evaluate matrix entry ({}, {}).", row, col))?;
            // Normalise -0.0 so it renders as 0
            evaluated[(row, col)] = value + 0.0;
        }
    }
    Ok(evaluated)
}

/// Check the structure shared by every 2D homogeneous transform: last row `[0, 0, 1]`
pub fn is_homogeneous_2d(matrix: &SymbolicMatrix3) -> bool {
    matrix[(2, 0)].is_zero() && matrix[(2, 1)].is_zero() && matrix[(2, 2)].is_one()
}
