// Transforms module: Contains 2D homogeneous transformation matrices over symbolic expressions
// This module provides rotation/translation construction, composition and rendering

// ======================== MODULE DECLARATIONS ========================
pub mod composer;
pub mod homogeneous2d;
pub mod matrix_format;

// Test modules
mod _tests_composer;
mod _tests_matrix_format;

// ======================== MATRIX CONSTRUCTION & ALGEBRA ========================
pub use homogeneous2d::{
    SymbolicMatrix3,   // type - nalgebra Matrix3<Expr>
    build_rotation,    // fn(theta: impl Into<Expr>) -> SymbolicMatrix3 - rotation about the origin
    build_translation, // fn(px: impl Into<Expr>, py: impl Into<Expr>) -> SymbolicMatrix3 - translation by (px, py)
    multiply,          // fn(a: &SymbolicMatrix3, b: &SymbolicMatrix3) -> SymbolicMatrix3 - matrix product a * b
    identity,          // fn() -> SymbolicMatrix3 - 3x3 identity
    determinant,       // fn(matrix: &SymbolicMatrix3) -> Expr - full 3x3 determinant
    determinant_2x2,   // fn(matrix: &SymbolicMatrix3) -> Expr - determinant of the upper-left 2x2 block
    substitute,        // fn(matrix, symbol: &Symbol, value: &Expr) -> SymbolicMatrix3 - substitutes in every entry
    simplify_matrix,   // fn(matrix: &SymbolicMatrix3) -> SymbolicMatrix3 - simplifies every entry
    evaluate_matrix,   // fn(matrix, bindings: &HashMap<Symbol, f64>) -> Result<Matrix3<f64>, Error> - numeric value
    is_homogeneous_2d, // fn(matrix: &SymbolicMatrix3) -> bool - checks last row is [0, 0, 1]
};

// ======================== RENDERING ========================
pub use matrix_format::{
    entries,       // fn(matrix: &Matrix3<T>) -> Vec<Vec<String>> - rendered entries row by row
    format_inline, // fn(matrix: &Matrix3<T>) -> String - Matrix([[a, b, c], [d, e, f], [g, h, i]])
    format_grid,   // fn(matrix: &Matrix3<T>) -> String - one aligned line per row
    format_json,   // fn(matrix: &Matrix3<T>) -> Result<String, Error> - JSON array of rows
    format_matrix, // fn(matrix: &Matrix3<T>, format: OutputFormat) -> Result<String, Error> - dispatches on format
};

// ======================== COMPOSER ========================
pub use composer::TransformComposer; // struct - owns theta/px/py and both matrices
// TransformComposer impl methods:
//   new(theta: Symbol, px: Symbol, py: Symbol) -> Self        - builds rotation and translation
//   from_names(names: &str) -> Result<Self, Error>            - same, from "theta px py"
//   rotation(&self) / translation(&self) -> &SymbolicMatrix3  - the two factors
//   compose(&self, order: CompositionOrder) -> SymbolicMatrix3 - product in the given order
//   write_report(&self, out: &mut W, format: OutputFormat) -> Result<(), Error> - both products, rotation first
//   write_evaluated_report(&self, out, bindings, format) -> Result<(), Error>   - both products evaluated numerically
//   write_reports(&self, out, format, bindings: Option<&HashMap<Symbol, f64>>) -> Result<(), Error> - symbolic then evaluated, nothing written on failure
