// Symbolic module: Contains the expression engine the transform matrices are built on
// This module provides symbols, canonical expressions, rendering, substitution and simplification

// ======================== MODULE DECLARATIONS ========================
pub mod expr;
pub mod expr_display;
pub mod expr_eval;
pub mod simplify;
pub mod symbol;

mod _tests_symbol;

// ======================== SYMBOLS ========================
pub use symbol::{
    Symbol,  // struct - named free variable with a validated identifier name
    symbols, // fn(names: &str) -> Result<Vec<Symbol>, Error> - creates symbols from "a b c" or "a, b, c"
};
// Symbol impl methods:
//   new(name: &str) -> Result<Self, Error>                    - creates symbol, rejects non-identifier names
//   name(&self) -> &str                                        - returns symbol name

// ======================== EXPRESSIONS ========================
pub use expr::{
    Expr,     // enum - canonical expression tree (Integer, Symbol, Apply, Pow, Mul, Add)
    Function, // enum - elementary functions (Cos, Sin)
};
// Expr constructors (all return canonical form):
//   integer(value: i64) -> Expr                                - integer constant
//   symbol(symbol: &Symbol) -> Expr                            - free symbol
//   sin(arg: Expr) / cos(arg: Expr) -> Expr                    - function application, folds at 0 and pulls out signs
//   apply(function: Function, arg: Expr) -> Expr               - generic function application
//   power(base: Expr, exponent: u32) -> Expr                   - integer power
//   sum(terms: Vec<Expr>) -> Expr                              - flattened sum with like terms collected
//   product(factors: Vec<Expr>) -> Expr                        - flattened product with like factors collected
// Operators: +, -, *, unary -, +=, -=, *=; num_traits::{Zero, One} for nalgebra matrices
// Display: standard notation, e.g. px*cos(theta) - py*sin(theta)

// ======================== SUBSTITUTION & EVALUATION ========================
pub use expr_eval::{
    Binding,      // struct - NAME=VALUE pair, parsed with FromStr
    bindings_map, // fn(bindings: &[Binding]) -> HashMap<Symbol, f64> - lookup table for evaluate
};
// Expr impl methods:
//   subs(&self, symbol: &Symbol, value: &Expr) -> Expr         - substitutes and re-canonicalises
//   free_symbols(&self) -> BTreeSet<Symbol>                    - symbols the expression depends on
//   evaluate(&self, bindings: &HashMap<Symbol, f64>) -> Result<f64, Error> - numeric value

// ======================== SIMPLIFICATION ========================
pub use simplify::simplify; // fn(expr: &Expr) -> Expr - applies sin(x)**2 + cos(x)**2 = 1
