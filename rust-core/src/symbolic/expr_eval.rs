// Substitution and numeric evaluation of expressions

use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use anyhow::{anyhow, Context, Error};

use super::expr::Expr;
use super::symbol::Symbol;

impl Expr {
    /// Replace every occurrence of `symbol` by `value` and re-canonicalise
    pub fn subs(&self, symbol: &Symbol, value: &Expr) -> Expr {
        match self {
            Expr::Integer(_) => self.clone(),
            Expr::Symbol(s) if s == symbol => value.clone(),
            Expr::Symbol(_) => self.clone(),
            Expr::Apply(function, arg) => Expr::apply(*function, arg.subs(symbol, value)),
            Expr::Pow(base, exponent) => Expr::power(base.subs(symbol, value), *exponent),
            Expr::Mul(factors) => Expr::product(
                factors
                    .iter()
                    .map(|factor| factor.subs(symbol, value))
                    .collect(),
            ),
            Expr::Add(terms) => {
                Expr::sum(terms.iter().map(|term| term.subs(symbol, value)).collect())
            }
        }
    }

    /// All symbols the expression still depends on
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        let mut found = BTreeSet::new();
        self.collect_symbols(&mut found);
        found
    }

    fn collect_symbols(&self, found: &mut BTreeSet<Symbol>) {
        match self {
            Expr::Integer(_) => {}
            Expr::Symbol(symbol) => {
                found.insert(symbol.clone());
            }
            Expr::Apply(_, arg) => arg.collect_symbols(found),
            Expr::Pow(base, _) => base.collect_symbols(found),
            Expr::Mul(children) | Expr::Add(children) => {
                for child in children {
                    child.collect_symbols(found);
                }
            }
        }
    }

    /// Evaluate numerically; every free symbol must be bound
    pub fn evaluate(&self, bindings: &HashMap<Symbol, f64>) -> Result<f64, Error> {
        match self {
            Expr::Integer(value) => Ok(*value as f64),
            Expr::Symbol(symbol) => bindings
                .get(symbol)
                .copied()
                .ok_or_else(|| anyhow!("Symbol '{}' has no value bound.", symbol)),
            Expr::Apply(function, arg) => Ok(function.evaluate(arg.evaluate(bindings)?)),
            Expr::Pow(base, exponent) => {
                let exponent = i32::try_from(*exponent)
                    .with_context(|| format!("Exponent {} is too large to evaluate.", exponent))?;
                Ok(base.evaluate(bindings)?.powi(exponent))
            }
            Expr::Mul(factors) => factors
                .iter()
                .try_fold(1.0, |acc, factor| {
                    Ok::<f64, Error>(acc * factor.evaluate(bindings)?)
                }),
            Expr::Add(terms) => terms
                .iter()
                .try_fold(0.0, |acc, term| {
                    Ok::<f64, Error>(acc + term.evaluate(bindings)?)
                }),
        }
    }
}

/// A `NAME=VALUE` assignment of a number to a symbol
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub symbol: Symbol,
    pub value: f64,
}

impl FromStr for Binding {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (name, value) = text
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected NAME=VALUE, got '{}'.", text))?;
        let symbol = Symbol::new(name.trim())?;
        let value = value
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Invalid value for '{}': '{}'.", symbol, value.trim()))?;

        Ok(Binding { symbol, value })
    }
}

/// Collect bindings into a lookup table; later bindings win
pub fn bindings_map(bindings: &[Binding]) -> HashMap<Symbol, f64> {
    bindings
        .iter()
        .map(|binding| (binding.symbol.clone(), binding.value))
        .collect()
}
