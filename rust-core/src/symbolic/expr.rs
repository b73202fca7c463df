// Symbolic expression tree with automatic canonicalisation
//
// Every constructor returns an expression in canonical form, so two
// expressions that only differ by term or factor order compare equal. No
// trigonometric identities are applied here; see `simplify` for that.

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use super::symbol::Symbol;

/// Elementary functions known to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Function {
    Cos,
    Sin,
}

impl Function {
    pub fn name(&self) -> &'static str {
        match self {
            Function::Cos => "cos",
            Function::Sin => "sin",
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Function::Cos => x.cos(),
            Function::Sin => x.sin(),
        }
    }
}

/// Symbolic expression
///
/// The variant order defines the canonical ordering of factors and terms:
/// integers first, then symbols, then function applications, then powers.
/// That is what makes `px*cos(theta)` come out with the symbol in front.
///
/// Construct expressions through [`Expr::sum`], [`Expr::product`],
/// [`Expr::power`], [`Expr::apply`] or the arithmetic operators. Building the
/// variants by hand bypasses canonicalisation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Expr {
    Integer(i64),
    Symbol(Symbol),
    Apply(Function, Box<Expr>),
    Pow(Box<Expr>, u32),
    /// Integer coefficient first and never 0 or 1; a lone sum factor is distributed instead.
    /// Further integers only appear where folding them would overflow
    Mul(Vec<Expr>),
    /// Like terms merged, integer constant last
    Add(Vec<Expr>),
}

impl Expr {
    pub fn integer(value: i64) -> Expr {
        Expr::Integer(value)
    }

    pub fn symbol(symbol: &Symbol) -> Expr {
        Expr::Symbol(symbol.clone())
    }

    pub fn sin(arg: Expr) -> Expr {
        Self::apply(Function::Sin, arg)
    }

    pub fn cos(arg: Expr) -> Expr {
        Self::apply(Function::Cos, arg)
    }

    /// Apply a function, evaluating it at zero and pulling out a negative sign
    pub fn apply(function: Function, arg: Expr) -> Expr {
        if arg.is_zero() {
            return match function {
                Function::Sin => Expr::Integer(0),
                Function::Cos => Expr::Integer(1),
            };
        }

        if arg.could_extract_minus_sign() {
            let positive = -arg;
            return match function {
                // sin is odd, cos is even
                Function::Sin => -Expr::Apply(Function::Sin, Box::new(positive)),
                Function::Cos => Expr::Apply(Function::Cos, Box::new(positive)),
            };
        }

        Expr::Apply(function, Box::new(arg))
    }

    /// Raise to a non-negative integer power
    pub fn power(base: Expr, exponent: u32) -> Expr {
        match (base, exponent) {
            (_, 0) => Expr::Integer(1),
            (base, 1) => base,
            (Expr::Integer(value), exponent) => match value.checked_pow(exponent) {
                Some(folded) => Expr::Integer(folded),
                None => Expr::Pow(Box::new(Expr::Integer(value)), exponent),
            },
            (Expr::Pow(inner, inner_exponent), exponent) => {
                match inner_exponent.checked_mul(exponent) {
                    Some(combined) => Self::power(*inner, combined),
                    None => Expr::Pow(Box::new(Expr::Pow(inner, inner_exponent)), exponent),
                }
            }
            (Expr::Mul(factors), exponent) => Self::product(
                factors
                    .into_iter()
                    .map(|factor| Self::power(factor, exponent))
                    .collect(),
            ),
            (base, exponent) => Expr::Pow(Box::new(base), exponent),
        }
    }

    /// Canonical sum of the given terms
    ///
    /// Terms whose coefficient would overflow `i64` are kept as separate terms.
    pub fn sum(terms: Vec<Expr>) -> Expr {
        let mut constant: i64 = 0;
        let mut collected: BTreeMap<Expr, i64> = BTreeMap::new();
        let mut unfolded: Vec<Expr> = Vec::new();
        for term in terms {
            Self::collect_term(term, &mut constant, &mut collected, &mut unfolded);
        }

        let mut terms: Vec<Expr> = collected
            .into_iter()
            .filter(|(_, coefficient)| *coefficient != 0)
            .map(|(term, coefficient)| Self::with_coefficient(coefficient, term))
            .collect();
        terms.extend(unfolded);
        if constant != 0 {
            terms.push(Expr::Integer(constant));
        }

        match terms.len() {
            0 => Expr::Integer(0),
            1 => terms.remove(0),
            _ => Expr::Add(terms),
        }
    }

    fn collect_term(
        term: Expr,
        constant: &mut i64,
        collected: &mut BTreeMap<Expr, i64>,
        unfolded: &mut Vec<Expr>,
    ) {
        match term {
            Expr::Add(inner) => {
                for term in inner {
                    Self::collect_term(term, constant, collected, unfolded);
                }
            }
            Expr::Integer(value) => match constant.checked_add(value) {
                Some(total) => *constant = total,
                None => unfolded.push(Expr::Integer(value)),
            },
            other => {
                let (coefficient, rest) = other.as_coeff_term();
                let entry = collected.entry(rest).or_insert(0);
                match entry.checked_add(coefficient) {
                    Some(total) => *entry = total,
                    None => unfolded.push(other),
                }
            }
        }
    }

    /// Canonical product of the given factors
    ///
    /// Integers and exponents that would overflow when folded are kept as separate factors.
    pub fn product(factors: Vec<Expr>) -> Expr {
        let mut coefficient: i64 = 1;
        let mut powers: BTreeMap<Expr, u32> = BTreeMap::new();
        let mut unfolded: Vec<Expr> = Vec::new();
        for factor in factors {
            Self::collect_factor(factor, &mut coefficient, &mut powers, &mut unfolded);
        }

        if coefficient == 0 {
            return Expr::Integer(0);
        }

        let mut factors: Vec<Expr> = powers
            .into_iter()
            .map(|(base, exponent)| Self::power(base, exponent))
            .collect();
        factors.extend(unfolded);

        // A coefficient times a single sum distributes: 2*(x + y) -> 2*x + 2*y
        if coefficient != 1 && factors.len() == 1 && matches!(factors[0], Expr::Add(_)) {
            if let Some(Expr::Add(terms)) = factors.pop() {
                return Self::sum(
                    terms
                        .into_iter()
                        .map(|term| Self::product(vec![Expr::Integer(coefficient), term]))
                        .collect(),
                );
            }
        }

        match (coefficient, factors.len()) {
            (_, 0) => Expr::Integer(coefficient),
            (1, 1) => factors.remove(0),
            (1, _) => Expr::Mul(factors),
            _ => {
                factors.insert(0, Expr::Integer(coefficient));
                Expr::Mul(factors)
            }
        }
    }

    fn collect_factor(
        factor: Expr,
        coefficient: &mut i64,
        powers: &mut BTreeMap<Expr, u32>,
        unfolded: &mut Vec<Expr>,
    ) {
        match factor {
            Expr::Mul(inner) => {
                for factor in inner {
                    Self::collect_factor(factor, coefficient, powers, unfolded);
                }
            }
            Expr::Integer(value) => match coefficient.checked_mul(value) {
                Some(total) => *coefficient = total,
                None => unfolded.push(Expr::Integer(value)),
            },
            other => {
                let (base, exponent) = other.as_base_exp();
                let entry = powers.entry(base).or_insert(0);
                match entry.checked_add(exponent) {
                    Some(total) => *entry = total,
                    None => unfolded.push(other),
                }
            }
        }
    }

    /// Split into integer coefficient and the remaining term: `-3*x*y` -> (-3, x*y)
    pub fn as_coeff_term(&self) -> (i64, Expr) {
        match self {
            Expr::Integer(value) => (*value, Expr::Integer(1)),
            Expr::Mul(factors) => match factors.split_first() {
                Some((Expr::Integer(value), rest)) => {
                    let rest = if rest.len() == 1 {
                        rest[0].clone()
                    } else {
                        Expr::Mul(rest.to_vec())
                    };
                    (*value, rest)
                }
                _ => (1, self.clone()),
            },
            _ => (1, self.clone()),
        }
    }

    /// Split into base and exponent: `x**3` -> (x, 3), `x` -> (x, 1)
    pub fn as_base_exp(&self) -> (Expr, u32) {
        match self {
            Expr::Pow(base, exponent) => ((**base).clone(), *exponent),
            _ => (self.clone(), 1),
        }
    }

    fn with_coefficient(coefficient: i64, term: Expr) -> Expr {
        match (coefficient, term) {
            (1, term) => term,
            (coefficient, Expr::Integer(value)) => match coefficient.checked_mul(value) {
                Some(folded) => Expr::Integer(folded),
                None => Expr::Mul(vec![Expr::Integer(coefficient), Expr::Integer(value)]),
            },
            (coefficient, Expr::Mul(mut factors)) => {
                factors.insert(0, Expr::Integer(coefficient));
                Expr::Mul(factors)
            }
            (coefficient, term) => Expr::Mul(vec![Expr::Integer(coefficient), term]),
        }
    }

    /// True when the expression reads as negative: a negative leading coefficient,
    /// or a sum whose first term has one (`-a + b`)
    pub fn could_extract_minus_sign(&self) -> bool {
        match self {
            Expr::Add(terms) => terms
                .first()
                .is_some_and(|term| term.could_extract_minus_sign()),
            _ => self.as_coeff_term().0 < 0,
        }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Integer(value)
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::Symbol(symbol)
    }
}

impl From<&Symbol> for Expr {
    fn from(symbol: &Symbol) -> Self {
        Expr::symbol(symbol)
    }
}

impl Default for Expr {
    fn default() -> Self {
        Expr::Integer(0)
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::sum(vec![self, rhs])
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::sum(vec![self, -rhs])
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::product(vec![self, rhs])
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::product(vec![Expr::Integer(-1), self])
    }
}

impl AddAssign for Expr {
    fn add_assign(&mut self, rhs: Expr) {
        *self = std::mem::take(self) + rhs;
    }
}

impl SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Expr) {
        *self = std::mem::take(self) - rhs;
    }
}

impl MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Expr) {
        *self = std::mem::take(self) * rhs;
    }
}

// Needed by nalgebra to multiply matrices of expressions
impl Zero for Expr {
    fn zero() -> Self {
        Expr::Integer(0)
    }

    fn is_zero(&self) -> bool {
        matches!(self, Expr::Integer(0))
    }
}

impl One for Expr {
    fn one() -> Self {
        Expr::Integer(1)
    }

    fn is_one(&self) -> bool {
        matches!(self, Expr::Integer(1))
    }
}
