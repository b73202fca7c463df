// Text rendering of expressions
//
// Notation: `*` for products, `**` for powers, `cos(x)`/`sin(x)` for
// function application, negative terms of a sum written with ` - `.

use std::fmt;

use super::expr::Expr;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Integer(value) => write!(f, "{}", value),
            Expr::Symbol(symbol) => write!(f, "{}", symbol),
            Expr::Apply(function, arg) => write!(f, "{}({})", function.name(), arg),
            Expr::Pow(base, exponent) => {
                write_power_base(f, base)?;
                write!(f, "**{}", exponent)
            }
            Expr::Mul(factors) => write_product(f, factors),
            Expr::Add(terms) => write_sum(f, terms),
        }
    }
}

fn write_power_base(f: &mut fmt::Formatter<'_>, base: &Expr) -> fmt::Result {
    match base {
        Expr::Add(_) | Expr::Mul(_) | Expr::Pow(..) => write!(f, "({})", base),
        Expr::Integer(value) if *value < 0 => write!(f, "({})", base),
        _ => write!(f, "{}", base),
    }
}

fn write_factor(f: &mut fmt::Formatter<'_>, factor: &Expr) -> fmt::Result {
    match factor {
        Expr::Add(_) => write!(f, "({})", factor),
        _ => write!(f, "{}", factor),
    }
}

fn write_product(f: &mut fmt::Formatter<'_>, factors: &[Expr]) -> fmt::Result {
    let rest = match factors.split_first() {
        Some((Expr::Integer(-1), rest)) if !rest.is_empty() => {
            f.write_str("-")?;
            rest
        }
        _ => factors,
    };

    for (index, factor) in rest.iter().enumerate() {
        if index > 0 {
            f.write_str("*")?;
        }
        write_factor(f, factor)?;
    }
    Ok(())
}

fn write_sum(f: &mut fmt::Formatter<'_>, terms: &[Expr]) -> fmt::Result {
    for (index, term) in terms.iter().enumerate() {
        let (coefficient, _) = term.as_coeff_term();
        match (index, coefficient < 0) {
            (0, _) => write!(f, "{}", term)?,
            (_, true) => write!(f, " - {}", -term.clone())?,
            (_, false) => write!(f, " + {}", term)?,
        }
    }
    Ok(())
}
