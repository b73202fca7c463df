// Explicit simplification pass
//
// Canonicalisation already folds constants and collects like terms. This pass
// additionally rewrites `c*r*sin(x)**2 + c*r*cos(x)**2` into `c*r`.

use super::expr::{Expr, Function};

/// Simplify an expression bottom-up
pub fn simplify(expr: &Expr) -> Expr {
    match expr {
        Expr::Integer(_) | Expr::Symbol(_) => expr.clone(),
        Expr::Apply(function, arg) => Expr::apply(*function, simplify(arg)),
        Expr::Pow(base, exponent) => Expr::power(simplify(base), *exponent),
        Expr::Mul(factors) => Expr::product(factors.iter().map(simplify).collect()),
        Expr::Add(terms) => collapse_pythagorean(terms.iter().map(simplify).collect()),
    }
}

fn collapse_pythagorean(terms: Vec<Expr>) -> Expr {
    let mut current = Expr::sum(terms);
    loop {
        let next = match &current {
            Expr::Add(terms) => find_pythagorean_pair(terms).map(|(i, j, rest)| {
                terms
                    .iter()
                    .enumerate()
                    .filter(|(k, _)| *k != i && *k != j)
                    .map(|(_, term)| term.clone())
                    .chain(std::iter::once(rest))
                    .collect::<Vec<_>>()
            }),
            _ => None,
        };

        match next {
            Some(remaining) => current = Expr::sum(remaining),
            None => return current,
        }
    }
}

// Indices of a `r*sin(x)**2`, `r*cos(x)**2` pair and their common rest `r`
fn find_pythagorean_pair(terms: &[Expr]) -> Option<(usize, usize, Expr)> {
    for (i, term) in terms.iter().enumerate() {
        if let Some((arg, rest)) = split_square(term, Function::Sin) {
            let partner = Expr::product(vec![
                Expr::power(Expr::apply(Function::Cos, arg), 2),
                rest.clone(),
            ]);
            if let Some(j) = terms.iter().position(|other| *other == partner) {
                return Some((i, j, rest));
            }
        }
    }
    None
}

// Split `r*f(x)**2` into (x, r)
fn split_square(term: &Expr, function: Function) -> Option<(Expr, Expr)> {
    let factors = match term {
        Expr::Mul(factors) => factors.as_slice(),
        other => std::slice::from_ref(other),
    };

    let position = factors.iter().position(|factor| match factor {
        Expr::Pow(base, 2) => matches!(base.as_ref(), Expr::Apply(f, _) if *f == function),
        _ => false,
    })?;
    let arg = match &factors[position] {
        Expr::Pow(base, _) => match base.as_ref() {
            Expr::Apply(_, arg) => (**arg).clone(),
            _ => return None,
        },
        _ => return None,
    };

    let rest = Expr::product(
        factors
            .iter()
            .enumerate()
            .filter(|(k, _)| *k != position)
            .map(|(_, factor)| factor.clone())
            .collect(),
    );
    Some((arg, rest))
}
