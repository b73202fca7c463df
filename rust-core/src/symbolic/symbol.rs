use std::fmt;

use anyhow::{bail, Error};

/// A named free variable
///
/// Symbols carry no value. Two symbols with the same name are the same symbol.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    name: String,
}

impl Symbol {
    /// Create a symbol, rejecting names that are not identifiers
    pub fn new(name: &str) -> Result<Self, Error> {
        let mut chars = name.chars();
        match chars.next() {
            None => bail!("Symbol name is empty."),
            Some(first) if !(first.is_ascii_alphabetic() || first == '_') => {
                bail!("Symbol name '{}' must start with a letter or underscore.", name)
            }
            Some(_) => {}
        }
        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            bail!("Symbol name '{}' contains invalid character '{}'.", name, bad);
        }

        Ok(Symbol {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Create several symbols from a whitespace or comma separated list of names
///
/// `symbols("theta px py")` and `symbols("theta, px, py")` are equivalent.
pub fn symbols(names: &str) -> Result<Vec<Symbol>, Error> {
    let symbols = names
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .map(Symbol::new)
        .collect::<Result<Vec<_>, _>>()?;

    if symbols.is_empty() {
        bail!("No symbol names found in '{}'.", names);
    }

    Ok(symbols)
}
