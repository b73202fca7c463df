#[cfg(test)]
mod tests {
    use super::super::symbol::{symbols, Symbol};

    #[test]
    fn test_valid_symbol_names() {
        for name in ["theta", "px", "py", "_tmp", "x1", "Alpha_2"] {
            let symbol = Symbol::new(name).unwrap();
            assert_eq!(symbol.name(), name);
            assert_eq!(symbol.to_string(), name);
        }
    }

    #[test]
    fn test_invalid_symbol_names() {
        assert!(Symbol::new("").is_err());
        assert!(Symbol::new("1x").is_err());
        assert!(Symbol::new("p-x").is_err());
        assert!(Symbol::new("theta ").is_err());
        assert!(Symbol::new("θ").is_err());
    }

    #[test]
    fn test_symbols_splitting() {
        let spaced = symbols("theta px py").unwrap();
        let commas = symbols("theta, px, py").unwrap();
        assert_eq!(spaced, commas);
        assert_eq!(spaced.len(), 3);
        assert_eq!(spaced[0].name(), "theta");
        assert_eq!(spaced[2].name(), "py");
    }

    #[test]
    fn test_symbols_errors() {
        assert!(symbols("").is_err());
        assert!(symbols(" , ").is_err());
        assert!(symbols("theta 2px").is_err());
    }

    #[test]
    fn test_symbol_identity_by_name() {
        let a = Symbol::new("px").unwrap();
        let b = Symbol::new("px").unwrap();
        let c = Symbol::new("py").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
    }
}
