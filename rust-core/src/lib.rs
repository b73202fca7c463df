//! Symbolic homogeneous transform composition
//!
//! This library builds 2D rotation and translation matrices in homogeneous
//! coordinates over a small symbolic expression engine, multiplies them in both
//! orders and renders the products as text.

pub mod config;
pub mod interfaces;
pub mod symbolic;
pub mod transforms;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
