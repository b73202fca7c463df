// Constants

// Symbols
pub const DEFAULT_SYMBOL_NAMES: &str = "theta px py"; // Rotation angle, then translation offsets
