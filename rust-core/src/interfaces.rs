// Definitions that are used throughout all modules

use serde::Serialize;

// Order in which the two homogeneous matrices are multiplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionOrder {
    RotationThenTranslation,
    TranslationThenRotation,
}

impl CompositionOrder {
    pub const ALL: [CompositionOrder; 2] = [
        CompositionOrder::RotationThenTranslation,
        CompositionOrder::TranslationThenRotation,
    ];

    /// Product as written left to right
    pub fn label(&self) -> &'static str {
        match self {
            CompositionOrder::RotationThenTranslation => "rotation * translation",
            CompositionOrder::TranslationThenRotation => "translation * rotation",
        }
    }
}

// Text layout of a rendered matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per matrix: Matrix([[a, b, c], [d, e, f], [g, h, i]])
    #[default]
    Inline,
    /// One line per row, columns aligned
    Grid,
    /// One JSON object per matrix
    Json,
}
