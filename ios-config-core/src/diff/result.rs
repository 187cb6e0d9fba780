use serde::Serialize;

/// A single difference between two configuration documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum BlockChange {
    /// Interface block kept its position but changed name.
    Renamed { from: String, to: String },
    /// A line inside an interface block changed.
    LineChanged {
        block: String,
        left: String,
        right: String,
    },
    /// Global line only in the left input.
    OnlyLeft { line: String },
    /// Global line only in the right input.
    OnlyRight { line: String },
    /// Interface block only in the left input.
    BlockOnlyLeft { block: String },
    /// Interface block only in the right input.
    BlockOnlyRight { block: String },
}
