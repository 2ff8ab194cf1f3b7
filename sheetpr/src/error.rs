//! Error types for sheet property access

use thiserror::Error;

/// Errors returned by the property accessors and the patch/layout loaders
#[derive(Debug, Error)]
pub enum PropsError {
    /// The sheet name does not resolve in the workbook
    #[error("sheet {0} does not exist")]
    SheetNotFound(String),

    /// A layout document lists the same sheet name twice
    #[error("sheet {0} appears more than once")]
    DuplicateSheet(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid patch file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid layout document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PropsError>;
