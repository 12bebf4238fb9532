use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationsError {
    /// No explicit locales and the host application has none configured.
    /// The Display text is the exact line the binary prints.
    #[error("No locales specified!")]
    NoLocalesAvailable,

    #[error("Failed to parse existing translations at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    /// Existing file parsed as YAML but its top-level key is not the
    /// locale being processed.
    #[error("Unexpected structure in {path}: expected a top-level '{locale}' key")]
    UnexpectedShape { path: PathBuf, locale: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TranslationsError>;
