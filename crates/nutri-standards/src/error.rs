#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML data file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required table [{table}] in {path}")]
    MissingTable { path: PathBuf, table: String },

    #[error("invalid value for {table}.{key} in {path}: expected {expected}")]
    InvalidValue {
        path: PathBuf,
        table: String,
        key: String,
        expected: &'static str,
    },

    #[error("unknown ingredient kind {value:?} for strategy {country} in {path}")]
    UnknownKind {
        path: PathBuf,
        country: String,
        value: String,
    },
}

impl SourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;
