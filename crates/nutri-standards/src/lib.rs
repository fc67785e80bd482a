#![deny(unsafe_code)]

//! Loading of the bundled supplement regulatory data file.

pub mod error;
pub mod loader;
pub mod paths;

pub use crate::error::{Result, SourceError};
pub use crate::loader::{load_dataset, load_default_dataset, parse_dataset};
pub use crate::paths::{DATA_FILE_ENV_VAR, bundled_data_path, default_data_path};
