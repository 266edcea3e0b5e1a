use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CapabilityError>;

#[derive(Error, Debug)]
pub enum CapabilityError {
    #[error("Failed to create directory at {}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("Invalid value for {key}: {message}")]
    Config { key: String, message: String },
}

impl CapabilityError {
    pub fn create_directory(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CapabilityError::CreateDirectory {
            path: path.into(),
            source,
        }
    }
}
