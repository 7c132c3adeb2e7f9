use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BddGenError {
    #[error("The given path is a directory: {0}. Provide the full path to the collection .json file")]
    NotAFile(PathBuf),

    #[error("Collection file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid collection {path}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },

    #[error("The collection file must have a .json extension: {0}")]
    InvalidExtension(String),

    #[error("Failed to create output directory {path}: {source}")]
    Scaffold {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write artifact {path}: {source}")]
    GenerationFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read user input: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BddGenError>;
