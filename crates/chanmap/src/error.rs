use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read mapping file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't write mapping file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse mapping file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to serialize mapping template: {message}")]
    Template { message: String },

    #[error("Unsupported mapping file type '{path}' (expected extension: {expected})")]
    UnsupportedExtension { path: PathBuf, expected: String },

    #[error("Invalid option string '{raw}': {reason}")]
    InvalidOptions { raw: String, reason: String },

    #[error("Invalid \"when\" value \"{stage}\" for post-processor \"{key}\" (should be: {allowed})")]
    InvalidStage {
        stage: String,
        key: String,
        allowed: String,
    },

    #[error("Remapping after the file transfer is not supported. Register \"{key}\" at \"pre_process\" instead, e.g. --use-postprocessor \"{key}:when=pre_process\"")]
    PostTransferUnsupported { key: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MapperError>;
