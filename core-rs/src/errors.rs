//! Error types for Triple Lens

use thiserror::Error;

/// Label draft validation failures.
///
/// Each variant carries its own user-facing message; all of them are raised
/// before any request leaves the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Label cannot be empty")]
    EmptyLabel,

    #[error("No entity is focused; select an entity before adding a label")]
    MissingFocus,

    #[error("A label cannot carry both a language tag and a datatype")]
    LanguageAndDatatype,

    #[error("Language tag is enabled but empty")]
    MissingLanguageTag,

    #[error("Datatype is enabled but empty")]
    MissingDatatype,

    #[error("Invalid language tag: {0}")]
    InvalidLanguageTag(String),
}

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Mutation failed: {0}")]
    MutationFailed(String),

    #[error("Invalid label: {0}")]
    InvalidLabel(#[from] LabelError),

    #[error("Malformed binding: missing variable '{0}'")]
    MalformedBinding(String),

    #[error("Invalid term: {0}")]
    InvalidTerm(String),

    #[error("{0} is required")]
    MissingField(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<oxigraph::store::StorageError> for NavError {
    fn from(err: oxigraph::store::StorageError) -> Self {
        NavError::Store(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
