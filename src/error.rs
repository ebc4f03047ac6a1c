use collections::TableError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("specified table capacity is less than one")]
    InvalidCapacity,

    #[error("specified prefix size is less than one")]
    InvalidPrefixLength,

    #[error("specified size of the generated text is less than one")]
    InvalidWordCount,

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// The argument could not be parsed as an integer
    #[error("argument {name} is not an integer, got: {value:?}")]
    NotAnInteger { name: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum WriterError {
    /// Rejected before any table was allocated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Derived from the prefix table, e.g. running out of slots
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Derived IO error
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
}
