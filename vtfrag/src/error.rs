use thiserror::Error;

use crate::{ControlFunction, handler::Failure, pattern::SequenceKey};

/// Errors originating from the `vtfrag` parsers and their factory.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("{function} and {existing} share the key {key}")]
    DuplicateKey {
        key: SequenceKey,
        existing: ControlFunction,
        function: ControlFunction,
    },

    #[error("failed to decode function at {offset}: {source}")]
    Decode { offset: usize, source: DecodeError },

    #[error("text handler failed at {offset}: {failure}")]
    Text { offset: usize, failure: Failure },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("failed to read options: {0}")]
    Options(#[from] serde_json::Error),
}

/// Malformed function pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("placeholder at {position} of `{pattern}` is not closed")]
    UnclosedPlaceholder { pattern: String, position: usize },

    #[error("unknown placeholder `{name}` in `{pattern}`")]
    UnknownPlaceholder { pattern: String, name: String },

    #[error("pattern `{pattern}` does not end with a final byte")]
    MissingFinalByte { pattern: String },
}

/// Arguments of a recognised function that cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(
        "{function}: parameter {position} of `{parameters}` is empty and has no default"
    )]
    MissingDefault {
        function: ControlFunction,
        position: usize,
        parameters: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
