use std::error::Error;

use clap::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlagError {
    /// Tokenizing failed: unknown flag, missing value, help requested, ...
    #[error(transparent)]
    Clap(#[from] clap::Error),

    /// The flag's value rejected the text. The value keeps its previous state.
    #[error("invalid argument {value:?} for --{flag}: {source}")]
    InvalidValue {
        flag: String,
        value: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    #[error("no such flag --{0}")]
    UnknownFlag(String),

    #[error("flag redefined: --{0}")]
    DuplicateFlag(String),

    #[error("shorthand -{shorthand} of --{flag} is already used by --{existing}")]
    DuplicateShorthand {
        shorthand: char,
        flag: String,
        existing: String,
    },

    #[error("invalid flag name {0:?}")]
    InvalidName(String),

    #[error("shorthand {shorthand:?} of --{flag} must be a single character")]
    InvalidShorthand { flag: String, shorthand: String },
}

impl FlagError {
    /// The closest clap error kind, used when reporting through clap.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlagError::Clap(e) => e.kind(),
            FlagError::InvalidValue { .. } => ErrorKind::ValueValidation,
            FlagError::UnknownFlag(_) => ErrorKind::UnknownArgument,
            FlagError::DuplicateFlag(_)
            | FlagError::DuplicateShorthand { .. }
            | FlagError::InvalidName(_)
            | FlagError::InvalidShorthand { .. } => ErrorKind::ArgumentConflict,
        }
    }
}
