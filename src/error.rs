use thiserror::Error;

use crate::mol::AtomId;

pub type MolResult<T> = Result<T, MolError>;

/// Errors raised while defining elements or building and querying molecules.
///
/// Every variant describes a caller mistake; nothing here is transient.
#[derive(Error, Debug)]
pub enum MolError {
    #[error("cannot bond atom {atom} to itself")]
    SelfBond { atom: AtomId },

    #[error("atom {atom} ({symbol}) is saturated at valence {valence}")]
    Saturated {
        atom: AtomId,
        symbol: String,
        valence: u8,
    },

    #[error("{what} of an empty structure is undefined")]
    EmptyStructure { what: &'static str },

    #[error("unknown element symbol '{symbol}'")]
    UnknownSymbol { symbol: String },

    #[error("element symbol '{symbol}' is already defined")]
    DuplicateSymbol { symbol: String },

    #[error("invalid element '{symbol}': {what}")]
    InvalidElement { symbol: String, what: &'static str },

    #[error("element table config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
