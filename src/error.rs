//! Crate-wide error type

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("a particle already occupies ({x:e}, {y:e})")]
    DuplicatePosition { x: f64, y: f64 },

    #[error("division by zero while computing {0}")]
    DivisionByZero(&'static str),

    #[error("net force has not been computed for the current step")]
    ForceNotComputed,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
