use std::error;
use std::fmt;
use std::result;

/// Errors returned by the `CollectionWithGet` operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A null element or key was passed where a value is required. The string names the
    /// rejected argument.
    InvalidArgument(&'static str),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(name) => write!(f, "invalid argument: `{}` must not be null", name),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
