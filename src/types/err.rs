//! Error types used in the library.
//!
//! The structures of the library are total: registering an atom, building a clause, and updating a clause never fail.
//! So, errors are limited to configuration.
//!
//! Names of the error enums overlap with corresponding structs.
//  As such, err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
}

/// Noted errors when configuring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// No option has the given name.
    UnknownOption,

    /// The value given for the (named) option could not be parsed.
    InvalidValue(&'static str),

    /// The value given for the (named) option is outside the bounds of the option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped() {
        let error: ErrorKind = ConfigError::OutOfBounds("registry_capacity").into();
        assert_eq!(error, ErrorKind::Config(ConfigError::OutOfBounds("registry_capacity")));
    }
}
