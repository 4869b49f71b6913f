//! Error values returned by the prompt and privilege APIs.
//!
//! Callers branch on the flags carried by [`InputError`] and [`UserError`]
//! rather than on distinct types.

use crate::constants;
use std::io;
use thiserror::Error;

/// Captured text was not an accepted answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct InputError {
    reason: String,
    yes_no_not_provided: bool,
}

impl InputError {
    pub(crate) fn yes_no() -> Self {
        Self {
            reason: constants::YES_NO_REASON.to_string(),
            yes_no_not_provided: true,
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Whether the answer failed the yes/no grammar.
    pub fn yes_no_not_provided(&self) -> bool {
        self.yes_no_not_provided
    }
}

/// The privilege check did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct UserError {
    reason: String,
    not_root: bool,
    check_failed: bool,
}

impl UserError {
    pub(crate) fn not_root(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            not_root: true,
            check_failed: false,
        }
    }

    pub(crate) fn check_failed(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            not_root: false,
            check_failed: true,
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The process is definitely not privileged.
    pub fn is_not_root(&self) -> bool {
        self.not_root
    }

    /// Privilege could not be determined. Not the same as a denial.
    pub fn is_check_failed(&self) -> bool {
        self.check_failed
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Shortcut for `matches!(err, Error::Input(e) if e.yes_no_not_provided())`.
    pub fn is_yes_no_not_provided(&self) -> bool {
        matches!(self, Error::Input(e) if e.yes_no_not_provided())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_error_flags() {
        let err = InputError::yes_no();
        assert!(err.yes_no_not_provided());
        assert_eq!(err.to_string(), "Please specify 'y', 'yes', 'n', or 'no'");
    }

    #[test]
    fn test_user_error_flags_are_independent() {
        let denied = UserError::not_root("nope");
        assert!(denied.is_not_root());
        assert!(!denied.is_check_failed());

        let unknown = UserError::check_failed("lookup failed");
        assert!(!unknown.is_not_root());
        assert!(unknown.is_check_failed());
        assert_eq!(unknown.reason(), "lookup failed");
    }

    #[test]
    fn test_error_wraps_transparently() {
        let err: Error = InputError::yes_no().into();
        assert!(err.is_yes_no_not_provided());
        assert_eq!(err.to_string(), constants::YES_NO_REASON);

        let io_err: Error = io::Error::new(io::ErrorKind::UnexpectedEof, "incomplete line").into();
        assert!(!io_err.is_yes_no_not_provided());
        assert_eq!(io_err.to_string(), "incomplete line");
    }
}
