use std::{io, str::Utf8Error};

use thiserror::Error;

use crate::model::{beatmap::TooSuspicious, mode::Mode};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Null pointer")]
    Null,

    #[error("Panicked: {0}")]
    Panic(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("Invalid string: {0}")]
    InvalidString(String),

    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Conversion failed: {0}")]
    Convert(String),

    #[error("Mode mismatch: expected {expected:?}, got {actual:?}")]
    ModeMismatch { expected: Mode, actual: Mode },

    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Beatmap is too suspicious: {0}")]
    TooSuspicious(TooSuspicious),
}

/// Broad class of an [`Error`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    /// Malformed strings or JSON, out-of-range overrides.
    InputValidation,
    /// Failure to load or create a resource.
    Resource,
    /// Fault surfaced while calculating.
    Engine,
    /// Values of different modes were combined.
    ModeMismatch,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Utf8(_) | Self::InvalidString(_) | Self::Serialize(_) | Self::OutOfRange { .. } => {
                ErrorCategory::InputValidation
            }
            Self::Null | Self::Io(_) | Self::TooSuspicious(_) => ErrorCategory::Resource,
            Self::Panic(_) => ErrorCategory::Engine,
            Self::Convert(_) | Self::ModeMismatch { .. } => ErrorCategory::ModeMismatch,
        }
    }

    pub(crate) fn check_range(
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> std::result::Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                name,
                value,
                min,
                max,
            })
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(Error::Null.category(), ErrorCategory::Resource);
        assert_eq!(
            Error::InvalidString("H D".into()).category(),
            ErrorCategory::InputValidation
        );
        assert_eq!(
            Error::ModeMismatch {
                expected: Mode::Osu,
                actual: Mode::Mania
            }
            .category(),
            ErrorCategory::ModeMismatch
        );
        assert_eq!(Error::Panic("boom".into()).category(), ErrorCategory::Engine);
    }

    #[test]
    fn range() {
        assert!(Error::check_range("clock rate", 1.5, 0.01, 100.0).is_ok());
        assert!(Error::check_range("clock rate", f64::NAN, 0.01, 100.0).is_err());

        let err = Error::check_range("ar", 21.0, -20.0, 20.0).unwrap_err();
        assert_eq!(err.to_string(), "ar must be between -20 and 20, got 21");
    }
}
