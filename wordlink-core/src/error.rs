//! Core error types (deterministic only)

use thiserror::Error;

/// Core errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A keyword was added after the failure links were computed
    #[error("automaton is sealed; cannot add keyword {keyword:?}")]
    Sealed {
        /// The rejected keyword, lossily decoded for display
        keyword: String,
    },
}

impl CoreError {
    pub(crate) fn sealed(keyword: &[u8]) -> Self {
        CoreError::Sealed {
            keyword: String::from_utf8_lossy(keyword).into_owned(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sealed_error_display() {
        let error = CoreError::sealed(b"foo");
        assert_eq!(
            error.to_string(),
            "automaton is sealed; cannot add keyword \"foo\""
        );
    }

    #[test]
    fn test_sealed_error_lossy_keyword() {
        let error = CoreError::sealed(&[0x66, 0xff]);
        match error {
            CoreError::Sealed { keyword } => assert_eq!(keyword, "f\u{fffd}"),
        }
    }
}
