use super::{Error, ErrorKind};

/// Error when a datum is assigned into a value cell of an incompatible type.
#[derive(Debug)]
pub(super) struct SetTypeMismatch {
    expected: Box<str>,
    actual: Box<str>,
}

impl std::error::Error for SetTypeMismatch {}

impl core::fmt::Display for SetTypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type mismatch: cannot set {} into {}",
            self.actual, self.expected
        )
    }
}

impl Error {
    /// Creates a set type mismatch error.
    pub fn set_type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Error {
        Error::from(ErrorKind::SetTypeMismatch(SetTypeMismatch {
            expected: expected.into().into(),
            actual: actual.into().into(),
        }))
    }

    /// Returns `true` if this error is a set type mismatch error.
    pub fn is_set_type_mismatch(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::SetTypeMismatch(_)))
    }
}
