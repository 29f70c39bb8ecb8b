use super::{Error, ErrorKind};

/// Error when an object graph or value does not describe the expected
/// record shape.
#[derive(Debug)]
pub(super) struct ShapeMismatch {
    expected: Box<str>,
    actual: Box<str>,
}

impl std::error::Error for ShapeMismatch {}

impl core::fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "shape mismatch: expected `{}`, found `{}`",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a shape mismatch error from two shape keys.
    pub fn shape_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Error {
        Error::from(ErrorKind::ShapeMismatch(ShapeMismatch {
            expected: expected.into().into(),
            actual: actual.into().into(),
        }))
    }

    /// Returns `true` if this error is a shape mismatch error.
    pub fn is_shape_mismatch(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::ShapeMismatch(_)))
    }
}
