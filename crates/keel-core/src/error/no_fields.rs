use super::{Error, ErrorKind};

/// Error when no member of a record survives traversal.
#[derive(Debug)]
pub(super) struct NoFields {
    shape: Box<str>,
}

impl std::error::Error for NoFields {}

impl core::fmt::Display for NoFields {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no fields declared in `{}`", self.shape)
    }
}

impl Error {
    /// Creates a no fields error.
    pub fn no_fields(shape: impl Into<String>) -> Error {
        Error::from(ErrorKind::NoFields(NoFields {
            shape: shape.into().into(),
        }))
    }

    /// Returns `true` if this error is a no fields error.
    pub fn is_no_fields(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::NoFields(_)))
    }
}
