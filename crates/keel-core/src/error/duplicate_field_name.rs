use super::{Error, ErrorKind};

/// Error when two members of a record declare the same name.
#[derive(Debug)]
pub(super) struct DuplicateFieldName {
    shape: Box<str>,
    name: Box<str>,
}

impl std::error::Error for DuplicateFieldName {}

impl core::fmt::Display for DuplicateFieldName {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate field name `{}` in `{}`",
            self.name, self.shape
        )
    }
}

impl Error {
    /// Creates a duplicate field name error.
    pub fn duplicate_field_name(shape: impl Into<String>, name: impl Into<String>) -> Error {
        Error::from(ErrorKind::DuplicateFieldName(DuplicateFieldName {
            shape: shape.into().into(),
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate field name error.
    pub fn is_duplicate_field_name(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::DuplicateFieldName(_)))
    }
}
