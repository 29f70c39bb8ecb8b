use super::{Error, ErrorKind};

/// Error when more than one member of a record declares `key`.
#[derive(Debug)]
pub(super) struct DuplicatePrimaryKey {
    shape: Box<str>,
    field: Box<str>,
}

impl std::error::Error for DuplicatePrimaryKey {}

impl core::fmt::Display for DuplicatePrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate primary key `{}` in `{}`",
            self.field, self.shape
        )
    }
}

impl Error {
    /// Creates a duplicate primary key error. `field` is the second field
    /// declaring `key`.
    pub fn duplicate_primary_key(shape: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(ErrorKind::DuplicatePrimaryKey(DuplicatePrimaryKey {
            shape: shape.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate primary key error.
    pub fn is_duplicate_primary_key(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::DuplicatePrimaryKey(_)))
    }
}
