use super::{Error, ErrorKind};

/// Error when no member of a record declares `key`.
#[derive(Debug)]
pub(super) struct NoPrimaryKey {
    shape: Box<str>,
}

impl std::error::Error for NoPrimaryKey {}

impl core::fmt::Display for NoPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no primary key declared in `{}`", self.shape)
    }
}

impl Error {
    /// Creates a no primary key error.
    pub fn no_primary_key(shape: impl Into<String>) -> Error {
        Error::from(ErrorKind::NoPrimaryKey(NoPrimaryKey {
            shape: shape.into().into(),
        }))
    }

    /// Returns `true` if this error is a no primary key error.
    pub fn is_no_primary_key(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::NoPrimaryKey(_)))
    }
}
