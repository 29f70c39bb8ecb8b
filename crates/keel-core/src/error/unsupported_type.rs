use super::{Error, ErrorKind};

/// Error when a record member cannot be represented in a model.
///
/// Raised while building a model template; the whole construction is
/// aborted and nothing is cached.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    shape: Box<str>,
    member: Box<str>,
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported type for member `{}` of `{}`",
            self.member, self.shape
        )
    }
}

impl Error {
    /// Creates an unsupported type error naming the offending member.
    pub fn unsupported_type(shape: impl Into<String>, member: impl Into<String>) -> Error {
        Error::from(ErrorKind::UnsupportedType(UnsupportedType {
            shape: shape.into().into(),
            member: member.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::UnsupportedType(_)))
    }
}
