use super::{Error, ErrorKind};

/// Error when a type has no scalar, struct or sequence classification.
///
/// Function-, channel- and map-valued members fall in this category, as do
/// unknown kind names received on the wire.
#[derive(Debug)]
pub(super) struct UnsupportedKind {
    kind: Box<str>,
}

impl std::error::Error for UnsupportedKind {}

impl core::fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported kind: {}", self.kind)
    }
}

impl Error {
    /// Creates an unsupported kind error.
    pub fn unsupported_kind(kind: impl Into<String>) -> Error {
        Error::from(ErrorKind::UnsupportedKind(UnsupportedKind {
            kind: kind.into().into(),
        }))
    }

    /// Returns `true` if this error, or its cause, is an unsupported kind error.
    pub fn is_unsupported_kind(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::UnsupportedKind(_)))
    }
}
