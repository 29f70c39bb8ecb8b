use super::{Error, ErrorKind};

/// Error when a datum cannot be encoded as the requested kind.
#[derive(Debug)]
pub(super) struct EncodeError {
    ty: Box<str>,
    input: Box<str>,
}

impl std::error::Error for EncodeError {}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot encode {} as {}", self.input, self.ty)
    }
}

impl Error {
    /// Creates an encode error naming the target type and the raw input.
    pub fn encode(ty: impl Into<String>, input: &dyn core::fmt::Debug) -> Error {
        Error::from(ErrorKind::Encode(EncodeError {
            ty: ty.into().into(),
            input: format!("{input:?}").into(),
        }))
    }

    /// Returns `true` if this error is an encode error.
    pub fn is_encode(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::Encode(_)))
    }
}
