use super::{Error, ErrorKind};

/// Error when a storage or wire scalar cannot be decoded into a type.
#[derive(Debug)]
pub(super) struct DecodeError {
    ty: Box<str>,
    input: Box<str>,
}

impl std::error::Error for DecodeError {}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot decode {} as {}", self.input, self.ty)
    }
}

impl Error {
    /// Creates a decode error naming the target type and the raw input.
    pub fn decode(ty: impl Into<String>, input: &dyn core::fmt::Debug) -> Error {
        Error::from(ErrorKind::Decode(DecodeError {
            ty: ty.into().into(),
            input: format!("{input:?}").into(),
        }))
    }

    /// Returns `true` if this error is a decode error.
    pub fn is_decode(&self) -> bool {
        self.any(|kind| matches!(kind, ErrorKind::Decode(_)))
    }
}
